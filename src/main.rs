use clap::Parser;
use fractal_zoom::{PpmFilePresenter, RenderArgs, RenderCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_zoom::init_tracing();

    let args = RenderArgs::parse();
    let command = RenderCommand::new(args, PpmFilePresenter::new());

    command.execute()
}
