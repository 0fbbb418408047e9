use clap::Parser;
use fractal_zoom::{GuiArgs, RunGuiCommand};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_zoom::init_tracing();

    let args = GuiArgs::parse();
    let settings =
        fractal_zoom::settings_from_prompt(&args.session, &mut io::stdin().lock(), &mut io::stdout())?;

    let Some(settings) = settings else {
        println!("*** End Of Processing ***");
        return Ok(());
    };

    RunGuiCommand::new(settings).execute()
}
