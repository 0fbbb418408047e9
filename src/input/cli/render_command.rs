use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::SessionController;
use crate::input::cli::args::RenderArgs;
use std::error::Error;

/// Renders the first view, replays each `--select` gesture in order and
/// writes the final frame.
pub struct RenderCommand<P: FilePresenterPort> {
    args: RenderArgs,
    presenter: P,
}

impl<P: FilePresenterPort> RenderCommand<P> {
    pub fn new(args: RenderArgs, presenter: P) -> Self {
        Self { args, presenter }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let settings = self.args.session.settings()?;
        let mut session = SessionController::new(settings);

        tracing::info!(
            "rendering {} at {}x{}, {} iterations",
            settings.kind,
            settings.grid.width(),
            settings.grid.height(),
            settings.max_iterations
        );

        session.start()?;

        for &selection in &self.args.selections {
            session.apply_selection(selection)?;
        }

        let frame = session.frame().ok_or("session produced no frame")?;

        if let Some(parent) = self.args.output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        self.presenter.present(frame, &self.args.output)?;

        tracing::info!("wrote {}", self.args.output.display());

        Ok(())
    }
}
