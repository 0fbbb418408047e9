use crate::controllers::session::{SessionController, SessionSettings};
use crate::input::gui::app::GuiApp;
use std::error::Error;
use winit::{dpi::PhysicalSize, event_loop::EventLoop, window::WindowBuilder};

pub struct RunGuiCommand {
    settings: SessionSettings,
}

impl RunGuiCommand {
    pub fn new(settings: SessionSettings) -> Self {
        Self { settings }
    }

    /// Opens the window and blocks until the user quits.
    ///
    /// Failing to create the window or its surface is returned as an error
    /// before any fractal is computed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let grid = self.settings.grid;

        // Leak the window to get a 'static reference for pixels
        let window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.settings.kind.window_title())
                .with_inner_size(PhysicalSize::new(grid.width(), grid.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let mut app = GuiApp::new(window, SessionController::new(self.settings))?;
        app.start()?;

        event_loop.run(move |event, elwt| app.handle_event(event, elwt))?;

        Ok(())
    }
}
