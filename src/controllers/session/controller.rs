use crate::controllers::session::errors::SessionError;
use crate::controllers::session::settings::SessionSettings;
use crate::core::actions::build_frame::build_frame;
use crate::core::actions::resolve_viewport::resolve_viewport;
use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::pixel_selection::{PixelSelection, SelectionShape};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

pub struct SessionController {
    settings: SessionSettings,
    colour_map: Box<dyn ColourMap>,
    viewport: Option<Viewport>,
    frame: Option<FrameBuffer>,
}

impl SessionController {
    #[must_use]
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            colour_map: colour_map_factory(settings.colour_map_kind, settings.max_iterations),
            settings,
            viewport: None,
            frame: None,
        }
    }

    /// Renders the first view of the fractal.
    pub fn start(&mut self) -> Result<&FrameBuffer, SessionError> {
        self.viewport = None;
        self.apply_selection(PixelSelection::click(Point::default()))
    }

    /// Resolves `selection` against the current viewport and renders the result.
    ///
    /// Before the first view the selection is ignored.
    pub fn apply_selection(&mut self, selection: PixelSelection) -> Result<&FrameBuffer, SessionError> {
        let gesture = match (self.viewport, selection.shape()) {
            (None, _) => "initial",
            (Some(_), SelectionShape::Rectangle { .. }) => "zoom",
            (Some(_), SelectionShape::Click(_)) => "pan",
        };

        let viewport = resolve_viewport(
            self.settings.kind,
            self.viewport,
            selection,
            self.settings.grid,
        );

        tracing::info!("{} {} -> {}", self.settings.kind, gesture, viewport);

        let frame = build_frame(
            self.settings.kind,
            viewport,
            self.settings.grid,
            self.settings.max_iterations,
            self.colour_map.as_ref(),
        )?;

        self.viewport = Some(viewport);

        Ok(&*self.frame.insert(frame))
    }

    /// Returns to the first view.
    pub fn reset(&mut self) -> Result<&FrameBuffer, SessionError> {
        self.start()
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}
