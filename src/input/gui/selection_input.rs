use crate::core::data::pixel_selection::PixelSelection;
use crate::core::data::point::Point;
use winit::event::ElementState;

/// Turns left-button press/release pairs into pixel selections.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionInput {
    cursor: Point,
    pressed_at: Option<Point>,
}

impl SelectionInput {
    pub fn cursor_moved(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    /// Returns the finished selection on release.
    pub fn button(&mut self, state: ElementState) -> Option<PixelSelection> {
        match state {
            ElementState::Pressed => {
                self.pressed_at = Some(self.cursor);
                None
            }
            ElementState::Released => self
                .pressed_at
                .take()
                .map(|start| PixelSelection::new(start, self.cursor)),
        }
    }

    /// The selection in progress while the button is held.
    #[must_use]
    pub fn dragging(&self) -> Option<PixelSelection> {
        self.pressed_at
            .map(|start| PixelSelection::new(start, self.cursor))
    }
}
