//! Main GUI application loop.

use crate::adapters::pixel_format::copy_packed_to_rgba;
use crate::adapters::selection_overlay::draw_selection_outline;
use crate::controllers::session::{SessionController, SessionError};
use crate::core::data::pixel_selection::{PixelSelection, SelectionShape};
use crate::core::data::point::Point;
use crate::input::gui::selection_input::SelectionInput;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::EventLoopWindowTarget,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

/// Owns the drawing surface and the session behind it.
pub struct GuiApp {
    window: &'static Window,
    pixels: Pixels<'static>,
    session: SessionController,
    selection: SelectionInput,
}

impl GuiApp {
    /// The pixel buffer matches the session grid; the surface stretches it
    /// over the window.
    pub fn new(window: &'static Window, session: SessionController) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let grid = session.settings().grid;
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(grid.width(), grid.height(), surface_texture)?;

        Ok(Self {
            window,
            pixels,
            session,
            selection: SelectionInput::default(),
        })
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.session.start()?;
        self.window.request_redraw();

        Ok(())
    }

    pub fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };

        if window_id != self.window.id() {
            return;
        }

        let outcome = match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
                Ok(())
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.handle_key(code, elwt),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position);
                Ok(())
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.handle_left_button(state),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Right,
                ..
            } => {
                elwt.exit();
                Ok(())
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Err(err) = self.pixels.resize_surface(size.width, size.height) {
                        tracing::error!("surface resize failed: {}", err);
                        elwt.exit();
                    }
                }
                Ok(())
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.draw(self.selection.dragging()) {
                    tracing::error!("render failed: {}", err);
                    elwt.exit();
                }
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(err) = outcome {
            tracing::error!("{}", err);
            elwt.exit();
        }
    }

    fn handle_key(
        &mut self,
        code: KeyCode,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<(), SessionError> {
        match code {
            KeyCode::KeyQ => elwt.exit(),
            KeyCode::KeyR => {
                self.session.reset()?;
                self.window.request_redraw();
            }
            _ => {}
        }

        Ok(())
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        self.selection.cursor_moved(Point::new(x as i32, y as i32));

        if self.selection.dragging().is_some() {
            self.window.request_redraw();
        }
    }

    fn handle_left_button(&mut self, state: ElementState) -> Result<(), SessionError> {
        let Some(selection) = self.selection.button(state) else {
            return Ok(());
        };

        // Keep the zoom rectangle on screen while the new frame is computed.
        if let SelectionShape::Rectangle { .. } = selection.shape() {
            if let Err(err) = self.draw(Some(selection)) {
                tracing::warn!("selection outline not shown: {}", err);
            }
        }

        self.session.apply_selection(selection)?;
        self.window.request_redraw();

        Ok(())
    }

    /// Copies the last frame to the surface without recomputing it.
    fn draw(&mut self, outline: Option<PixelSelection>) -> Result<(), pixels::Error> {
        let Some(frame) = self.session.frame() else {
            return Ok(());
        };

        let surface = self.pixels.frame_mut();
        copy_packed_to_rgba(frame.pixels(), surface);

        if let Some(selection) = outline {
            draw_selection_outline(surface, frame.grid(), selection);
        }

        self.pixels.render()
    }
}
