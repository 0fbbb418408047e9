//! Interactive window: winit for events, pixels for the framebuffer.

mod app;
pub mod commands;
mod selection_input;
