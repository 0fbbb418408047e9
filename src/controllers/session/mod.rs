//! Session controller for zoom/pan exploration.
//!
//! The session owns the current viewport and threads it explicitly through
//! the viewport resolver on every gesture, then rebuilds the whole frame.

mod controller;
pub mod errors;
pub mod settings;

pub use controller::SessionController;
pub use errors::SessionError;
pub use settings::SessionSettings;
