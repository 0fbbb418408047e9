//! Input adapters: the headless command line, the stdin menus and the
//! interactive window.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod prompt;
