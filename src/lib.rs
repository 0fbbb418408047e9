mod adapters;
mod controllers;
mod core;
mod input;
mod logging;
mod presenters;

pub use crate::adapters::pixel_format::copy_packed_to_rgba;
pub use crate::adapters::selection_overlay::draw_selection_outline;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::session::{SessionController, SessionError, SessionSettings};
pub use crate::core::actions::build_frame::{BuildFrameError, build_frame};
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_frame_buffer::generate_frame_buffer::{
    GenerateFrameBufferError, generate_frame_buffer,
};
pub use crate::core::actions::resolve_viewport::resolve_viewport;
pub use crate::core::colour_mapping::colour_map::ColourMap;
pub use crate::core::colour_mapping::errors::ColourMapError;
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::ColourMapKind;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::grid_size::{GridSize, GridSizeError};
pub use crate::core::data::pixel_selection::{PixelSelection, SelectionShape};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::escape::{EscapeTime, REFERENCE_MAX_ITERATIONS, evaluate};
pub use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::fractal_kind::FractalKind;
pub use crate::core::util::pixel_to_plane::{PixelToPlaneError, pixel_to_plane};
pub use crate::input::cli::args::{GuiArgs, RenderArgs, SessionArgs};
pub use crate::input::cli::render_command::RenderCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
pub use crate::input::prompt::{PromptError, settings_from_prompt};
pub use crate::logging::init_tracing;
pub use crate::presenters::file::ppm::PpmFilePresenter;
