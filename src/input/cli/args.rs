use crate::controllers::session::{SessionError, SessionSettings};
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::grid_size::{REFERENCE_GRID_HEIGHT, REFERENCE_GRID_WIDTH};
use crate::core::data::pixel_selection::PixelSelection;
use crate::core::fractals::escape::REFERENCE_MAX_ITERATIONS;
use crate::core::fractals::fractal_kind::FractalKind;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by every front end.
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Fractal to draw: 1|2|3 or mandelbrot|julia|lambda|spiral
    #[arg(long, value_name = "KIND")]
    pub kind: Option<FractalKind>,

    /// Colour scheme: grayscale|fire|blue-white
    #[arg(long, value_name = "PALETTE")]
    pub palette: Option<ColourMapKind>,

    #[arg(long, default_value_t = REFERENCE_GRID_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = REFERENCE_GRID_HEIGHT)]
    pub height: u32,

    #[arg(long, default_value_t = REFERENCE_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

impl SessionArgs {
    /// Settings with defaults filled in for anything left unset.
    pub fn settings(&self) -> Result<SessionSettings, SessionError> {
        self.settings_with(
            self.kind.unwrap_or_default(),
            self.palette.unwrap_or_default(),
        )
    }

    pub fn settings_with(
        &self,
        kind: FractalKind,
        palette: ColourMapKind,
    ) -> Result<SessionSettings, SessionError> {
        SessionSettings::new(kind, self.width, self.height, self.max_iterations, palette)
    }
}

/// Render a fractal and replay zoom/pan gestures without a window.
#[derive(Debug, Parser)]
#[command(name = "fractal_zoom", version)]
pub struct RenderArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Press/release gesture as `x1,y1,x2,y2`, or `x,y` for a click. Repeatable.
    #[arg(long = "select", value_name = "X1,Y1,X2,Y2", allow_hyphen_values = true)]
    pub selections: Vec<PixelSelection>,

    /// Where to write the final frame as a binary PPM.
    #[arg(long, default_value = "output/fractal.ppm")]
    pub output: PathBuf,
}

/// Explore a fractal interactively.
#[derive(Debug, Parser)]
#[command(name = "gui", version)]
pub struct GuiArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}
