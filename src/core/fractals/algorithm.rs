use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape::{EscapeTime, evaluate};
use crate::core::fractals::fractal_kind::FractalKind;
use crate::core::util::pixel_to_plane::{PixelToPlaneError, pixel_to_plane};

/// Evaluates one fractal kind over a fixed viewport and grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    kind: FractalKind,
    viewport: Viewport,
    grid: GridSize,
    max_iterations: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeTime;
    type Failure = PixelToPlaneError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_plane(pixel, self.grid, self.viewport)?;

        Ok(evaluate(
            self.kind,
            point,
            self.max_iterations,
            self.kind.escape_radius(),
        ))
    }

    fn grid(&self) -> GridSize {
        self.grid
    }
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        kind: FractalKind,
        viewport: Viewport,
        grid: GridSize,
        max_iterations: u32,
    ) -> Self {
        Self {
            kind,
            viewport,
            grid,
            max_iterations,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
