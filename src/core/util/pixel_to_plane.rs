use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneError {
    PointOutsideGrid { point: Point, grid: GridSize },
}

impl fmt::Display for PixelToPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, grid } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} grid",
                    point.x,
                    point.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelToPlaneError {}

/// Maps a (possibly fractional or edge) pixel position onto the plane.
///
/// X runs left to right from `x_min`; Y runs top to bottom from `y_max`.
/// Each axis is scaled by `span / grid_size`, so position `width` lands
/// exactly on `x_max`.
#[must_use]
pub fn plane_coordinate(x: f64, y: f64, grid: GridSize, viewport: Viewport) -> Complex {
    let x_scale = viewport.width() / grid.width() as f64;
    let y_scale = viewport.height() / grid.height() as f64;

    Complex {
        real: viewport.x_min() + x * x_scale,
        imag: viewport.y_max() - y * y_scale,
    }
}

pub fn pixel_to_plane(
    pixel: Point,
    grid: GridSize,
    viewport: Viewport,
) -> Result<Complex, PixelToPlaneError> {
    if !grid.contains_point(pixel) {
        return Err(PixelToPlaneError::PointOutsideGrid { point: pixel, grid });
    }

    Ok(plane_coordinate(
        pixel.x as f64,
        pixel.y as f64,
        grid,
        viewport,
    ))
}
