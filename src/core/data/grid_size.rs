use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const REFERENCE_GRID_WIDTH: u32 = 250;
pub const REFERENCE_GRID_HEIGHT: u32 = 250;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    Empty { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "grid size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(
                    f,
                    "grid size {}x{} exceeds {} pixels on an axis",
                    width,
                    height,
                    i32::MAX
                )
            }
        }
    }
}

impl Error for GridSizeError {}

/// Dimensions of the output pixel grid, `[0, width) × [0, height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: REFERENCE_GRID_WIDTH,
            height: REFERENCE_GRID_HEIGHT,
        }
    }
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::Empty { width, height });
        }

        // pixel coordinates are i32
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GridSizeError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Row-major index of `point`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }

    /// Every pixel of the grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;

        (0..height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
