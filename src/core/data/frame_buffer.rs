use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    PixelOutsideBounds { pixel: Point, grid: GridSize },
    BoundsMismatch { grid_size: usize, buffer_size: usize },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, grid } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} grid",
                    pixel.x,
                    pixel.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

pub type FrameBufferData = Vec<u32>;

/// One packed 24-bit colour per grid pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    grid: GridSize,
    pixels: FrameBufferData,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            pixels: vec![0; grid.pixel_count()],
        }
    }

    pub fn from_data(grid: GridSize, pixels: FrameBufferData) -> Result<Self, FrameBufferError> {
        if grid.pixel_count() != pixels.len() {
            return Err(FrameBufferError::BoundsMismatch {
                grid_size: grid.pixel_count(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { grid, pixels })
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    pub fn colour_at(&self, pixel: Point) -> Option<Colour> {
        self.grid
            .index_of(pixel)
            .map(|index| Colour::from_packed(self.pixels[index]))
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), FrameBufferError> {
        let index = self
            .grid
            .index_of(pixel)
            .ok_or(FrameBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            })?;

        self.pixels[index] = colour.packed();
        Ok(())
    }

    /// Unpacks into 3 bytes per pixel, in the order PPM and most surfaces expect.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&packed| {
                let Colour { r, g, b } = Colour::from_packed(packed);
                [r, g, b]
            })
            .collect()
    }
}
