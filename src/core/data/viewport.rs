use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite with min < max: x:[{}, {}] y:[{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane mapped onto the pixel grid.
///
/// Bounds are always finite and strictly ordered on both axes. The aspect
/// ratio is free and need not match the grid's.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(ViewportError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// The plane coordinate drawn at the top-left corner of the grid.
    #[must_use]
    pub fn top_left(&self) -> Complex {
        Complex::new(self.x_min, self.y_max)
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && point.real <= self.x_max
            && self.y_min <= point.imag
            && point.imag <= self.y_max
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x:[{}, {}] y:[{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.5, 1.5, -1.5, 1.5).unwrap();

        assert_eq!(viewport.x_min(), -2.5);
        assert_eq!(viewport.x_max(), 1.5);
        assert_eq!(viewport.y_min(), -1.5);
        assert_eq!(viewport.y_max(), 1.5);
        assert_eq!(viewport.width(), 4.0);
        assert_eq!(viewport.height(), 3.0);
        assert_eq!(viewport.top_left(), Complex::new(-2.5, 1.5));
    }

    #[test]
    fn test_viewport_bounds_must_be_ordered() {
        let zero_width = Viewport::new(1.0, 1.0, -1.0, 1.0);
        let inverted_height = Viewport::new(-1.0, 1.0, 1.0, -1.0);

        assert_eq!(
            zero_width,
            Err(ViewportError::InvalidBounds {
                x_min: 1.0,
                x_max: 1.0,
                y_min: -1.0,
                y_max: 1.0
            })
        );
        assert_eq!(
            inverted_height,
            Err(ViewportError::InvalidBounds {
                x_min: -1.0,
                x_max: 1.0,
                y_min: 1.0,
                y_max: -1.0
            })
        );
    }

    #[test]
    fn test_viewport_bounds_must_be_finite() {
        assert!(Viewport::new(f64::NEG_INFINITY, 1.0, -1.0, 1.0).is_err());
        assert!(Viewport::new(-1.0, 1.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_viewport_contains_point() {
        let viewport = Viewport::new(-10.0, 100.0, -5.0, 200.0).unwrap();

        assert!(viewport.contains_point(Complex::new(50.0, 50.0)));
        assert!(viewport.contains_point(Complex::new(-10.0, 200.0)));
        assert!(!viewport.contains_point(Complex::new(101.0, 50.0)));
        assert!(!viewport.contains_point(Complex::new(50.0, -6.0)));
    }
}
