use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const JULIA_CONSTANT: Complex = Complex::new(0.3, 0.6);
pub const LAMBDA_CONSTANT: Complex = Complex::new(0.85, 0.6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    Lambda,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::Lambda];

    /// Menu selector: 1 is Mandelbrot, 2 is Julia, anything else is Lambda.
    #[must_use]
    pub const fn from_selector(selector: i64) -> Self {
        match selector {
            1 => Self::Mandelbrot,
            2 => Self::Julia,
            _ => Self::Lambda,
        }
    }

    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::Mandelbrot => 1,
            Self::Julia => 2,
            Self::Lambda => 3,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Lambda => "Lambda",
        }
    }

    /// Lambda is shown to the user as "Spiral".
    #[must_use]
    pub const fn window_title(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Lambda => "Spiral",
        }
    }

    #[must_use]
    pub const fn escape_radius(self) -> f64 {
        match self {
            Self::Mandelbrot | Self::Julia => 2.0,
            Self::Lambda => 4.0,
        }
    }

    /// The fixed recurrence constant. Mandelbrot uses each pixel's own point instead.
    #[must_use]
    pub const fn constant(self) -> Option<Complex> {
        match self {
            Self::Mandelbrot => None,
            Self::Julia => Some(JULIA_CONSTANT),
            Self::Lambda => Some(LAMBDA_CONSTANT),
        }
    }

    /// The first view shown for this fractal.
    #[must_use]
    pub fn default_viewport(self) -> Viewport {
        let (x_min, x_max, y_min, y_max) = match self {
            Self::Mandelbrot => (-2.5, 1.5, -1.5, 1.5),
            Self::Julia => (-0.241001, 0.222222, 0.413542, 0.760960),
            Self::Lambda => (-1.5, 2.5, -1.5, 1.5),
        };

        Viewport::new(x_min, x_max, y_min, y_max).expect("default fractal viewport is valid")
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFractalKindError {
    value: String,
}

impl fmt::Display for ParseFractalKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown fractal `{}`, expected 1|2|3 or mandelbrot|julia|lambda|spiral",
            self.value
        )
    }
}

impl Error for ParseFractalKindError {}

impl FromStr for FractalKind {
    type Err = ParseFractalKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if let Ok(selector) = value.parse::<i64>() {
            return Ok(Self::from_selector(selector));
        }

        match value.to_ascii_lowercase().as_str() {
            "mandelbrot" => Ok(Self::Mandelbrot),
            "julia" => Ok(Self::Julia),
            "lambda" | "spiral" => Ok(Self::Lambda),
            _ => Err(ParseFractalKindError {
                value: value.to_string(),
            }),
        }
    }
}
