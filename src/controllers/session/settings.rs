use crate::controllers::session::errors::SessionError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::grid_size::GridSize;
use crate::core::fractals::escape::REFERENCE_MAX_ITERATIONS;
use crate::core::fractals::fractal_kind::FractalKind;

/// Everything fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub kind: FractalKind,
    pub grid: GridSize,
    pub max_iterations: u32,
    pub colour_map_kind: ColourMapKind,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            kind: FractalKind::default(),
            grid: GridSize::default(),
            max_iterations: REFERENCE_MAX_ITERATIONS,
            colour_map_kind: ColourMapKind::default(),
        }
    }
}

impl SessionSettings {
    pub fn new(
        kind: FractalKind,
        width: u32,
        height: u32,
        max_iterations: u32,
        colour_map_kind: ColourMapKind,
    ) -> Result<Self, SessionError> {
        let settings = Self {
            kind,
            grid: GridSize::new(width, height)?,
            max_iterations,
            colour_map_kind,
        };

        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.max_iterations == 0 {
            return Err(SessionError::ZeroMaxIterations);
        }

        Ok(())
    }
}
