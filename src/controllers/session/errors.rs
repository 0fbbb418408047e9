use crate::core::actions::build_frame::BuildFrameError;
use crate::core::data::grid_size::GridSizeError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    ZeroMaxIterations,
    Grid(GridSizeError),
    Render(BuildFrameError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "max iterations must be at least 1"),
            Self::Grid(err) => write!(f, "invalid grid: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroMaxIterations => None,
            Self::Grid(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<GridSizeError> for SessionError {
    fn from(err: GridSizeError) -> Self {
        Self::Grid(err)
    }
}

impl From<BuildFrameError> for SessionError {
    fn from(err: BuildFrameError) -> Self {
        Self::Render(err)
    }
}
