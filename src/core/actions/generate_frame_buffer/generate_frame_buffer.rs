use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferData, FrameBufferError};
use crate::core::data::grid_size::GridSize;
use crate::core::fractals::escape::EscapeTime;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateFrameBufferError {
    ColourMap(ColourMapError),
    FrameBuffer(FrameBufferError),
}

impl fmt::Display for GenerateFrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
        }
    }
}

impl Error for GenerateFrameBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::FrameBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GenerateFrameBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<FrameBufferError> for GenerateFrameBufferError {
    fn from(err: FrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

/// Colours row-major escape results into a frame buffer for `grid`.
pub fn generate_frame_buffer<CMap: ColourMap + ?Sized>(
    input: Vec<EscapeTime>,
    mapper: &CMap,
    grid: GridSize,
) -> Result<FrameBuffer, GenerateFrameBufferError> {
    let mut buffer: FrameBufferData = Vec::with_capacity(input.len());

    for escape in input {
        buffer.push(mapper.map(escape)?.packed());
    }

    Ok(FrameBuffer::from_data(grid, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::data::colour::Colour;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap for StubColourMapSuccess {
        fn map(&self, escape: EscapeTime) -> Result<Colour, ColourMapError> {
            Ok(Colour::grey(escape.iterations() as u8))
        }

        fn kind(&self) -> ColourMapKind {
            ColourMapKind::Grayscale
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap for StubColourMapFailure {
        fn map(&self, escape: EscapeTime) -> Result<Colour, ColourMapError> {
            Err(ColourMapError::IterationsExceedMax {
                iterations: escape.iterations(),
                max_iterations: 0,
            })
        }

        fn kind(&self) -> ColourMapKind {
            ColourMapKind::Grayscale
        }
    }

    fn escapes(counts: &[u32]) -> Vec<EscapeTime> {
        counts.iter().map(|&n| EscapeTime::Escaped(n)).collect()
    }

    #[test]
    fn test_generates_frame_buffer_correctly() {
        let grid = GridSize::new(3, 2).unwrap();
        let mapper = StubColourMapSuccess {};

        let results = generate_frame_buffer(escapes(&[1, 2, 3, 4, 5, 6]), &mapper, grid).unwrap();

        let expected: Vec<u32> = (1..=6).map(|n| Colour::grey(n).packed()).collect();
        assert_eq!(results.pixels(), expected.as_slice());
        assert_eq!(results.grid(), grid);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let grid = GridSize::new(3, 2).unwrap();
        let mapper = StubColourMapFailure {};

        let results = generate_frame_buffer(escapes(&[1, 2, 3, 4, 5, 6]), &mapper, grid);

        assert!(matches!(
            results,
            Err(GenerateFrameBufferError::ColourMap(_))
        ));
    }

    #[test]
    fn test_grid_input_size_mismatch_returns_err() {
        let grid = GridSize::new(2, 2).unwrap();
        let mapper = StubColourMapSuccess {};

        let results = generate_frame_buffer(escapes(&[1, 2, 3, 4, 5, 6]), &mapper, grid);

        assert_eq!(
            results,
            Err(GenerateFrameBufferError::FrameBuffer(
                FrameBufferError::BoundsMismatch {
                    grid_size: 4,
                    buffer_size: 6
                }
            ))
        );
    }
}
