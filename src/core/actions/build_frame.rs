use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_frame_buffer::generate_frame_buffer::{
    GenerateFrameBufferError, generate_frame_buffer,
};
use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::fractal_kind::FractalKind;
use crate::core::util::pixel_to_plane::PixelToPlaneError;
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum BuildFrameError {
    Fractal(PixelToPlaneError),
    FrameBuffer(GenerateFrameBufferError),
}

impl fmt::Display for BuildFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fractal(err) => write!(f, "fractal error: {}", err),
            Self::FrameBuffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for BuildFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fractal(err) => Some(err),
            Self::FrameBuffer(err) => Some(err),
        }
    }
}

impl From<PixelToPlaneError> for BuildFrameError {
    fn from(err: PixelToPlaneError) -> Self {
        Self::Fractal(err)
    }
}

impl From<GenerateFrameBufferError> for BuildFrameError {
    fn from(err: GenerateFrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

/// Evaluates every pixel of `grid` over `viewport` and colours the result.
///
/// The output depends only on the arguments: the same inputs always give
/// the same frame.
pub fn build_frame<C: ColourMap + ?Sized>(
    kind: FractalKind,
    viewport: Viewport,
    grid: GridSize,
    max_iterations: u32,
    colour_map: &C,
) -> Result<FrameBuffer, BuildFrameError> {
    let span = tracing::info_span!("build-frame", fractal = %kind);
    let _guard = span.enter();

    let algorithm = EscapeTimeAlgorithm::new(kind, viewport, grid, max_iterations);
    let start = Instant::now();
    let escapes = generate_fractal_rayon(&algorithm)?;

    tracing::debug!(
        "computed {}x{} over {} in {:?}",
        grid.width(),
        grid.height(),
        viewport,
        start.elapsed()
    );

    let frame = generate_frame_buffer(escapes, colour_map, grid)?;

    tracing::debug!("coloured with {}", colour_map.display_name());

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::factory::colour_map_factory;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::fractals::escape::REFERENCE_MAX_ITERATIONS;

    fn reference_frame(kind: FractalKind) -> FrameBuffer {
        let colour_map = colour_map_factory(ColourMapKind::Grayscale, REFERENCE_MAX_ITERATIONS);

        build_frame(
            kind,
            kind.default_viewport(),
            GridSize::default(),
            REFERENCE_MAX_ITERATIONS,
            colour_map.as_ref(),
        )
        .unwrap()
    }

    #[test]
    fn frame_covers_the_whole_grid() {
        let frame = reference_frame(FractalKind::Mandelbrot);

        assert_eq!(frame.grid(), GridSize::default());
        assert_eq!(frame.pixels().len(), 250 * 250);
    }

    #[test]
    fn mandelbrot_corner_escapes_and_center_is_interior() {
        let frame = reference_frame(FractalKind::Mandelbrot);

        // (0, 0) maps to -2.5 + 1.5i, already outside radius 2.
        assert_eq!(frame.colour_at(Point::new(0, 0)), Some(Colour::grey(1)));
        // (125, 125) maps to -0.5, inside the main cardioid.
        assert_eq!(frame.colour_at(Point::new(125, 125)), Some(Colour::BLACK));
    }

    #[test]
    fn identical_inputs_give_identical_frames() {
        for &kind in FractalKind::ALL {
            assert_eq!(reference_frame(kind), reference_frame(kind), "{}", kind);
        }
    }

    #[test]
    fn every_palette_renders_every_fractal() {
        let grid = GridSize::new(32, 24).unwrap();

        for &kind in FractalKind::ALL {
            for &palette in ColourMapKind::ALL {
                let colour_map = colour_map_factory(palette, 64);
                let frame = build_frame(kind, kind.default_viewport(), grid, 64, colour_map.as_ref());

                assert!(frame.is_ok(), "{} with {}", kind, palette);
            }
        }
    }
}
