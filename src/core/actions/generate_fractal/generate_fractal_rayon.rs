use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Pixels are independent, so the only coordination is the final collect.
/// Output is row-major and identical to [`generate_fractal`].
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let pixels: Vec<Point> = algorithm.grid().points().collect();

    pixels
        .into_par_iter()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::grid_size::GridSize;
    use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
    use crate::core::fractals::fractal_kind::FractalKind;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        grid: GridSize,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.y * 1000 + pixel.x) as u64)
        }

        fn grid(&self) -> GridSize {
            self.grid
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {
        grid: GridSize,
    }

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel == (Point { x: 2, y: 3 }) {
                return Err(StubError {});
            }

            Ok(0)
        }

        fn grid(&self) -> GridSize {
            self.grid
        }
    }

    #[test]
    fn test_serial_output_is_row_major() {
        let algorithm = StubSuccessAlgorithm {
            grid: GridSize::new(3, 2).unwrap(),
        };

        let results = generate_fractal(&algorithm).unwrap();

        assert_eq!(results, vec![0, 1, 2, 1000, 1001, 1002]);
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {
            grid: GridSize::new(11, 9).unwrap(),
        };

        let sequential_results = generate_fractal(&algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {
            grid: GridSize::new(4, 5).unwrap(),
        };

        assert_eq!(generate_fractal_rayon(&algorithm), Err(StubError {}));
        assert_eq!(generate_fractal(&algorithm), Err(StubError {}));
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubSuccessAlgorithm {
            grid: GridSize::new(1, 1).unwrap(),
        };

        assert_eq!(generate_fractal_rayon(&algorithm).unwrap(), vec![0]);
    }

    #[test]
    fn test_rayon_matches_sequential_for_every_fractal_kind() {
        let grid = GridSize::new(40, 30).unwrap();

        for &kind in FractalKind::ALL {
            let algorithm = EscapeTimeAlgorithm::new(kind, kind.default_viewport(), grid, 155);

            let sequential_results = generate_fractal(&algorithm).unwrap();
            let rayon_results = generate_fractal_rayon(&algorithm).unwrap();

            assert_eq!(rayon_results, sequential_results, "{}", kind);
        }
    }
}
