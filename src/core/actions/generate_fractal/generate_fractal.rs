use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Computes every pixel of the algorithm's grid in row-major order on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    algorithm
        .grid()
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
