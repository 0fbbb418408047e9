use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape::EscapeTime;

/// Turns an escape result into a pixel colour.
///
/// The iteration count is the only input signal. Bounded points are always
/// black, and escaped points never are.
pub trait ColourMap: Send + Sync {
    fn map(&self, escape: EscapeTime) -> Result<Colour, ColourMapError>;

    fn kind(&self) -> ColourMapKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

/// The evaluator reports at most `max_iterations + 1` steps.
pub(crate) fn check_iterations(
    escape: EscapeTime,
    max_iterations: u32,
) -> Result<u32, ColourMapError> {
    let iterations = escape.iterations();

    if iterations > max_iterations.saturating_add(1) {
        return Err(ColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(iterations)
}

/// Position of an escape count within the cap, strictly between 0 and 1.
pub(crate) fn escape_fraction(iterations: u32, max_iterations: u32) -> f64 {
    iterations.max(1) as f64 / (max_iterations as f64 + 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_iterations_allows_one_past_the_cap() {
        assert_eq!(check_iterations(EscapeTime::Bounded(156), 155), Ok(156));
        assert_eq!(
            check_iterations(EscapeTime::Escaped(157), 155),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 157,
                max_iterations: 155
            })
        );
    }

    #[test]
    fn escape_fraction_stays_inside_the_unit_interval() {
        for iterations in [0, 1, 78, 156] {
            let t = escape_fraction(iterations, 155);

            assert!(t > 0.0 && t < 1.0, "{}", t);
        }
    }
}
