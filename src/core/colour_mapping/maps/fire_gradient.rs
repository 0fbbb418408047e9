use crate::core::colour_mapping::colour_map::{ColourMap, check_iterations, escape_fraction};
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape::EscapeTime;

/// Black through red, orange and yellow to white as the escape count grows.
#[derive(Debug)]
pub struct FireGradient {
    max_iterations: u32,
}

impl ColourMap for FireGradient {
    fn map(&self, escape: EscapeTime) -> Result<Colour, ColourMapError> {
        let iterations = check_iterations(escape, self.max_iterations)?;

        if escape.is_bounded() {
            return Ok(Colour::BLACK);
        }

        let t = escape_fraction(iterations, self.max_iterations);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b }.non_black())
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A cap of 98 puts the count denominator at 100.
    const CAP: u32 = 98;

    #[test]
    fn test_map_returns_black_for_bounded_points() {
        let mapper = FireGradient::new(CAP);

        assert_eq!(mapper.map(EscapeTime::Bounded(CAP + 1)).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_quarter_is_red() {
        let mapper = FireGradient::new(CAP);
        let colour = mapper.map(EscapeTime::Escaped(25)).unwrap();

        assert_eq!(colour, Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_map_half_is_orange() {
        let mapper = FireGradient::new(CAP);
        let colour = mapper.map(EscapeTime::Escaped(50)).unwrap();

        assert_eq!(colour, Colour { r: 255, g: 165, b: 0 });
    }

    #[test]
    fn test_map_three_quarters_is_yellow() {
        let mapper = FireGradient::new(CAP);
        let colour = mapper.map(EscapeTime::Escaped(75)).unwrap();

        assert_eq!(colour, Colour { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn test_map_near_max_is_near_white() {
        let mapper = FireGradient::new(CAP);
        let colour = mapper.map(EscapeTime::Escaped(CAP + 1)).unwrap();

        assert_eq!(colour.r, 255);
        assert_eq!(colour.g, 255);
        assert!(colour.b > 240); // Nearly white
    }

    #[test]
    fn test_escaped_points_are_never_black() {
        let mapper = FireGradient::new(CAP);

        for iterations in 0..=CAP + 1 {
            let colour = mapper.map(EscapeTime::Escaped(iterations)).unwrap();

            assert_ne!(colour, Colour::BLACK, "{}", iterations);
        }
    }
}
