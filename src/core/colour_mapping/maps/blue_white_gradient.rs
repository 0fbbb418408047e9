use crate::core::colour_mapping::colour_map::{ColourMap, check_iterations, escape_fraction};
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape::EscapeTime;

#[derive(Debug)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap for BlueWhiteGradient {
    fn map(&self, escape: EscapeTime) -> Result<Colour, ColourMapError> {
        let iterations = check_iterations(escape, self.max_iterations)?;

        if escape.is_bounded() {
            return Ok(Colour::BLACK);
        }

        let t = escape_fraction(iterations, self.max_iterations);
        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Ok(Colour { r, g, b }.non_black())
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
