use crate::core::colour_mapping::colour_map::{ColourMap, check_iterations};
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape::EscapeTime;

/// Grey level equal to the escape count, clamped to `1..=255`.
#[derive(Debug)]
pub struct Grayscale {
    max_iterations: u32,
}

impl ColourMap for Grayscale {
    fn map(&self, escape: EscapeTime) -> Result<Colour, ColourMapError> {
        let iterations = check_iterations(escape, self.max_iterations)?;

        if escape.is_bounded() {
            return Ok(Colour::BLACK);
        }

        let level = iterations.clamp(1, u32::from(u8::MAX)) as u8;

        Ok(Colour::grey(level))
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Grayscale
    }
}

impl Grayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
