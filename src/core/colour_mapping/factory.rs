use crate::core::colour_mapping::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::maps::{
    blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient, grayscale::Grayscale,
};

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::Grayscale => Box::new(Grayscale::new(max_iterations)),
        ColourMapKind::FireGradient => Box::new(FireGradient::new(max_iterations)),
        ColourMapKind::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKind::ALL {
            let map = colour_map_factory(kind, 256);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourMapKind::ALL {
            let map = colour_map_factory(kind, 256);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }
}
