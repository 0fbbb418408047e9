pub mod pixel_format;
pub mod selection_overlay;
