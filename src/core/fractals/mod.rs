pub mod algorithm;
pub mod escape;
pub mod fractal_kind;
