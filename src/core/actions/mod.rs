pub mod build_frame;
pub mod generate_fractal;
pub mod generate_frame_buffer;
pub mod resolve_viewport;
