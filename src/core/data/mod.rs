pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod grid_size;
pub mod pixel_selection;
pub mod point;
pub mod viewport;
