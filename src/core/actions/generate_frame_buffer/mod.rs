pub mod generate_frame_buffer;
