use std::path::Path;

use crate::core::data::frame_buffer::FrameBuffer;

pub trait FilePresenterPort {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
