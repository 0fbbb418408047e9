use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        write_ppm(&mut file, frame)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// Binary P6 image: header, then 3 bytes per pixel in row-major order.
pub fn write_ppm(writer: &mut impl Write, frame: &FrameBuffer) -> std::io::Result<()> {
    let grid = frame.grid();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&frame.to_rgb_bytes())
}
