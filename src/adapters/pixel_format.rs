//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;

/// Copies packed 24-bit colours to RGBA bytes, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 4`.
pub fn copy_packed_to_rgba(src: &[u32], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&packed, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let Colour { r, g, b } = Colour::from_packed(packed);

        dst_pixel[0] = r;
        dst_pixel[1] = g;
        dst_pixel[2] = b;
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_packed_to_rgba_known_values() {
        let src = vec![
            0x0000ff, // red
            0x00ff00, // green
            0xff0000, // blue
            0xffffff, // white
        ];
        let mut dst = vec![0; src.len() * 4];

        copy_packed_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_packed_to_rgba_empty_buffers() {
        let src: Vec<u32> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_packed_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    fn test_copy_packed_to_rgba_grey() {
        let src = vec![Colour::grey(37).packed()];
        let mut dst = vec![0; 4];

        copy_packed_to_rgba(&src, &mut dst);

        assert_eq!(dst, vec![37, 37, 37, 255]);
    }

    #[test]
    #[should_panic]
    fn test_copy_packed_to_rgba_size_mismatch_panics() {
        let src = vec![0, 0];
        let mut dst = vec![0; 4];

        copy_packed_to_rgba(&src, &mut dst);
    }
}
