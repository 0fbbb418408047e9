//! Draws the drag rectangle on top of an RGBA surface.
//!
//! The overlay is cosmetic: it touches only the surface bytes, never the
//! frame buffer or the session.

use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_selection::PixelSelection;
use crate::core::data::point::Point;

const OUTLINE_RGBA: [u8; 4] = [255, 255, 255, 255];

/// Outlines the rectangle spanned by `selection` one pixel wide.
///
/// Corners may lie in any order or outside the grid; the outline is
/// clipped to `grid`. `rgba` holds 4 bytes per grid pixel.
pub fn draw_selection_outline(rgba: &mut [u8], grid: GridSize, selection: PixelSelection) {
    let PixelSelection { start, end } = selection;
    let (left, right) = (start.x.min(end.x), start.x.max(end.x));
    let (top, bottom) = (start.y.min(end.y), start.y.max(end.y));

    for x in left..=right {
        put_pixel(rgba, grid, Point::new(x, top));
        put_pixel(rgba, grid, Point::new(x, bottom));
    }

    for y in top..=bottom {
        put_pixel(rgba, grid, Point::new(left, y));
        put_pixel(rgba, grid, Point::new(right, y));
    }
}

fn put_pixel(rgba: &mut [u8], grid: GridSize, point: Point) {
    let Some(index) = grid.index_of(point) else {
        return;
    };

    if let Some(pixel) = rgba.get_mut(index * 4..index * 4 + 4) {
        pixel.copy_from_slice(&OUTLINE_RGBA);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(rgba: &[u8], grid: GridSize, x: i32, y: i32) -> bool {
        let index = grid.index_of(Point::new(x, y)).unwrap();

        rgba[index * 4..index * 4 + 4] == OUTLINE_RGBA
    }

    #[test]
    fn outlines_only_the_border() {
        let grid = GridSize::new(6, 6).unwrap();
        let mut rgba = vec![0; grid.pixel_count() * 4];

        draw_selection_outline(
            &mut rgba,
            grid,
            PixelSelection::new(Point::new(4, 4), Point::new(1, 1)),
        );

        assert!(lit(&rgba, grid, 1, 1));
        assert!(lit(&rgba, grid, 4, 1));
        assert!(lit(&rgba, grid, 1, 4));
        assert!(lit(&rgba, grid, 4, 4));
        assert!(lit(&rgba, grid, 2, 1));
        assert!(!lit(&rgba, grid, 2, 2));
        assert!(!lit(&rgba, grid, 0, 0));
        assert!(!lit(&rgba, grid, 5, 5));
    }

    #[test]
    fn clips_to_the_grid() {
        let grid = GridSize::new(4, 4).unwrap();
        let mut rgba = vec![0; grid.pixel_count() * 4];

        draw_selection_outline(
            &mut rgba,
            grid,
            PixelSelection::new(Point::new(-3, 2), Point::new(9, 9)),
        );

        assert!(lit(&rgba, grid, 0, 2));
        assert!(lit(&rgba, grid, 3, 2));
        assert!(!lit(&rgba, grid, 0, 3));
        assert!(!lit(&rgba, grid, 1, 1));
    }

    #[test]
    fn click_marks_a_single_pixel() {
        let grid = GridSize::new(3, 3).unwrap();
        let mut rgba = vec![0; grid.pixel_count() * 4];

        draw_selection_outline(&mut rgba, grid, PixelSelection::click(Point::new(1, 1)));

        let lit_count = rgba.chunks_exact(4).filter(|p| *p == OUTLINE_RGBA).count();
        assert_eq!(lit_count, 1);
    }
}
