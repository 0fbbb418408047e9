use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_selection::{PixelSelection, SelectionShape};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kind::FractalKind;
use crate::core::util::pixel_to_plane::plane_coordinate;

/// Works out the viewport that follows `selection`.
///
/// With no current viewport the selection is ignored and the fractal's
/// default view is returned. A rectangle zooms into the region it covers,
/// with its top pixel edge becoming `y_max`. A click (or a selection that is
/// flat on either axis) re-centres on the press point and keeps the span.
///
/// A zoom so deep that the new bounds collapse under `f64` resolution leaves
/// the viewport unchanged.
#[must_use]
pub fn resolve_viewport(
    kind: FractalKind,
    current: Option<Viewport>,
    selection: PixelSelection,
    grid: GridSize,
) -> Viewport {
    let Some(current) = current else {
        return kind.default_viewport();
    };

    match selection.shape() {
        SelectionShape::Rectangle { min, max } => {
            let top_left = plane_coordinate(min.x as f64, min.y as f64, grid, current);
            let bottom_right = plane_coordinate(max.x as f64, max.y as f64, grid, current);

            Viewport::new(
                top_left.real,
                bottom_right.real,
                bottom_right.imag,
                top_left.imag,
            )
            .unwrap_or_else(|err| {
                tracing::warn!("zoom ignored, {}", err);
                current
            })
        }
        SelectionShape::Click(point) => {
            let centre = plane_coordinate(point.x as f64, point.y as f64, grid, current);
            let half_width = current.width() / 2.0;
            let half_height = current.height() / 2.0;

            Viewport::new(
                centre.real - half_width,
                centre.real + half_width,
                centre.imag - half_height,
                centre.imag + half_height,
            )
            .unwrap_or_else(|err| {
                tracing::warn!("pan ignored, {}", err);
                current
            })
        }
    }
}
