//! Minimum distance between two rectangles on a square grid.

use pfgrid_core::{Displacement, GridDimensions, Rect};

use crate::metric::measure_on_grid;

/// Snap `rect` to whole cells, rounding its leading edges toward `toward`.
///
/// The left edge rounds up when `toward` lies further right and down
/// otherwise; the top edge likewise. Width and height always round up to a
/// whole number of cells.
pub fn snap_toward(rect: Rect, toward: Rect, cell_size: f64) -> Rect {
    let round_left: fn(f64) -> f64 = if rect.left() < toward.left() {
        f64::ceil
    } else {
        f64::floor
    };
    let round_top: fn(f64) -> f64 = if rect.top() < toward.top() {
        f64::ceil
    } else {
        f64::floor
    };
    let left = round_left(rect.left() / cell_size) * cell_size;
    let top = round_top(rect.top() / cell_size) * cell_size;
    let width = (rect.width() / cell_size).ceil() * cell_size;
    let height = (rect.height() / cell_size).ceil() * cell_size;
    Rect::new(left, top, width, height)
}

/// Displacement between two grid-snapped rectangles, padded by one cell on
/// each axis so that adjacent rectangles are one cell apart.
pub fn snapped_gap(r0: Rect, r1: Rect, cell_size: f64) -> Displacement {
    let s0 = snap_toward(r0, r1, cell_size);
    let s1 = snap_toward(r1, r0, cell_size);
    let dx = (s0.left() - s1.right()).max(s1.left() - s0.right()).max(0.0) + cell_size;
    let dy = (s0.top() - s1.bottom()).max(s1.top() - s0.bottom()).max(0.0) + cell_size;
    Displacement::new(dx, dy)
}

/// Pathfinder distance between the nearest cells of two rectangles.
///
/// Overlapping rectangles are 0 apart. Otherwise the rectangles are snapped
/// to the grid and their gap measured with [`measure_on_grid`]; NaN when
/// `dims` is `None`.
pub fn measure_rectangles_on_grid(
    r0: Rect,
    r1: Rect,
    dims: Option<GridDimensions>,
    reach: Option<f64>,
) -> f64 {
    if r0.overlaps(r1) {
        return 0.0;
    }
    let Some(d) = dims else {
        return f64::NAN;
    };
    measure_on_grid(snapped_gap(r0, r1, d.size), dims, reach)
}
