//! Cell selection and highlighting for area-of-effect shapes.
//!
//! Candidate cells are taken from a window around the cell containing the
//! shape's anchor. Each cell centre is measured from the shape origin with
//! the host's metric; cones additionally reject cells whose centre lies
//! outside the cone's [`AngularSector`].

use pfgrid_core::{GridDimensions, GridPos, Point};
use pfgrid_measure::{DistanceStrategy, GridHost, strategy_for};

use crate::layer::{HighlightColors, HighlightLayer, HighlightSurface};
use crate::sector::{AngularSector, normalize_degrees};
use crate::shape::ShapeSpec;

/// Half-cell offset applied to a cone's origin, in cells on each axis.
///
/// Cones are measured from a cell border. An origin that is not on a grid
/// line along an axis moves half a cell along that axis toward the
/// direction the cone points; burst and emanation shapes never move.
pub fn cone_origin_offset(shape: &ShapeSpec, cell_size: f64) -> (f64, f64) {
    if !shape.kind.is_cone() {
        return (0.0, 0.0);
    }
    // Counter-clockwise degrees from east, the usual maths convention.
    let ccw = (if shape.direction >= 0.0 {
        360.0 - shape.direction
    } else {
        -shape.direction
    }) % 360.0;
    let rad = ccw.to_radians();
    let x = if shape.origin.x % cell_size != 0.0 {
        sign((rad.cos() * 100.0).round()) * 0.5
    } else {
        0.0
    };
    // Screen Y grows downward.
    let y = if shape.origin.y % cell_size != 0.0 {
        -sign((rad.sin() * 100.0).round()) * 0.5
    } else {
        0.0
    };
    (x, y)
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Largest half-extent of the candidate window, in cells on either axis.
pub const MAX_WINDOW_EXTENT: i32 = 1024;

/// Half-extent of the candidate window, in cells: `(columns, rows)`.
///
/// Diagonals cost at most 1.5 cells, so a window 1.5 times the shape's
/// distance never misses a cell in range. `None` when either side would
/// exceed [`MAX_WINDOW_EXTENT`].
pub fn window_extent(distance: f64, dims: &GridDimensions) -> Option<(i32, i32)> {
    let cells = distance * 1.5 / dims.distance;
    let cols = (cells / (dims.size / dims.cell_width)).ceil();
    let rows = (cells / (dims.size / dims.cell_height)).ceil();
    let limit = f64::from(MAX_WINDOW_EXTENT);
    if !(0.0..=limit).contains(&cols) || !(0.0..=limit).contains(&rows) {
        return None;
    }
    Some((cols as i32, rows as i32))
}

/// Whether every cell `pos ± (cols, rows)` is addressable.
fn window_fits(pos: GridPos, cols: i32, rows: i32) -> bool {
    pos.col.checked_sub(cols).is_some()
        && pos.col.checked_add(cols).is_some()
        && pos.row.checked_sub(rows).is_some()
        && pos.row.checked_add(rows).is_some()
}

/// Cells covered by `shape`, in column-major window order.
///
/// Returns nothing when the host has no dimensions yet or the shape is
/// malformed.
pub fn area_cells<H: GridHost + ?Sized>(host: &H, shape: &ShapeSpec) -> Vec<GridPos> {
    let Some(dims) = host.dimensions() else {
        log::warn!("{} template: grid dimensions unavailable", shape.kind);
        return Vec::new();
    };
    if let Err(err) = shape.validate() {
        log::warn!("skipping template: {err}");
        return Vec::new();
    }
    let metric = strategy_for(host);
    let size = dims.size;

    let center = host.shape_center(shape.origin);
    let pos0 = host.pixel_to_grid(center);
    let sector = AngularSector::around(shape.direction, shape.angle);

    let (ox, oy) = cone_origin_offset(shape, size);
    let origin = shape.origin.shift(ox * size, oy * size);

    let Some((cols, rows)) = window_extent(shape.distance, &dims) else {
        log::warn!(
            "skipping {} {}: area too large for the grid",
            shape.distance,
            shape.kind
        );
        return Vec::new();
    };
    if !window_fits(pos0, cols, rows) {
        log::warn!("skipping {} template at {pos0}: outside the grid", shape.kind);
        return Vec::new();
    }
    let mut cells = Vec::new();
    for a in -cols..cols {
        for b in -rows..rows {
            let pos = pos0.shift(a, b);
            let cell_center = host.grid_to_pixel(pos).shift(size * 0.5, size * 0.5);

            if shape.kind.is_cone() && !in_cone(origin, cell_center, &sector) {
                log::trace!("cone {sector:?}: {pos} outside");
                continue;
            }

            if metric.measure_points(cell_center, origin) <= shape.distance {
                cells.push(pos);
            }
        }
    }
    log::debug!(
        "{} {} from {}: {} of {} candidate cells",
        shape.distance,
        shape.kind,
        shape.origin,
        cells.len(),
        4 * cols as usize * rows as usize
    );
    cells
}

/// A cell centre on the origin itself is always inside.
fn in_cone(origin: Point, cell_center: Point, sector: &AngularSector) -> bool {
    if origin.distance_to(cell_center) == 0.0 {
        return true;
    }
    sector.contains(normalize_degrees(origin.angle_to(cell_center).to_degrees()))
}

/// Repaint the highlight layer of `object_id` with the cells of `shape`.
///
/// The layer is cleared first, so calling this again with the same shape
/// leaves the same cells painted. Objects without an id (previews) and
/// scenes without dimensions are left alone. Returns the number of cells
/// painted.
pub fn highlight<H, S>(
    host: &H,
    surface: &mut S,
    object_id: Option<&str>,
    shape: &ShapeSpec,
    colors: HighlightColors,
) -> usize
where
    H: GridHost + ?Sized,
    S: HighlightSurface + ?Sized,
{
    let Some(id) = object_id else {
        log::debug!("not highlighting preview {} template", shape.kind);
        return 0;
    };
    if host.dimensions().is_none() {
        log::warn!("not highlighting {id}: grid dimensions unavailable");
        return 0;
    }

    let layer = surface.layer(id);
    layer.clear();
    let cells = area_cells(host, shape);
    for &pos in &cells {
        let at = host.grid_to_pixel(pos);
        layer.paint_cell(at.x, at.y, colors);
    }
    log::debug!("highlighted {} cells for {id}", cells.len());
    cells.len()
}
