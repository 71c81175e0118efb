use pfgrid_core::{GridConfig, GridDimensions, GridKind, GridPos, Point, Rect};

use crate::host::GridHost;

/// A self-contained [`GridHost`] for scenes laid out on square cells.
///
/// Cell `(col, row)` covers pixels `[col*size, (col+1)*size)` on X and the
/// same on Y. When configured with a non-square kind (typically
/// [`GridKind::Gridless`]) the fallback distances are Euclidean, converted
/// to distance units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareGrid {
    config: GridConfig,
    ready: bool,
}

impl SquareGrid {
    /// A ready grid with the given configuration.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            ready: true,
        }
    }

    /// A grid whose scene has not been drawn yet: it reports no dimensions,
    /// so every measurement comes back NaN.
    pub fn uninitialized(config: GridConfig) -> Self {
        Self {
            config,
            ready: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Mark the scene as drawn (or torn down).
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    #[inline]
    fn size(&self) -> f64 {
        self.config.size
    }

    fn pixels_to_units(&self, pixels: f64) -> f64 {
        match self.dimensions() {
            Some(d) => pixels / d.size * d.distance,
            None => f64::NAN,
        }
    }
}

impl Default for SquareGrid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridHost for SquareGrid {
    fn kind(&self) -> GridKind {
        self.config.kind
    }

    fn dimensions(&self) -> Option<GridDimensions> {
        if !self.ready {
            return None;
        }
        self.config.dimensions().ok()
    }

    fn grid_to_pixel(&self, pos: GridPos) -> Point {
        Point::new(pos.col as f64 * self.size(), pos.row as f64 * self.size())
    }

    fn pixel_to_grid(&self, p: Point) -> GridPos {
        GridPos::new(
            (p.x / self.size()).floor() as i32,
            (p.y / self.size()).floor() as i32,
        )
    }

    fn shape_center(&self, p: Point) -> Point {
        let half = self.size() * 0.5;
        self.grid_to_pixel(self.pixel_to_grid(p)).shift(half, half)
    }

    fn fallback_point_distance(&self, p0: Point, p1: Point) -> f64 {
        self.pixels_to_units(p0.distance_to(p1))
    }

    fn fallback_rect_distance(&self, r0: Rect, r1: Rect) -> f64 {
        let gap_x = (r0.left() - r1.right()).max(r1.left() - r0.right()).max(0.0);
        let gap_y = (r0.top() - r1.bottom()).max(r1.top() - r0.bottom()).max(0.0);
        self.pixels_to_units(gap_x.hypot(gap_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_grid_conversions() {
        let g = SquareGrid::default();
        assert_eq!(g.grid_to_pixel(GridPos::new(2, -1)), Point::new(200.0, -100.0));
        assert_eq!(g.pixel_to_grid(Point::new(250.0, -1.0)), GridPos::new(2, -1));
        assert_eq!(g.pixel_to_grid(Point::new(200.0, 0.0)), GridPos::new(2, 0));
    }

    #[test]
    fn shape_center_is_containing_cell_center() {
        let g = SquareGrid::default();
        assert_eq!(g.shape_center(Point::new(0.0, 0.0)), Point::new(50.0, 50.0));
        assert_eq!(g.shape_center(Point::new(199.0, 101.0)), Point::new(150.0, 150.0));
        assert_eq!(g.shape_center(Point::new(-10.0, 10.0)), Point::new(-50.0, 50.0));
    }

    #[test]
    fn uninitialized_grid_has_no_dimensions() {
        let mut g = SquareGrid::uninitialized(GridConfig::default());
        assert_eq!(g.dimensions(), None);
        assert!(g.fallback_point_distance(Point::ZERO, Point::new(100.0, 0.0)).is_nan());
        g.set_ready(true);
        assert_eq!(g.dimensions(), Some(GridDimensions::default()));
    }

    #[test]
    fn gridless_fallbacks_are_euclidean() {
        let g = SquareGrid::new(GridConfig::new(GridKind::Gridless, 100.0, 5.0).unwrap());
        let d = g.fallback_point_distance(Point::ZERO, Point::new(300.0, 400.0));
        assert_eq!(d, 25.0);
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(400.0, 500.0, 100.0, 100.0);
        assert_eq!(g.fallback_rect_distance(a, b), 25.0);
        assert_eq!(g.fallback_rect_distance(a, a), 0.0);
    }
}
