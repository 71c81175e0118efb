//! Pathfinder 2e distance measurement on square grids.
//!
//! On a square grid Pathfinder counts every second diagonal as two moves,
//! so diagonals cost 1.5 cells on average:
//!
//! - **Grid metric** ([`measure_on_grid`]): a pixel displacement rounded up
//!   to whole cells and priced with the 1.5x diagonal rule, with the
//!   10-foot reach exception.
//! - **Point distance** ([`measure_points`]).
//! - **Rectangle distance** ([`measure_rectangles`]): minimum cell distance
//!   between two token footprints, after snapping them to the grid.
//!
//! Every measurement goes through a [`DistanceStrategy`] chosen once per
//! call by [`strategy_for`]: grids that are not square are measured by the
//! [`GridHost`] itself.
//!
//! Measurements never fail. When the host has no dimensions yet the result
//! is NaN; check it with [`is_measurable`].

mod host;
mod metric;
mod rect;
mod square;
mod strategy;

pub use host::GridHost;
pub use metric::{DIAGONAL_REACH, GridSquareCount, is_measurable, measure_on_grid};
pub use rect::{measure_rectangles_on_grid, snap_toward, snapped_gap};
pub use square::SquareGrid;
pub use strategy::{
    DelegatedMetric, DistanceStrategy, MeasureOptions, Metric, SquareGridMetric, strategy_for,
};

use pfgrid_core::{Point, Rect};

/// Distance between two points on the host's grid, in distance units.
pub fn measure_points<H: GridHost + ?Sized>(host: &H, p0: Point, p1: Point) -> f64 {
    strategy_for(host).measure_points(p0, p1)
}

/// Distance between the nearest cells of two rectangles on the host's grid.
pub fn measure_rectangles<H: GridHost + ?Sized>(
    host: &H,
    r0: Rect,
    r1: Rect,
    options: MeasureOptions,
) -> f64 {
    strategy_for(host).measure_rectangles(r0, r1, options)
}

/// Whether `r1` is within `reach` distance units of `r0`.
///
/// Unmeasurable distances are never within reach.
pub fn within_reach<H: GridHost + ?Sized>(host: &H, r0: Rect, r1: Rect, reach: f64) -> bool {
    let d = measure_rectangles(host, r0, r1, MeasureOptions::with_reach(reach));
    is_measurable(d) && d <= reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfgrid_core::{GridConfig, GridKind};

    fn token(col: f64, row: f64) -> Rect {
        Rect::from_cells(Point::new(col * 100.0, row * 100.0), 1.0, 1.0, 100.0)
    }

    #[test]
    fn points_on_square_grid() {
        let g = SquareGrid::default();
        assert_eq!(measure_points(&g, Point::ZERO, Point::ZERO), 0.0);
        assert_eq!(measure_points(&g, Point::new(50.0, 50.0), Point::new(550.0, 50.0)), 25.0);
        assert_eq!(measure_points(&g, Point::new(50.0, 50.0), Point::new(350.0, 350.0)), 20.0);
    }

    #[test]
    fn points_on_gridless_scene() {
        let g = SquareGrid::new(GridConfig::new(GridKind::Gridless, 100.0, 5.0).unwrap());
        let want = 300f64.hypot(300.0) / 100.0 * 5.0;
        assert_eq!(measure_points(&g, Point::ZERO, Point::new(300.0, 300.0)), want);
    }

    #[test]
    fn uninitialized_scene_is_unmeasurable() {
        let g = SquareGrid::uninitialized(GridConfig::default());
        assert!(!is_measurable(measure_points(&g, Point::ZERO, Point::new(100.0, 0.0))));
        assert!(!within_reach(&g, token(0.0, 0.0), token(1.0, 0.0), 5.0));
    }

    #[test]
    fn reach_checks() {
        let g = SquareGrid::default();
        let me = token(0.0, 0.0);
        assert!(within_reach(&g, me, token(1.0, 1.0), 5.0));
        assert!(!within_reach(&g, me, token(2.0, 0.0), 5.0));
        assert!(within_reach(&g, me, token(2.0, 0.0), 10.0));
        // 10-foot reach covers two diagonals, 15 feet without the exception.
        assert!(within_reach(&g, me, token(2.0, 2.0), 10.0));
        assert_eq!(
            measure_rectangles(&g, me, token(2.0, 2.0), MeasureOptions::default()),
            15.0
        );
        assert!(!within_reach(&g, me, token(3.0, 3.0), 10.0));
    }
}
