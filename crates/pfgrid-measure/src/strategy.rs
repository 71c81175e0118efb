use pfgrid_core::{Displacement, GridDimensions, Point, Rect};

use crate::host::GridHost;
use crate::metric::measure_on_grid;
use crate::rect::measure_rectangles_on_grid;

/// Options for a single measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeasureOptions {
    /// Melee reach of the measuring actor, in distance units. Default: none.
    pub reach: Option<f64>,
}

impl MeasureOptions {
    #[inline]
    pub fn with_reach(reach: f64) -> Self {
        Self { reach: Some(reach) }
    }
}

/// A way of measuring game distance between points and rectangles.
pub trait DistanceStrategy {
    /// Distance between two points, in distance units.
    fn measure_points(&self, p0: Point, p1: Point) -> f64;

    /// Distance between the nearest cells of two rectangles.
    fn measure_rectangles(&self, r0: Rect, r1: Rect, options: MeasureOptions) -> f64;
}

/// The Pathfinder square-grid metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareGridMetric {
    dims: Option<GridDimensions>,
}

impl SquareGridMetric {
    /// Metric over cells of `dims`; `None` measures everything as NaN
    /// (except overlapping rectangles, which are 0 apart).
    pub fn new(dims: Option<GridDimensions>) -> Self {
        Self { dims }
    }
}

impl DistanceStrategy for SquareGridMetric {
    fn measure_points(&self, p0: Point, p1: Point) -> f64 {
        measure_on_grid(Displacement::between(p0, p1), self.dims, None)
    }

    fn measure_rectangles(&self, r0: Rect, r1: Rect, options: MeasureOptions) -> f64 {
        measure_rectangles_on_grid(r0, r1, self.dims, options.reach)
    }
}

/// Hands every measurement to the host's own distance function.
pub struct DelegatedMetric<'a, H: ?Sized> {
    host: &'a H,
}

impl<'a, H: GridHost + ?Sized> DelegatedMetric<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self { host }
    }
}

impl<H: GridHost + ?Sized> DistanceStrategy for DelegatedMetric<'_, H> {
    fn measure_points(&self, p0: Point, p1: Point) -> f64 {
        log::trace!("delegating point distance {p0} -> {p1} to {:?} grid", self.host.kind());
        self.host.fallback_point_distance(p0, p1)
    }

    /// Reach has no effect on host-measured grids.
    fn measure_rectangles(&self, r0: Rect, r1: Rect, _options: MeasureOptions) -> f64 {
        log::trace!("delegating rectangle distance {r0} -> {r1} to {:?} grid", self.host.kind());
        self.host.fallback_rect_distance(r0, r1)
    }
}

/// The strategy picked for one host.
pub enum Metric<'a, H: ?Sized> {
    Square(SquareGridMetric),
    Delegated(DelegatedMetric<'a, H>),
}

impl<H: GridHost + ?Sized> Metric<'_, H> {
    #[inline]
    pub fn is_square(&self) -> bool {
        matches!(self, Self::Square(_))
    }
}

impl<H: GridHost + ?Sized> DistanceStrategy for Metric<'_, H> {
    #[inline]
    fn measure_points(&self, p0: Point, p1: Point) -> f64 {
        match self {
            Self::Square(m) => m.measure_points(p0, p1),
            Self::Delegated(m) => m.measure_points(p0, p1),
        }
    }

    #[inline]
    fn measure_rectangles(&self, r0: Rect, r1: Rect, options: MeasureOptions) -> f64 {
        match self {
            Self::Square(m) => m.measure_rectangles(r0, r1, options),
            Self::Delegated(m) => m.measure_rectangles(r0, r1, options),
        }
    }
}

/// Select the metric for `host`: the Pathfinder metric on square grids,
/// the host's own distance function everywhere else.
pub fn strategy_for<H: GridHost + ?Sized>(host: &H) -> Metric<'_, H> {
    if host.kind().is_square() {
        Metric::Square(SquareGridMetric::new(host.dimensions()))
    } else {
        Metric::Delegated(DelegatedMetric::new(host))
    }
}
