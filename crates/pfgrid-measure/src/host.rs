use pfgrid_core::{GridDimensions, GridKind, GridPos, Point, Rect};

/// The rendering side of the scene, as seen by the measurement code.
///
/// The host owns the grid: its topology, its dimensions, the mapping
/// between pixels and cells, and its own distance function for grids that
/// are not square.
pub trait GridHost {
    /// Topology of the scene grid.
    fn kind(&self) -> GridKind;

    /// Cell dimensions, or `None` while the scene is not ready.
    fn dimensions(&self) -> Option<GridDimensions>;

    /// Top-left pixel of the cell at `pos`.
    fn grid_to_pixel(&self, pos: GridPos) -> Point;

    /// Cell containing the pixel `p`.
    fn pixel_to_grid(&self, p: Point) -> GridPos;

    /// Visual centre of a shape anchored at `p`.
    fn shape_center(&self, p: Point) -> Point;

    /// Host distance between two points, used for non-square grids.
    fn fallback_point_distance(&self, p0: Point, p1: Point) -> f64;

    /// Host distance between two rectangles, used for non-square grids.
    fn fallback_rect_distance(&self, r0: Rect, r1: Rect) -> f64;
}
