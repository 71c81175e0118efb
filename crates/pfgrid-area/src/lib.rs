//! Area-of-effect highlighting for Pathfinder 2e templates.
//!
//! Given a [`ShapeSpec`] (burst, cone or emanation), [`area_cells`] lists
//! the grid cells the area covers, measured with the Pathfinder square-grid
//! metric from `pfgrid-measure`, and [`highlight`] repaints an object's
//! highlight layer with them.
//!
//! # Example
//!
//! ```
//! use pfgrid_area::{HighlightColors, HighlightLayers, ShapeSpec, highlight};
//! use pfgrid_core::{Color, Point};
//! use pfgrid_measure::SquareGrid;
//!
//! let grid = SquareGrid::default();
//! let mut layers = HighlightLayers::new();
//! let burst = ShapeSpec::burst(Point::ZERO, 10.0);
//! let colors = HighlightColors::new(Color::BLACK, Color::WHITE);
//! assert_eq!(highlight(&grid, &mut layers, Some("fireball"), &burst, colors), 12);
//! ```

mod highlight;
mod layer;
mod sector;
mod shape;

pub use highlight::{MAX_WINDOW_EXTENT, area_cells, cone_origin_offset, highlight, window_extent};
pub use layer::{
    CellHighlights, HighlightColors, HighlightLayer, HighlightLayers, HighlightSurface,
    PaintedCell,
};
pub use sector::{AngularSector, normalize_degrees};
pub use shape::{ShapeError, ShapeKind, ShapeSpec};
