//! Highlight layers: the drawing surface the highlighter paints on.
//!
//! The host owns the layers; [`highlight`](crate::highlight) only clears
//! and paints. [`HighlightLayers`] is an in-memory surface for hosts that
//! render from a cell list.

use std::collections::HashMap;

use pfgrid_core::{Color, Point};

/// Border and fill colour of highlighted cells, passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightColors {
    pub border: Color,
    pub fill: Color,
}

impl HighlightColors {
    pub const fn new(border: Color, fill: Color) -> Self {
        Self { border, fill }
    }
}

/// One object's highlight layer.
pub trait HighlightLayer {
    /// Remove every painted cell.
    fn clear(&mut self);

    /// Paint the cell whose top-left corner is at pixel `(x, y)`.
    fn paint_cell(&mut self, x: f64, y: f64, colors: HighlightColors);
}

/// A set of highlight layers keyed by object id.
pub trait HighlightSurface {
    type Layer: HighlightLayer;

    /// The layer of `object_id`, created empty on first use.
    fn layer(&mut self, object_id: &str) -> &mut Self::Layer;
}

/// A painted cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedCell {
    /// Top-left corner of the cell in pixels.
    pub at: Point,
    pub colors: HighlightColors,
}

/// In-memory highlight layer: the list of painted cells in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellHighlights {
    cells: Vec<PaintedCell>,
}

impl CellHighlights {
    #[inline]
    pub fn cells(&self) -> &[PaintedCell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell with top-left corner `at` is painted.
    pub fn contains(&self, at: Point) -> bool {
        self.cells.iter().any(|c| c.at == at)
    }
}

impl HighlightLayer for CellHighlights {
    fn clear(&mut self) {
        self.cells.clear();
    }

    fn paint_cell(&mut self, x: f64, y: f64, colors: HighlightColors) {
        self.cells.push(PaintedCell {
            at: Point::new(x, y),
            colors,
        });
    }
}

/// In-memory [`HighlightSurface`].
#[derive(Debug, Clone, Default)]
pub struct HighlightLayers {
    layers: HashMap<String, CellHighlights>,
}

impl HighlightLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layer of `object_id`, if it was ever used.
    pub fn get(&self, object_id: &str) -> Option<&CellHighlights> {
        self.layers.get(object_id)
    }

    /// Drop the layer of a deleted object.
    pub fn remove(&mut self, object_id: &str) -> Option<CellHighlights> {
        self.layers.remove(object_id)
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl HighlightSurface for HighlightLayers {
    type Layer = CellHighlights;

    fn layer(&mut self, object_id: &str) -> &mut CellHighlights {
        self.layers.entry(object_id.to_string()).or_default()
    }
}
