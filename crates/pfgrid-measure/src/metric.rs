use pfgrid_core::{Displacement, GridDimensions};

/// Reach value, in distance units, that may strike two cells diagonally.
pub const DIAGONAL_REACH: f64 = 10.0;

/// A displacement decomposed into diagonal and straight grid moves.
///
/// Both counts are whole numbers; they are kept as `f64` so that a NaN
/// displacement stays NaN all the way to the measured distance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSquareCount {
    pub diagonal: f64,
    pub straight: f64,
}

impl GridSquareCount {
    /// Decompose a move of `nx` columns and `ny` rows.
    #[inline]
    pub fn from_cells(nx: f64, ny: f64) -> Self {
        Self {
            diagonal: nx.min(ny),
            straight: (ny - nx).abs(),
        }
    }

    /// Decompose a pixel displacement on cells of `cell_size` pixels.
    #[inline]
    pub fn from_displacement(d: Displacement, cell_size: f64) -> Self {
        let (nx, ny) = d.cells(cell_size);
        Self::from_cells(nx, ny)
    }

    /// Number of cells the move costs.
    ///
    /// Every second diagonal costs double, so `diagonal` moves cost
    /// `floor(diagonal * 1.5)`. A reach of exactly [`DIAGONAL_REACH`] takes
    /// one cell off when more than one diagonal is involved.
    #[inline]
    pub fn cell_count(self, reach: Option<f64>) -> f64 {
        let reduction = if self.diagonal > 1.0 && reach == Some(DIAGONAL_REACH) {
            1.0
        } else {
            0.0
        };
        (self.diagonal * 1.5 + self.straight).floor() - reduction
    }
}

/// Pathfinder distance of a displacement on a square grid, in distance
/// units.
///
/// Returns NaN when `dims` is `None` (the grid is not ready yet).
pub fn measure_on_grid(
    displacement: Displacement,
    dims: Option<GridDimensions>,
    reach: Option<f64>,
) -> f64 {
    let Some(dims) = dims else {
        return f64::NAN;
    };
    GridSquareCount::from_displacement(displacement, dims.size).cell_count(reach) * dims.distance
}

/// Whether `distance` is a real measurement rather than the NaN sentinel.
#[inline]
pub fn is_measurable(distance: f64) -> bool {
    !distance.is_nan()
}
