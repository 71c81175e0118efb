//! Grid topology and dimensions: [`GridKind`], [`GridDimensions`] and
//! [`GridConfig`].

use std::fmt;

/// The topology of the host grid.
///
/// Only [`GridKind::Square`] is measured with the Pathfinder counting rules;
/// every other kind is measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GridKind {
    Gridless,
    #[default]
    Square,
    HexOddRow,
    HexEvenRow,
    HexOddCol,
    HexEvenCol,
}

impl GridKind {
    #[inline]
    pub fn is_square(self) -> bool {
        self == Self::Square
    }

    /// Whether the grid is one of the hexagonal layouts.
    #[inline]
    pub fn is_hex(self) -> bool {
        matches!(
            self,
            Self::HexOddRow | Self::HexEvenRow | Self::HexOddCol | Self::HexEvenCol
        )
    }
}

/// Size of one grid cell in pixels and in game distance units.
///
/// `cell_width`/`cell_height` are the pixel footprint the host actually
/// draws for a cell; on a square grid both equal `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    /// Side of a cell in pixels.
    pub size: f64,
    /// Game distance units (feet) covered by one cell.
    pub distance: f64,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridDimensions {
    /// Square cells of `size` pixels worth `distance` units each.
    pub fn new(size: f64, distance: f64) -> Result<Self, GridError> {
        Self::with_cell(size, distance, size, size)
    }

    /// Dimensions with an explicit host cell footprint.
    pub fn with_cell(
        size: f64,
        distance: f64,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self, GridError> {
        for v in [size, distance, cell_width, cell_height] {
            if !v.is_finite() {
                return Err(GridError::NonFinite(v));
            }
        }
        if size <= 0.0 || cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(GridError::NonPositiveSize(size.min(cell_width).min(cell_height)));
        }
        if distance <= 0.0 {
            return Err(GridError::NonPositiveDistance(distance));
        }
        Ok(Self {
            size,
            distance,
            cell_width,
            cell_height,
        })
    }
}

impl Default for GridDimensions {
    /// 100 px cells worth 5 feet, the usual Pathfinder scene.
    fn default() -> Self {
        Self {
            size: GridConfig::DEFAULT_SIZE,
            distance: GridConfig::DEFAULT_DISTANCE,
            cell_width: GridConfig::DEFAULT_SIZE,
            cell_height: GridConfig::DEFAULT_SIZE,
        }
    }
}

/// Scene grid configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Grid topology. Default: square.
    pub kind: GridKind,
    /// Cell side in pixels. Default: 100.
    pub size: f64,
    /// Distance units per cell. Default: 5.
    pub distance: f64,
}

impl GridConfig {
    pub const DEFAULT_SIZE: f64 = 100.0;
    pub const DEFAULT_DISTANCE: f64 = 5.0;

    /// Validated configuration.
    pub fn new(kind: GridKind, size: f64, distance: f64) -> Result<Self, GridError> {
        GridDimensions::new(size, distance)?;
        Ok(Self {
            kind,
            size,
            distance,
        })
    }

    /// Dimensions derived from this configuration.
    pub fn dimensions(&self) -> Result<GridDimensions, GridError> {
        GridDimensions::new(self.size, self.distance)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            kind: GridKind::Square,
            size: Self::DEFAULT_SIZE,
            distance: Self::DEFAULT_DISTANCE,
        }
    }
}

/// Errors raised when building grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// A pixel size was zero or negative.
    NonPositiveSize(f64),
    /// The distance per cell was zero or negative.
    NonPositiveDistance(f64),
    /// A value was NaN or infinite.
    NonFinite(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize(v) => write!(f, "grid: cell size must be positive, got {v}"),
            Self::NonPositiveDistance(v) => {
                write!(f, "grid: distance per cell must be positive, got {v}")
            }
            Self::NonFinite(v) => write!(f, "grid: dimension is not finite: {v}"),
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_fills_missing_fields() {
        let c: GridConfig = serde_json::from_str(r#"{"kind":"hex-odd-row"}"#).unwrap();
        assert_eq!(c.kind, GridKind::HexOddRow);
        assert_eq!(c.size, GridConfig::DEFAULT_SIZE);
        assert_eq!(c.distance, GridConfig::DEFAULT_DISTANCE);
    }

    #[test]
    fn config_round_trip() {
        let c = GridConfig::new(GridKind::Gridless, 70.0, 1.5).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
