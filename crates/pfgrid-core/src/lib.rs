//! **pfgrid-core** — core types for Pathfinder 2e grid measurement.
//!
//! This crate provides the value types shared by the measurement and area
//! crates: pixel-space geometry, grid cell addresses, highlight colours and
//! the scene grid configuration.

pub mod color;
pub mod geom;
pub mod grid;

pub use color::Color;
pub use geom::{Displacement, GridPos, Point, Rect};
pub use grid::{GridConfig, GridDimensions, GridError, GridKind};
