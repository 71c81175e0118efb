//! Geometry primitives: [`Point`], [`Rect`], [`Displacement`] and [`GridPos`].
//!
//! `Point`, `Rect` and `Displacement` live in continuous pixel space, X grows
//! right and Y grows down (screen coordinates). `GridPos` addresses a whole
//! grid cell by column and row.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A point in pixel space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub fn shift(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Signed offset from `self` to `to`.
    #[inline]
    pub fn displacement_to(self, to: Point) -> Displacement {
        Displacement::new(to.x - self.x, to.y - self.y)
    }

    /// Euclidean length of the segment from `self` to `to`, in pixels.
    #[inline]
    pub fn distance_to(self, to: Point) -> f64 {
        (to.x - self.x).hypot(to.y - self.y)
    }

    /// Screen angle of the ray from `self` to `to`, in radians.
    ///
    /// Zero points right and positive angles turn clockwise on screen,
    /// because Y grows downward.
    #[inline]
    pub fn angle_to(self, to: Point) -> f64 {
        (to.y - self.y).atan2(to.x - self.x)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Displacement
// ---------------------------------------------------------------------------

/// Signed pixel deltas between two geometric features.
///
/// Grid metrics only look at the magnitude of each component.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

impl Displacement {
    /// No movement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Displacement from `p0` to `p1`.
    #[inline]
    pub fn between(p0: Point, p1: Point) -> Self {
        p0.displacement_to(p1)
    }

    /// Component magnitudes rounded up to whole cells of `cell_size` pixels.
    ///
    /// Returns `(nx, ny)`. A non-positive or NaN `cell_size` yields NaN.
    #[inline]
    pub fn cells(self, cell_size: f64) -> (f64, f64) {
        (
            (self.dx / cell_size).abs().ceil(),
            (self.dy / cell_size).abs().ceil(),
        )
    }
}

impl Neg for Displacement {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A normalized axis-aligned rectangle in pixel space.
///
/// Constructors canonicalize so that `left <= right` and `top <= bottom`.
/// Rectangles are plain values: every transformation returns a new one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    ///
    /// A negative width or height extends the rectangle left or up from
    /// `(x, y)`.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_edges(x, y, x + width, y + height)
    }

    /// Create a rectangle from two opposite edges on each axis.
    #[inline]
    pub fn from_edges(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            left: x0.min(x1),
            top: y0.min(y1),
            right: x0.max(x1),
            bottom: y0.max(y1),
        }
    }

    /// Rectangle covering `cols × rows` cells of `cell_size` pixels, with its
    /// top-left corner at `origin`. This is the footprint of a token.
    #[inline]
    pub fn from_cells(origin: Point, cols: f64, rows: f64, cell_size: f64) -> Self {
        Self::new(origin.x, origin.y, cols * cell_size, rows * cell_size)
    }

    #[inline]
    pub fn left(self) -> f64 {
        self.left
    }

    #[inline]
    pub fn top(self) -> f64 {
        self.top
    }

    #[inline]
    pub fn right(self) -> f64 {
        self.right
    }

    #[inline]
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Centre of the rectangle.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Return a rectangle of the same size translated by `p`.
    #[inline]
    pub fn translate(self, p: Point) -> Self {
        Self {
            left: self.left + p.x,
            top: self.top + p.y,
            right: self.right + p.x,
            bottom: self.bottom + p.y,
        }
    }

    /// Whether the interiors of the two rectangles intersect.
    ///
    /// The test uses strict inequalities on both axes, so rectangles that
    /// only share an edge or a corner do not overlap.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        let one_way = |a: Rect, b: Rect| {
            b.right > a.left && b.left < a.right && b.bottom > a.top && b.top < a.bottom
        };
        one_way(self, other) || one_way(other, self)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({}, {})-({}, {})]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

// ---------------------------------------------------------------------------
// GridPos
// ---------------------------------------------------------------------------

/// A grid cell address. Columns grow right, rows grow down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    /// Column 0, row 0.
    pub const ZERO: Self = Self { col: 0, row: 0 };

    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Return a position shifted by (dc, dr).
    #[inline]
    pub const fn shift(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

impl PartialOrd for GridPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl Add for GridPos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for GridPos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.col - rhs.col, self.row - rhs.row)
    }
}
