//! Area-of-effect shapes: [`ShapeKind`] and [`ShapeSpec`].

use std::fmt;
use std::str::FromStr;

use pfgrid_core::Point;

/// The kind of area an effect covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    /// Radiates from a grid intersection in every direction.
    Burst,
    /// Quarter circle (by default) spreading from the origin.
    Cone,
    /// Radiates from each side of the creature or object.
    Emanation,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Burst => "burst",
            Self::Cone => "cone",
            Self::Emanation => "emanation",
        }
    }

    #[inline]
    pub fn is_cone(self) -> bool {
        self == Self::Cone
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, ShapeError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "burst" => Ok(Self::Burst),
            "cone" => Ok(Self::Cone),
            "emanation" => Ok(Self::Emanation),
            _ => Err(ShapeError::UnknownKind(s.to_string())),
        }
    }
}

/// Parameters of one area-of-effect template.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    /// Anchor of the template in pixels.
    pub origin: Point,
    /// Radius (or length) in distance units.
    pub distance: f64,
    /// Cone width in degrees. Default: 0.
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle: f64,
    /// Direction the cone points to, in degrees clockwise from east.
    /// Default: 45.
    #[cfg_attr(feature = "serde", serde(default = "ShapeSpec::default_direction"))]
    pub direction: f64,
}

impl ShapeSpec {
    pub const DEFAULT_ANGLE: f64 = 0.0;
    pub const DEFAULT_DIRECTION: f64 = 45.0;
    /// Width of a standard Pathfinder cone.
    pub const CONE_ANGLE: f64 = 90.0;

    /// A shape with the default angle and direction.
    pub fn new(kind: ShapeKind, origin: Point, distance: f64) -> Self {
        Self {
            kind,
            origin,
            distance,
            angle: Self::DEFAULT_ANGLE,
            direction: Self::DEFAULT_DIRECTION,
        }
    }

    /// A burst of `distance` units centred on `origin`.
    pub fn burst(origin: Point, distance: f64) -> Self {
        Self::new(ShapeKind::Burst, origin, distance)
    }

    /// An emanation of `distance` units around `origin`.
    pub fn emanation(origin: Point, distance: f64) -> Self {
        Self::new(ShapeKind::Emanation, origin, distance)
    }

    /// A standard 90-degree cone pointing `direction` degrees clockwise
    /// from east.
    pub fn cone(origin: Point, distance: f64, direction: f64) -> Self {
        Self::new(ShapeKind::Cone, origin, distance)
            .with_angle(Self::CONE_ANGLE)
            .with_direction(direction)
    }

    /// Set the cone width (builder).
    #[inline]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Set the direction (builder).
    #[inline]
    pub fn with_direction(mut self, direction: f64) -> Self {
        self.direction = direction;
        self
    }

    /// Move the anchor (builder).
    #[inline]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    #[cfg(feature = "serde")]
    fn default_direction() -> f64 {
        Self::DEFAULT_DIRECTION
    }

    /// Check that the shape can be laid out on a grid.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(ShapeError::InvalidDistance(self.distance));
        }
        if !self.angle.is_finite() || !self.direction.is_finite() {
            return Err(ShapeError::InvalidAngle {
                angle: self.angle,
                direction: self.direction,
            });
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(ShapeError::InvalidOrigin(self.origin));
        }
        Ok(())
    }
}

/// Errors for malformed shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The name is not one of `burst`, `cone`, `emanation`.
    UnknownKind(String),
    /// The distance is negative, NaN or infinite.
    InvalidDistance(f64),
    /// The angle or direction is NaN or infinite.
    InvalidAngle { angle: f64, direction: f64 },
    /// The origin is not a finite point.
    InvalidOrigin(Point),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(s) => write!(f, "shape: unknown kind {s:?}"),
            Self::InvalidDistance(d) => write!(f, "shape: invalid distance {d}"),
            Self::InvalidAngle { angle, direction } => {
                write!(f, "shape: invalid angle {angle} / direction {direction}")
            }
            Self::InvalidOrigin(p) => write!(f, "shape: invalid origin {p}"),
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = ShapeSpec::burst(Point::ZERO, 10.0);
        assert_eq!(s.kind, ShapeKind::Burst);
        assert_eq!(s.angle, 0.0);
        assert_eq!(s.direction, 45.0);
        let c = ShapeSpec::cone(Point::ZERO, 15.0, 90.0);
        assert_eq!(c.angle, 90.0);
        assert_eq!(c.direction, 90.0);
    }

    #[test]
    fn parse_kinds() {
        assert_eq!("burst".parse::<ShapeKind>(), Ok(ShapeKind::Burst));
        assert_eq!(" Cone ".parse::<ShapeKind>(), Ok(ShapeKind::Cone));
        assert_eq!("EMANATION".parse::<ShapeKind>(), Ok(ShapeKind::Emanation));
        assert_eq!(
            "line".parse::<ShapeKind>(),
            Err(ShapeError::UnknownKind("line".into()))
        );
        for k in [ShapeKind::Burst, ShapeKind::Cone, ShapeKind::Emanation] {
            assert_eq!(k.to_string().parse::<ShapeKind>(), Ok(k));
        }
    }

    #[test]
    fn validation() {
        assert!(ShapeSpec::burst(Point::ZERO, 0.0).validate().is_ok());
        assert_eq!(
            ShapeSpec::burst(Point::ZERO, -5.0).validate(),
            Err(ShapeError::InvalidDistance(-5.0))
        );
        assert!(ShapeSpec::burst(Point::ZERO, f64::INFINITY).validate().is_err());
        assert!(
            ShapeSpec::cone(Point::ZERO, 15.0, f64::NAN)
                .validate()
                .is_err()
        );
        assert!(
            ShapeSpec::burst(Point::new(f64::NAN, 0.0), 5.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn error_messages() {
        let e = ShapeError::UnknownKind("line".into());
        assert_eq!(e.to_string(), "shape: unknown kind \"line\"");
        assert_eq!(
            ShapeError::InvalidDistance(-5.0).to_string(),
            "shape: invalid distance -5"
        );
    }
}
