/// Normalize an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    (360.0 + deg % 360.0) % 360.0
}

/// The field of a cone, `[min, max]` degrees clockwise from east.
///
/// Both bounds are normalized into `[0, 360)`. When `min > max` the sector
/// wraps past 360 back to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSector {
    pub min: f64,
    pub max: f64,
}

impl AngularSector {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: normalize_degrees(min),
            max: normalize_degrees(max),
        }
    }

    /// Sector `angle` degrees wide centred on `direction`.
    ///
    /// A zero-width or full-circle sector has `min == max` and therefore
    /// contains every angle.
    pub fn around(direction: f64, angle: f64) -> Self {
        Self::new(direction - angle * 0.5, direction + angle * 0.5)
    }

    /// Whether the sector wraps through 0 degrees.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.min >= self.max
    }

    /// Whether `deg` lies inside the sector, bounds included.
    pub fn contains(&self, deg: f64) -> bool {
        let v = normalize_degrees(deg);
        if self.min < self.max {
            v >= self.min && v <= self.max
        } else {
            v >= self.min || v <= self.max
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-45.0), 315.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
    }

    #[test]
    fn plain_sector() {
        let s = AngularSector::around(90.0, 90.0);
        assert_eq!(s, AngularSector { min: 45.0, max: 135.0 });
        assert!(!s.wraps());
        assert!(s.contains(45.0));
        assert!(s.contains(90.0));
        assert!(s.contains(135.0));
        assert!(!s.contains(136.0));
        assert!(!s.contains(0.0));
        assert!(s.contains(90.0 + 360.0));
    }

    #[test]
    fn wrapping_sector() {
        let s = AngularSector::new(350.0, 10.0);
        assert!(s.wraps());
        assert!(s.contains(0.0));
        assert!(s.contains(5.0));
        assert!(s.contains(355.0));
        assert!(s.contains(-5.0));
        assert!(!s.contains(180.0));
        assert!(!s.contains(11.0));
        assert!(!s.contains(349.0));
    }

    #[test]
    fn east_cone_wraps() {
        let s = AngularSector::around(0.0, 90.0);
        assert_eq!(s, AngularSector { min: 315.0, max: 45.0 });
        assert!(s.contains(-45.0));
        assert!(s.contains(45.0));
        assert!(!s.contains(90.0));
        assert!(!s.contains(270.0));
    }

    #[test]
    fn degenerate_sectors_contain_everything() {
        for s in [AngularSector::around(45.0, 0.0), AngularSector::around(30.0, 360.0)] {
            for deg in [0.0, 45.0, 90.0, 180.0, 300.0] {
                assert!(s.contains(deg), "{s:?} should contain {deg}");
            }
        }
    }
}
