use serde::{Deserialize, Serialize};

/// Side length of the normalized map space.
pub const MAP_EXTENT: f64 = 100.0;

/// Largest possible distance between two points of the map (its diagonal).
pub const MAX_MAP_DISTANCE: f64 = MAP_EXTENT * std::f64::consts::SQRT_2;

/// A point in the normalized map space.
///
/// Both axes span `[0.0, 100.0]`. The x axis is evolution (left: genesis, right:
/// commodity), the y axis is visibility to the user (top: visible).
///
/// # Example
///
/// ```
/// use evomap_engine::MapPoint;
///
/// let a = MapPoint::new(0.0, 0.0);
/// let b = MapPoint::new(30.0, 40.0);
/// assert_eq!(a.distance(b), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point with both coordinates clamped into the map.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, MAP_EXTENT),
            y: self.y.clamp(0.0, MAP_EXTENT),
        }
    }

    #[must_use]
    pub fn is_inside_map(self) -> bool {
        (0.0..=MAP_EXTENT).contains(&self.x) && (0.0..=MAP_EXTENT).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_distance_is_diagonal() {
        let origin = MapPoint::new(0.0, 0.0);
        let corner = MapPoint::new(MAP_EXTENT, MAP_EXTENT);
        assert!((origin.distance(corner) - MAX_MAP_DISTANCE).abs() < 1e-9);
        assert!((MAX_MAP_DISTANCE - 141.421_356).abs() < 1e-6);
    }

    #[test]
    fn test_clamped() {
        let p = MapPoint::new(-3.0, 120.0).clamped();
        assert_eq!(p, MapPoint::new(0.0, 100.0));
        assert!(p.is_inside_map());
        assert!(!MapPoint::new(100.5, 50.0).is_inside_map());
    }
}
