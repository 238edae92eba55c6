use serde::{Deserialize, Serialize};

/// A point in canvas pixel space. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Point reflection of `self` through `center`.
    #[must_use]
    pub fn reflected_about(self, center: Self) -> Self {
        Self::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Size of the box drawn for each item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub const DEFAULT: Self = Self::new(190.0, 120.0);

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn half_extents(self) -> (f64, f64) {
        (self.width.abs() / 2.0, self.height.abs() / 2.0)
    }
}

impl Default for BoxSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}
