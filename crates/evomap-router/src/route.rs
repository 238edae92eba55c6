use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::{BoxSize, PixelPoint};

/// Below this length two centers are treated as coincident.
const MIN_DIRECTION_LENGTH: f64 = 1e-9;

/// Connector endpoints produced by [`route`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutedEdge {
    /// Source box center.
    pub from: PixelPoint,
    /// Point just short of the target box's border.
    pub to: PixelPoint,
}

impl RoutedEdge {
    #[must_use]
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// Box size and clearance shared by every connector of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRouter {
    pub box_size: BoxSize,
    pub clearance: f64,
}

impl EdgeRouter {
    pub const DEFAULT_CLEARANCE: f64 = 10.0;

    #[must_use]
    pub const fn new(box_size: BoxSize, clearance: f64) -> Self {
        Self {
            box_size,
            clearance,
        }
    }

    #[must_use]
    pub fn route(&self, from: PixelPoint, to: PixelPoint) -> RoutedEdge {
        route(
            from,
            to,
            self.box_size.width,
            self.box_size.height,
            self.clearance,
        )
    }
}

impl Default for EdgeRouter {
    fn default() -> Self {
        Self::new(BoxSize::DEFAULT, Self::DEFAULT_CLEARANCE)
    }
}

/// Computes the connector from the center of one box to the border of another.
///
/// Both boxes are `box_width × box_height` and centered on `from` and `to`. The
/// returned `from` is the source center unchanged. The returned `to` is where the
/// straight line from the source center meets the target box's border, moved back
/// toward the source by `clearance`.
///
/// The border is found from the bearing `θ` of the source as seen from the target
/// center and the box's corner angle `φ = atan2(h/2, w/2)`:
///
/// ```text
///   |θ| < φ          right edge   (w/2,  w/2·tan θ)
///   |θ| > π − φ      left edge    (−w/2, −w/2·tan θ)
///   otherwise        bottom (θ > 0) or top (θ < 0) edge, (±h/2 / tan θ, ±h/2)
/// ```
///
/// The tangent is taken as a ratio of direction components inside each branch, so
/// its denominator is never zero there. When the centers coincide the source is
/// treated as lying directly left of the target.
#[must_use]
pub fn route(
    from: PixelPoint,
    to: PixelPoint,
    box_width: f64,
    box_height: f64,
    clearance: f64,
) -> RoutedEdge {
    let (half_w, half_h) = BoxSize::new(box_width, box_height).half_extents();

    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let length = dx.hypot(dy);
    let (ux, uy) = if length.is_finite() && length > MIN_DIRECTION_LENGTH {
        (dx / length, dy / length)
    } else {
        (1.0, 0.0)
    };

    // unit vector from the target center toward the source
    let (vx, vy) = (-ux, -uy);
    let theta = vy.atan2(vx);
    let phi = half_h.atan2(half_w);

    let (ox, oy) = if theta.abs() < phi {
        (half_w, half_w * vy / vx)
    } else if theta.abs() > PI - phi {
        (-half_w, -half_w * vy / vx)
    } else if vy.abs() > MIN_DIRECTION_LENGTH {
        let edge_y = half_h.copysign(vy);
        (edge_y * vx / vy, edge_y)
    } else {
        // flat box approached along its own axis
        (half_w.copysign(vx), 0.0)
    };

    RoutedEdge {
        from,
        to: PixelPoint::new(to.x + ox - ux * clearance, to.y + oy - uy * clearance),
    }
}
