use evomap_engine::{MAP_EXTENT, MapPoint};
use serde::{Deserialize, Serialize};

use crate::geometry::PixelPoint;

/// Maps the normalized `0..=100` map space onto a pixel canvas.
///
/// The drawable area is the canvas minus `padding` on every side. Map x grows to
/// the right and map y grows downward, matching pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasTransform {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl CanvasTransform {
    pub const DEFAULT: Self = Self::new(1000.0, 700.0, 40.0);

    #[must_use]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn drawable(&self) -> (f64, f64) {
        (
            (self.width - 2.0 * self.padding).max(0.0),
            (self.height - 2.0 * self.padding).max(0.0),
        )
    }

    #[must_use]
    pub fn to_pixel(&self, point: MapPoint) -> PixelPoint {
        let (w, h) = self.drawable();
        PixelPoint::new(
            self.padding + point.x / MAP_EXTENT * w,
            self.padding + point.y / MAP_EXTENT * h,
        )
    }

    /// Inverse of [`CanvasTransform::to_pixel`], clamped into the map.
    ///
    /// A canvas without drawable area maps every pixel to the map origin.
    #[must_use]
    pub fn to_map(&self, pixel: PixelPoint) -> MapPoint {
        let (w, h) = self.drawable();
        let scale = |value: f64, extent: f64| {
            if extent > 0.0 {
                (value - self.padding) / extent * MAP_EXTENT
            } else {
                0.0
            }
        };
        MapPoint::new(scale(pixel.x, w), scale(pixel.y, h)).clamped()
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let canvas = CanvasTransform::default();
        assert_eq!(
            canvas.to_pixel(MapPoint::new(0.0, 0.0)),
            PixelPoint::new(40.0, 40.0)
        );
        assert_eq!(
            canvas.to_pixel(MapPoint::new(100.0, 100.0)),
            PixelPoint::new(960.0, 660.0)
        );
        assert_eq!(
            canvas.to_pixel(MapPoint::new(50.0, 25.0)),
            PixelPoint::new(500.0, 195.0)
        );
    }

    #[test]
    fn test_to_map_inverts_to_pixel() {
        let canvas = CanvasTransform::new(800.0, 600.0, 25.0);
        let point = MapPoint::new(37.5, 81.25);
        let back = canvas.to_map(canvas.to_pixel(point));
        assert!(back.distance(point) < 1e-9);
    }

    #[test]
    fn test_to_map_clamps_outside_pixels() {
        let canvas = CanvasTransform::default();
        assert_eq!(
            canvas.to_map(PixelPoint::new(0.0, 5000.0)),
            MapPoint::new(0.0, 100.0)
        );
        let empty = CanvasTransform::new(50.0, 50.0, 40.0);
        assert_eq!(
            empty.to_map(PixelPoint::new(25.0, 25.0)),
            MapPoint::new(0.0, 0.0)
        );
    }
}
