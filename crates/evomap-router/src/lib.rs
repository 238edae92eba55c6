//! Connector geometry for evolution maps.
//!
//! Items are drawn as fixed-size boxes centered on their pixel position. A
//! relationship is drawn as a connector that starts at the source box's center and
//! stops just short of the target box's border, leaving room for an arrowhead.
//!
//! - [`route`] computes the connector endpoints for one pair of boxes.
//! - [`EdgeRouter`] bundles the box size and clearance used for a whole layout pass.
//! - [`CanvasTransform`] converts normalized map coordinates into pixels.
//!
//! All functions are pure and never produce non-finite coordinates from finite
//! input, including axis-aligned and coincident boxes.
//!
//! # Example
//!
//! ```
//! use evomap_router::{PixelPoint, route};
//!
//! let (from, to) = (PixelPoint::new(0.0, 0.0), PixelPoint::new(100.0, 0.0));
//! let edge = route(from, to, 190.0, 120.0, 10.0);
//! assert_eq!(edge.from, PixelPoint::new(0.0, 0.0));
//! assert_eq!(edge.to, PixelPoint::new(-5.0, 0.0));
//! ```

pub use self::{canvas::*, geometry::*, route::*};

mod canvas;
mod geometry;
mod route;
