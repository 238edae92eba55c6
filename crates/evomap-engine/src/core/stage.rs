use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::point::MAP_EXTENT;

/// Evolution stage of a component, ordered from novel to standardized.
///
/// Each stage owns a contiguous quarter of the map's x axis:
///
/// | Stage       | x range      |
/// |-------------|--------------|
/// | `Genesis`   | `[0, 25)`    |
/// | `Custom`    | `[25, 50)`   |
/// | `Product`   | `[50, 75)`   |
/// | `Commodity` | `[75, 100]`  |
///
/// The commodity range is closed at the right border so a point clamped onto the
/// edge of the map still belongs to a stage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionStage {
    Genesis,
    Custom,
    Product,
    Commodity,
}

impl EvolutionStage {
    pub const LEN: usize = 4;

    pub const ALL: [Self; Self::LEN] = [
        Self::Genesis,
        Self::Custom,
        Self::Product,
        Self::Commodity,
    ];

    const WIDTH: f64 = MAP_EXTENT / 4.0;

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Half-open x range owned by this stage.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn x_range(self) -> Range<f64> {
        let start = self.index() as f64 * Self::WIDTH;
        start..start + Self::WIDTH
    }

    /// Returns whether `x` falls in this stage's range.
    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        match self {
            Self::Commodity => (self.x_range().start..=MAP_EXTENT).contains(&x),
            _ => self.x_range().contains(&x),
        }
    }

    /// Maps an x coordinate onto a stage.
    ///
    /// Coordinates left of the map fall into `Genesis` and coordinates at or past
    /// the right border fall into `Commodity`.
    #[must_use]
    pub fn from_x(x: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|stage| x < stage.x_range().end)
            .unwrap_or(Self::Commodity)
    }
}
