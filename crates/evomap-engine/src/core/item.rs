use std::fmt;

use serde::{Deserialize, Serialize};

use super::{classification::Classification, point::MapPoint, stage::EvolutionStage};

/// Identifier of an item, unique within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A component on the map: its expected placement and the player's current one.
///
/// The target fields are fixed by the scenario. The actual position and
/// classification change as the player works on the map and are unset until the
/// player provides them.
///
/// # Example
///
/// ```
/// use evomap_engine::{Classification, EvolutionStage, Item, MapPoint};
///
/// let mut item = Item::new(
///     "power",
///     "Power",
///     MapPoint::new(92.0, 85.0),
///     EvolutionStage::Commodity,
///     Some(Classification::Buy),
/// );
/// assert!(!item.is_placed());
///
/// item.set_actual_position(Some(MapPoint::new(90.0, 80.0)));
/// item.set_actual_classification(Some(Classification::Buy));
/// assert!(item.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    target_position: MapPoint,
    target_stage: EvolutionStage,
    target_classification: Option<Classification>,
    #[serde(default)]
    actual_position: Option<MapPoint>,
    #[serde(default)]
    actual_classification: Option<Classification>,
}

impl Item {
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        target_position: MapPoint,
        target_stage: EvolutionStage,
        target_classification: Option<Classification>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_position,
            target_stage,
            target_classification,
            actual_position: None,
            actual_classification: None,
        }
    }

    /// Builder-style variant of [`Item::set_actual_position`].
    #[must_use]
    pub fn placed_at(mut self, position: MapPoint) -> Self {
        self.actual_position = Some(position);
        self
    }

    /// Builder-style variant of [`Item::set_actual_classification`].
    #[must_use]
    pub fn classified_as(mut self, classification: Classification) -> Self {
        self.actual_classification = Some(classification);
        self
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn target_position(&self) -> MapPoint {
        self.target_position
    }

    #[must_use]
    pub fn target_stage(&self) -> EvolutionStage {
        self.target_stage
    }

    #[must_use]
    pub fn target_classification(&self) -> Option<Classification> {
        self.target_classification
    }

    #[must_use]
    pub fn actual_position(&self) -> Option<MapPoint> {
        self.actual_position
    }

    #[must_use]
    pub fn actual_classification(&self) -> Option<Classification> {
        self.actual_classification
    }

    /// Stage the item currently sits in, derived from its actual x coordinate.
    #[must_use]
    pub fn actual_stage(&self) -> Option<EvolutionStage> {
        self.actual_position.map(|p| EvolutionStage::from_x(p.x))
    }

    pub fn set_actual_position(&mut self, position: Option<MapPoint>) {
        self.actual_position = position;
    }

    pub fn set_actual_classification(&mut self, classification: Option<Classification>) {
        self.actual_classification = classification;
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.actual_position.is_some()
    }

    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.actual_classification.is_some()
    }

    /// An item is complete once it is both placed and classified.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_placed() && self.is_classified()
    }

    /// Returns whether the item is placed with its x coordinate inside `stage`.
    #[must_use]
    pub fn is_placed_in(&self, stage: EvolutionStage) -> bool {
        self.actual_position.is_some_and(|p| stage.contains_x(p.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kettle() -> Item {
        Item::new(
            "kettle",
            "Kettle",
            MapPoint::new(60.0, 60.0),
            EvolutionStage::Product,
            Some(Classification::Buy),
        )
    }

    #[test]
    fn test_completion_states() {
        let item = kettle();
        assert!(!item.is_placed());
        assert!(!item.is_classified());
        assert!(!item.is_complete());
        assert_eq!(item.actual_stage(), None);

        let placed = kettle().placed_at(MapPoint::new(80.0, 10.0));
        assert!(placed.is_placed());
        assert!(!placed.is_complete());
        assert_eq!(placed.actual_stage(), Some(EvolutionStage::Commodity));
        assert!(placed.is_placed_in(EvolutionStage::Commodity));
        assert!(!placed.is_placed_in(EvolutionStage::Product));

        let classified = kettle().classified_as(Classification::Build);
        assert!(classified.is_classified());
        assert!(!classified.is_complete());

        let complete = placed.classified_as(Classification::Buy);
        assert!(complete.is_complete());
    }

    #[test]
    fn test_unplace() {
        let mut item = kettle().placed_at(MapPoint::new(10.0, 10.0));
        item.set_actual_position(None);
        assert!(!item.is_placed());
    }

    #[test]
    fn test_deserialize_without_actual_state() {
        let json = r#"{
            "id": "kettle",
            "name": "Kettle",
            "target_position": { "x": 60.0, "y": 60.0 },
            "target_stage": "product",
            "target_classification": "buy"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item, kettle());
    }
}
