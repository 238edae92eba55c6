use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    Classification, EvolutionStage, Item, ItemId, MapPoint, ReferenceTable, Relationship,
    ScenarioError,
};

/// Static definition of one item in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioItem {
    pub id: ItemId,
    pub name: String,
    pub target_position: MapPoint,
    pub target_stage: EvolutionStage,
    #[serde(default)]
    pub target_classification: Option<Classification>,
}

impl ScenarioItem {
    /// Creates a fresh, unplaced and unclassified [`Item`].
    #[must_use]
    pub fn to_item(&self) -> Item {
        Item::new(
            self.id.clone(),
            self.name.clone(),
            self.target_position,
            self.target_stage,
            self.target_classification,
        )
    }
}

/// Configuration of one exercise: the items to place, the correct relationships, and
/// the item the commodity-sourcing achievement is keyed on.
///
/// Scenarios are loaded from JSON or built in code; [`Scenario::tea_shop`] is the
/// built-in default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub items: Vec<ScenarioItem>,
    pub reference: ReferenceTable,
    pub commodity_item: ItemId,
}

impl Scenario {
    /// Checks the scenario for internal consistency.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.items.is_empty() {
            return Err(ScenarioError::NoItems);
        }

        let mut ids = BTreeSet::new();
        for item in &self.items {
            if !ids.insert(&item.id) {
                return Err(ScenarioError::DuplicateItem(item.id.clone()));
            }
            let p = item.target_position;
            if !p.is_inside_map() {
                return Err(ScenarioError::TargetOutOfBounds {
                    id: item.id.clone(),
                    x: p.x,
                    y: p.y,
                });
            }
            if !item.target_stage.contains_x(p.x) {
                return Err(ScenarioError::StageMismatch {
                    id: item.id.clone(),
                    x: p.x,
                    stage: item.target_stage,
                });
            }
        }

        for rel in self.reference.iter() {
            let (a, b) = rel.endpoints();
            if !ids.contains(a) || !ids.contains(b) {
                return Err(ScenarioError::UnknownReferenceItem(rel.clone()));
            }
        }

        if !ids.contains(&self.commodity_item) {
            return Err(ScenarioError::UnknownCommodityItem(
                self.commodity_item.clone(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&ScenarioItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Built-in scenario: the value chain of a small tea shop.
    ///
    /// 11 items across all four stages and 12 reference relationships. `power` is
    /// the designated commodity item.
    #[must_use]
    pub fn tea_shop() -> Self {
        use Classification::{Build, Buy, Repurpose};
        use EvolutionStage::{Commodity, Custom, Genesis, Product};

        let items = [
            ("shop_front", "Shop Front", 72.0, 4.0, Product, Some(Build)),
            ("cup_of_tea", "Cup of Tea", 66.0, 16.0, Product, Some(Build)),
            ("signature_blend", "Signature Blend", 14.0, 28.0, Genesis, Some(Build)),
            ("loyalty_app", "Loyalty App", 20.0, 22.0, Genesis, Some(Build)),
            ("tea", "Tea", 70.0, 34.0, Product, Some(Buy)),
            ("staff", "Staff", 38.0, 40.0, Custom, Some(Build)),
            ("hot_water", "Hot Water", 82.0, 48.0, Commodity, Some(Build)),
            ("legacy_till", "Legacy Till", 44.0, 62.0, Custom, Some(Repurpose)),
            ("water", "Water", 90.0, 64.0, Commodity, Some(Buy)),
            ("kettle", "Kettle", 60.0, 70.0, Product, Some(Buy)),
            ("power", "Power", 94.0, 88.0, Commodity, Some(Buy)),
        ]
        .into_iter()
        .map(|(id, name, x, y, stage, class)| ScenarioItem {
            id: ItemId::new(id),
            name: name.to_owned(),
            target_position: MapPoint::new(x, y),
            target_stage: stage,
            target_classification: class,
        })
        .collect();

        let reference = [
            ("shop_front", "cup_of_tea"),
            ("shop_front", "loyalty_app"),
            ("cup_of_tea", "tea"),
            ("cup_of_tea", "hot_water"),
            ("cup_of_tea", "staff"),
            ("cup_of_tea", "signature_blend"),
            ("signature_blend", "tea"),
            ("hot_water", "water"),
            ("hot_water", "kettle"),
            ("kettle", "power"),
            ("staff", "legacy_till"),
            ("loyalty_app", "legacy_till"),
        ]
        .into_iter()
        .filter_map(|(a, b)| Relationship::new(a, b).ok())
        .collect();

        Self {
            name: "Tea Shop".to_owned(),
            items,
            reference,
            commodity_item: ItemId::new("power"),
        }
    }
}
