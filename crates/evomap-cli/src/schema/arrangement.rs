use std::collections::BTreeSet;

use evomap_engine::{Arrangement, Classification, ItemId, MapPoint, Scenario};
use serde::{Deserialize, Serialize};

/// On-disk form of a player's map.
///
/// Relationships are plain id pairs so that malformed entries can be reported and
/// skipped instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrangementState {
    #[serde(default)]
    pub items: Vec<ItemState>,
    #[serde(default)]
    pub relationships: Vec<[ItemId; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemState {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<MapPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

impl ArrangementState {
    /// Captures the placed or classified items and every relationship.
    #[must_use]
    pub fn from_arrangement(arrangement: &Arrangement) -> Self {
        let items = arrangement
            .items()
            .iter()
            .filter(|item| item.is_placed() || item.is_classified())
            .map(|item| ItemState {
                id: item.id().clone(),
                position: item.actual_position(),
                classification: item.actual_classification(),
            })
            .collect();
        let relationships = arrangement
            .relationships()
            .iter()
            .map(|rel| {
                let (a, b) = rel.endpoints();
                [a.clone(), b.clone()]
            })
            .collect();
        Self {
            items,
            relationships,
        }
    }

    /// Replays the file onto a fresh arrangement of `scenario`.
    ///
    /// Entries the arrangement rejects are logged and skipped.
    #[must_use]
    pub fn to_arrangement(&self, scenario: &Scenario) -> Arrangement {
        let mut arrangement = Arrangement::new(scenario);
        let mut seen = BTreeSet::new();

        for item in &self.items {
            if !seen.insert(&item.id) {
                tracing::warn!(id = %item.id, "skipping duplicate item entry");
                continue;
            }
            if let Some(position) = item.position
                && let Err(error) = arrangement.place(&item.id, position)
            {
                tracing::warn!(id = %item.id, %error, "skipping item");
                continue;
            }
            if item.classification.is_some()
                && let Err(error) = arrangement.classify(&item.id, item.classification)
            {
                tracing::warn!(id = %item.id, %error, "skipping classification");
            }
        }

        for [a, b] in &self.relationships {
            if let Err(error) = arrangement.connect(a, b) {
                tracing::warn!(first = %a, second = %b, %error, "skipping relationship");
            }
        }

        tracing::debug!(
            placed = arrangement.items().iter().filter(|i| i.is_placed()).count(),
            relationships = arrangement.relationships().len(),
            "arrangement loaded"
        );
        arrangement
    }
}
