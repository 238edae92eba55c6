use std::sync::atomic::{AtomicU64, Ordering};

use crate::{ArrangementError, Classification, Item, ItemId, MapPoint, Relationship, Scenario};

/// Mutation applied to an [`Arrangement`].
///
/// Every successful mutation returns one of these so the owner can trigger
/// recomputation of derived values (score, achievements, connector routes).
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum ArrangementEvent {
    ItemPlaced { id: ItemId, position: MapPoint },
    ItemUnplaced { id: ItemId },
    ItemClassified {
        id: ItemId,
        classification: Option<Classification>,
    },
    RelationshipAdded(Relationship),
    RelationshipRemoved(Relationship),
    Reset,
}

/// The player's current map: every scenario item with its actual state, and the
/// relationships declared so far.
///
/// This is the single owner of mutable state. Relationship uniqueness is enforced
/// here, so consumers can score the collections as-is.
///
/// # Example
///
/// ```
/// use evomap_engine::{Arrangement, Classification, MapPoint, Scenario};
///
/// let scenario = Scenario::tea_shop();
/// let mut arrangement = Arrangement::new(&scenario);
///
/// arrangement.place(&"power".into(), MapPoint::new(95.0, 90.0)).unwrap();
/// arrangement.classify(&"power".into(), Some(Classification::Buy)).unwrap();
/// arrangement.connect(&"kettle".into(), &"power".into()).unwrap();
///
/// assert!(arrangement.connect(&"power".into(), &"kettle".into()).is_err());
/// assert_eq!(arrangement.revision(), 3);
/// ```
#[derive(Debug)]
pub struct Arrangement {
    items: Vec<Item>,
    relationships: Vec<Relationship>,
    revision: u64,
    version: u64,
}

/// Source of [`Arrangement::version`] stamps, shared by every arrangement.
static NEXT_VERSION: AtomicU64 = AtomicU64::new(0);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

impl Clone for Arrangement {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            relationships: self.relationships.clone(),
            revision: self.revision,
            version: next_version(),
        }
    }
}

impl Arrangement {
    /// Creates an arrangement with every scenario item unplaced and unclassified.
    #[must_use]
    pub fn new(scenario: &Scenario) -> Self {
        Self::from_items(scenario.items.iter().map(|item| item.to_item()).collect())
    }

    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items,
            relationships: vec![],
            revision: 0,
            version: next_version(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Counter incremented by every successful mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stamp that is unique across all arrangements in the process.
    ///
    /// It changes on every successful mutation and a clone gets its own stamp, so
    /// two arrangements with different contents never share a version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn item_mut(&mut self, id: &ItemId) -> Result<&mut Item, ArrangementError> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| ArrangementError::UnknownItem(id.clone()))
    }

    fn commit(&mut self, event: ArrangementEvent) -> ArrangementEvent {
        self.revision += 1;
        self.version = next_version();
        event
    }

    /// Places an item, clamping the position into the map.
    pub fn place(
        &mut self,
        id: &ItemId,
        position: MapPoint,
    ) -> Result<ArrangementEvent, ArrangementError> {
        let position = position.clamped();
        self.item_mut(id)?.set_actual_position(Some(position));
        Ok(self.commit(ArrangementEvent::ItemPlaced {
            id: id.clone(),
            position,
        }))
    }

    pub fn unplace(&mut self, id: &ItemId) -> Result<ArrangementEvent, ArrangementError> {
        self.item_mut(id)?.set_actual_position(None);
        Ok(self.commit(ArrangementEvent::ItemUnplaced { id: id.clone() }))
    }

    /// Sets or clears the classification of an item.
    pub fn classify(
        &mut self,
        id: &ItemId,
        classification: Option<Classification>,
    ) -> Result<ArrangementEvent, ArrangementError> {
        self.item_mut(id)?
            .set_actual_classification(classification);
        Ok(self.commit(ArrangementEvent::ItemClassified {
            id: id.clone(),
            classification,
        }))
    }

    /// Declares a relationship between two items.
    ///
    /// Fails if either item is unknown, if both ids are the same, or if the unordered
    /// pair is already declared.
    pub fn connect(
        &mut self,
        a: &ItemId,
        b: &ItemId,
    ) -> Result<ArrangementEvent, ArrangementError> {
        for id in [a, b] {
            if self.item(id).is_none() {
                return Err(ArrangementError::UnknownItem(id.clone()));
            }
        }
        let relationship = Relationship::new(a.clone(), b.clone())?;
        if self.relationships.contains(&relationship) {
            return Err(ArrangementError::DuplicateRelationship(relationship));
        }
        self.relationships.push(relationship.clone());
        Ok(self.commit(ArrangementEvent::RelationshipAdded(relationship)))
    }

    pub fn disconnect(
        &mut self,
        a: &ItemId,
        b: &ItemId,
    ) -> Result<ArrangementEvent, ArrangementError> {
        let relationship = Relationship::new(a.clone(), b.clone())?;
        let index = self
            .relationships
            .iter()
            .position(|rel| *rel == relationship)
            .ok_or_else(|| ArrangementError::MissingRelationship(relationship.clone()))?;
        self.relationships.remove(index);
        Ok(self.commit(ArrangementEvent::RelationshipRemoved(relationship)))
    }

    /// Clears every placement, classification and relationship.
    pub fn reset(&mut self) -> ArrangementEvent {
        for item in &mut self.items {
            item.set_actual_position(None);
            item.set_actual_classification(None);
        }
        self.relationships.clear();
        self.commit(ArrangementEvent::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RelationshipError;

    fn id(s: &str) -> ItemId {
        ItemId::new(s)
    }

    fn arrangement() -> Arrangement {
        Arrangement::new(&Scenario::tea_shop())
    }

    #[test]
    fn test_initial_state() {
        let arrangement = arrangement();
        assert_eq!(arrangement.items().len(), 11);
        assert!(arrangement.items().iter().all(|item| !item.is_placed()));
        assert!(arrangement.items().iter().all(|item| !item.is_classified()));
        assert!(arrangement.relationships().is_empty());
        assert_eq!(arrangement.revision(), 0);
    }

    #[test]
    fn test_place_clamps_position() {
        let mut arrangement = arrangement();
        let event = arrangement
            .place(&id("tea"), MapPoint::new(130.0, -4.0))
            .unwrap();
        assert_eq!(
            event,
            ArrangementEvent::ItemPlaced {
                id: id("tea"),
                position: MapPoint::new(100.0, 0.0),
            }
        );
        assert_eq!(
            arrangement.item(&id("tea")).unwrap().actual_position(),
            Some(MapPoint::new(100.0, 0.0))
        );

        arrangement.unplace(&id("tea")).unwrap();
        assert!(!arrangement.item(&id("tea")).unwrap().is_placed());
        assert_eq!(arrangement.revision(), 2);
    }

    #[test]
    fn test_classify_and_clear() {
        let mut arrangement = arrangement();
        arrangement
            .classify(&id("staff"), Some(Classification::Build))
            .unwrap();
        assert_eq!(
            arrangement.item(&id("staff")).unwrap().actual_classification(),
            Some(Classification::Build)
        );
        arrangement.classify(&id("staff"), None).unwrap();
        assert!(!arrangement.item(&id("staff")).unwrap().is_classified());
    }

    #[test]
    fn test_unknown_item_does_not_bump_revision() {
        let mut arrangement = arrangement();
        assert_eq!(
            arrangement.place(&id("milk"), MapPoint::new(1.0, 1.0)),
            Err(ArrangementError::UnknownItem(id("milk")))
        );
        assert_eq!(
            arrangement.connect(&id("tea"), &id("milk")),
            Err(ArrangementError::UnknownItem(id("milk")))
        );
        assert_eq!(arrangement.revision(), 0);
    }

    #[test]
    fn test_connect_rejects_duplicates_in_either_order() {
        let mut arrangement = arrangement();
        let event = arrangement.connect(&id("tea"), &id("cup_of_tea")).unwrap();
        assert!(event.is_relationship_added());

        let err = arrangement
            .connect(&id("cup_of_tea"), &id("tea"))
            .unwrap_err();
        assert!(matches!(err, ArrangementError::DuplicateRelationship(_)));
        assert_eq!(arrangement.relationships().len(), 1);
        assert_eq!(arrangement.revision(), 1);
    }

    #[test]
    fn test_connect_rejects_self_loop() {
        let mut arrangement = arrangement();
        assert_eq!(
            arrangement.connect(&id("tea"), &id("tea")),
            Err(ArrangementError::InvalidRelationship(
                RelationshipError::SelfLoop(id("tea"))
            ))
        );
    }

    #[test]
    fn test_disconnect() {
        let mut arrangement = arrangement();
        arrangement.connect(&id("water"), &id("hot_water")).unwrap();
        arrangement.connect(&id("kettle"), &id("power")).unwrap();

        let event = arrangement.disconnect(&id("hot_water"), &id("water")).unwrap();
        assert!(event.is_relationship_removed());
        assert_eq!(arrangement.relationships().len(), 1);

        assert!(matches!(
            arrangement.disconnect(&id("hot_water"), &id("water")),
            Err(ArrangementError::MissingRelationship(_))
        ));
    }

    #[test]
    fn test_versions_never_collide() {
        let mut original = arrangement();
        let other = arrangement();
        assert_ne!(original.version(), other.version());

        let before = original.version();
        assert!(original.place(&id("milk"), MapPoint::new(1.0, 1.0)).is_err());
        assert_eq!(original.version(), before);

        let mut a = original.clone();
        let mut b = original.clone();
        assert_ne!(a.version(), original.version());
        assert_ne!(a.version(), b.version());
        assert_eq!(a.revision(), original.revision());

        a.place(&id("power"), MapPoint::new(0.0, 0.0)).unwrap();
        b.classify(&id("power"), Some(Classification::Buy)).unwrap();
        assert_eq!(a.revision(), b.revision());
        assert_ne!(a.version(), b.version());
        assert_ne!(a.version(), before);
    }

    #[test]
    fn test_reset() {
        let mut arrangement = arrangement();
        arrangement.place(&id("tea"), MapPoint::new(70.0, 30.0)).unwrap();
        arrangement
            .classify(&id("tea"), Some(Classification::Buy))
            .unwrap();
        arrangement.connect(&id("tea"), &id("cup_of_tea")).unwrap();

        assert_eq!(arrangement.reset(), ArrangementEvent::Reset);
        assert!(arrangement.items().iter().all(|item| !item.is_placed()));
        assert!(arrangement.items().iter().all(|item| !item.is_classified()));
        assert!(arrangement.relationships().is_empty());
        assert_eq!(arrangement.revision(), 4);
    }
}
