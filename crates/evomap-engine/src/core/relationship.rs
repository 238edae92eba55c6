use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use super::item::ItemId;
use crate::RelationshipError;

/// An undirected connection between two distinct items.
///
/// The endpoints are stored in sorted order, so a relationship between `a` and `b`
/// is equal to (and hashes like) one between `b` and `a`.
///
/// Serialized as a two-element array `["a", "b"]`.
///
/// # Example
///
/// ```
/// use evomap_engine::Relationship;
///
/// let ab = Relationship::new("tea", "cup_of_tea").unwrap();
/// let ba = Relationship::new("cup_of_tea", "tea").unwrap();
/// assert_eq!(ab, ba);
/// assert!(Relationship::new("tea", "tea").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "[ItemId; 2]")]
pub struct Relationship {
    first: ItemId,
    second: ItemId,
}

impl Relationship {
    pub fn new(a: impl Into<ItemId>, b: impl Into<ItemId>) -> Result<Self, RelationshipError> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(RelationshipError::SelfLoop(a));
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { first, second })
    }

    /// Endpoints in canonical order.
    #[must_use]
    pub fn endpoints(&self) -> (&ItemId, &ItemId) {
        (&self.first, &self.second)
    }

    #[must_use]
    pub fn involves(&self, id: &ItemId) -> bool {
        self.first == *id || self.second == *id
    }

    /// Order-insensitive key identifying this relationship, e.g. `"cup_of_tea--tea"`.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--{}", self.first, self.second)
    }
}

impl From<Relationship> for [ItemId; 2] {
    fn from(rel: Relationship) -> Self {
        [rel.first, rel.second]
    }
}

impl<'de> Deserialize<'de> for Relationship {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [a, b] = <[ItemId; 2]>::deserialize(deserializer)?;
        Relationship::new(a, b).map_err(serde::de::Error::custom)
    }
}

/// The set of relationships considered logically correct for a scenario.
///
/// Duplicate pairs collapse on construction, so [`ReferenceTable::len`] is the number
/// of distinct correct relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    pairs: BTreeSet<Relationship>,
}

impl ReferenceTable {
    #[must_use]
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = Relationship>,
    {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, relationship: &Relationship) -> bool {
        self.pairs.contains(relationship)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> + '_ {
        self.pairs.iter()
    }

    /// Counts how many of `relationships` appear in this table.
    ///
    /// Every entry is counted, so a repeated correct pair counts once per occurrence.
    #[must_use]
    pub fn count_matches<'a, I>(&self, relationships: I) -> usize
    where
        I: IntoIterator<Item = &'a Relationship>,
    {
        relationships
            .into_iter()
            .filter(|rel| self.contains(rel))
            .count()
    }
}

impl FromIterator<Relationship> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = Relationship>>(iter: I) -> Self {
        Self::new(iter)
    }
}
