//! Achievements a player can earn on the map.
//!
//! The set is closed: [`Achievement`] lists every achievement and
//! [`MapEvaluator::evaluate_achievement`](crate::map_evaluator::MapEvaluator::evaluate_achievement)
//! dispatches on it. Achievements carry no state. Whether one is earned is
//! recomputed from the current items and relationships on every call, so an
//! achievement can be lost again when the arrangement changes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum score for [`Achievement::Strategist`].
pub const STRATEGIST_MIN_SCORE: u8 = 70;

/// Minimum number of correct relationships for [`Achievement::DependencyMapper`].
pub const DEPENDENCY_MAPPER_MIN_CORRECT: usize = 5;

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
)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// The scenario's commodity item is placed in the commodity stage and bought.
    #[display("Commodity Buyer")]
    CommodityBuyer,
    /// Every genesis-stage item is placed in the genesis stage and built.
    #[display("Genesis Builder")]
    GenesisBuilder,
    /// The item meant to be repurposed is classified as repurpose.
    #[display("Repurposer")]
    Repurposer,
    /// Total score of at least [`STRATEGIST_MIN_SCORE`].
    #[display("Strategist")]
    Strategist,
    /// At least [`DEPENDENCY_MAPPER_MIN_CORRECT`] correct relationships declared.
    #[display("Dependency Mapper")]
    DependencyMapper,
}

impl Achievement {
    pub const LEN: usize = 5;

    pub const ALL: [Self; Self::LEN] = [
        Self::CommodityBuyer,
        Self::GenesisBuilder,
        Self::Repurposer,
        Self::Strategist,
        Self::DependencyMapper,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::CommodityBuyer => "commodity_buyer",
            Self::GenesisBuilder => "genesis_builder",
            Self::Repurposer => "repurposer",
            Self::Strategist => "strategist",
            Self::DependencyMapper => "dependency_mapper",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CommodityBuyer => "Commodity Buyer",
            Self::GenesisBuilder => "Genesis Builder",
            Self::Repurposer => "Repurposer",
            Self::Strategist => "Strategist",
            Self::DependencyMapper => "Dependency Mapper",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CommodityBuyer => "Buy the commodity component instead of building it",
            Self::GenesisBuilder => "Build every novel component in-house",
            Self::Repurposer => "Spot the legacy asset worth repurposing",
            Self::Strategist => "Reach a score of 70 or more",
            Self::DependencyMapper => "Map at least 5 correct dependencies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown achievement id `{id}`")]
pub struct UnknownAchievementError {
    id: String,
}

impl FromStr for Achievement {
    type Err = UnknownAchievementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| UnknownAchievementError { id: s.to_owned() })
    }
}

/// An achievement together with whether it is currently earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementState {
    pub achievement: Achievement,
    pub earned: bool,
}
