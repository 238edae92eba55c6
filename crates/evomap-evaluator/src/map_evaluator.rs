//! Map evaluation: total score and achievements for an arrangement.
//!
//! The [`MapEvaluator`] sums the four [`ScoreComponent`]s and rounds the result to
//! the nearest integer:
//!
//! ```text
//! score = round(position + classification + dependency + completion)   ∈ [0, 100]
//! ```
//!
//! It also evaluates the [`Achievement`] predicates. Both operations are pure and
//! may be called after every change to the arrangement, however incomplete.

use evomap_engine::{
    Classification, EvolutionStage, Item, ItemId, ReferenceTable, Relationship, Scenario,
};
use serde::Serialize;

use crate::{
    achievement::{
        Achievement, AchievementState, DEPENDENCY_MAPPER_MIN_CORRECT, STRATEGIST_MIN_SCORE,
    },
    score_component::{ALL_SCORE_COMPONENTS, EvaluationInput},
};

/// Value of one score component in a [`ScoreBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScore {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: f64,
    pub value: f64,
}

/// Per-component values plus the unrounded and rounded totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ComponentScore>,
    pub total: f64,
    pub score: u8,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&ComponentScore> {
        self.components.iter().find(|c| c.id == id)
    }
}

/// Full result of evaluating an arrangement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub achievements: Vec<AchievementState>,
}

impl EvaluationReport {
    #[must_use]
    pub fn is_earned(&self, achievement: Achievement) -> bool {
        self.achievements
            .iter()
            .any(|s| s.achievement == achievement && s.earned)
    }

    pub fn earned(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.achievements
            .iter()
            .filter(|s| s.earned)
            .map(|s| s.achievement)
    }
}

/// Scores arrangements against one scenario's reference data.
///
/// # Example
///
/// ```
/// use evomap_engine::Scenario;
/// use evomap_evaluator::map_evaluator::MapEvaluator;
///
/// let evaluator = MapEvaluator::from_scenario(&Scenario::tea_shop());
/// assert_eq!(evaluator.score(&[], &[]), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MapEvaluator {
    reference: ReferenceTable,
    commodity_item: ItemId,
}

impl MapEvaluator {
    /// Creates an evaluator.
    ///
    /// # Arguments
    ///
    /// * `reference` - Relationships considered correct
    /// * `commodity_item` - Item checked by [`Achievement::CommodityBuyer`]
    #[must_use]
    pub fn new(reference: ReferenceTable, commodity_item: ItemId) -> Self {
        Self {
            reference,
            commodity_item,
        }
    }

    #[must_use]
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(scenario.reference.clone(), scenario.commodity_item.clone())
    }

    #[must_use]
    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    fn input<'a>(
        &'a self,
        items: &'a [Item],
        relationships: &'a [Relationship],
    ) -> EvaluationInput<'a> {
        EvaluationInput {
            items,
            relationships,
            reference: &self.reference,
        }
    }

    /// Computes every component and the total score.
    #[must_use]
    pub fn breakdown(&self, items: &[Item], relationships: &[Relationship]) -> ScoreBreakdown {
        let input = self.input(items, relationships);
        let components: Vec<_> = ALL_SCORE_COMPONENTS
            .iter()
            .map(|c| ComponentScore {
                id: c.id(),
                name: c.name(),
                weight: c.weight(),
                value: c.evaluate(&input),
            })
            .collect();
        let total = components.iter().map(|c| c.value).sum::<f64>();
        ScoreBreakdown {
            components,
            total,
            score: round_score(total),
        }
    }

    /// Computes the total score in `0..=100`.
    #[must_use]
    pub fn score(&self, items: &[Item], relationships: &[Relationship]) -> u8 {
        self.breakdown(items, relationships).score
    }

    /// Returns whether `achievement` is earned by the given arrangement.
    #[must_use]
    pub fn evaluate_achievement(
        &self,
        achievement: Achievement,
        items: &[Item],
        relationships: &[Relationship],
    ) -> bool {
        self.is_earned(achievement, items, relationships, || {
            self.score(items, relationships)
        })
    }

    /// Evaluates every achievement, in [`Achievement::ALL`] order.
    #[must_use]
    pub fn earned_achievements(
        &self,
        items: &[Item],
        relationships: &[Relationship],
    ) -> Vec<AchievementState> {
        let score = self.score(items, relationships);
        self.achievement_states(items, relationships, score)
    }

    /// Computes the breakdown and every achievement in one pass.
    #[must_use]
    pub fn evaluate(&self, items: &[Item], relationships: &[Relationship]) -> EvaluationReport {
        let breakdown = self.breakdown(items, relationships);
        let achievements = self.achievement_states(items, relationships, breakdown.score);
        tracing::debug!(
            score = breakdown.score,
            total = breakdown.total,
            items = items.len(),
            placed = items.iter().filter(|i| i.is_placed()).count(),
            classified = items.iter().filter(|i| i.is_classified()).count(),
            relationships = relationships.len(),
            "evaluated arrangement"
        );
        EvaluationReport {
            score: breakdown.score,
            breakdown,
            achievements,
        }
    }

    fn achievement_states(
        &self,
        items: &[Item],
        relationships: &[Relationship],
        score: u8,
    ) -> Vec<AchievementState> {
        Achievement::ALL
            .into_iter()
            .map(|achievement| AchievementState {
                achievement,
                earned: self.is_earned(achievement, items, relationships, || score),
            })
            .collect()
    }

    fn is_earned(
        &self,
        achievement: Achievement,
        items: &[Item],
        relationships: &[Relationship],
        score: impl FnOnce() -> u8,
    ) -> bool {
        match achievement {
            Achievement::CommodityBuyer => items
                .iter()
                .find(|item| *item.id() == self.commodity_item)
                .is_some_and(|item| {
                    item.is_placed_in(EvolutionStage::Commodity)
                        && item.actual_classification() == Some(Classification::Buy)
                }),
            Achievement::GenesisBuilder => items
                .iter()
                .filter(|item| item.target_stage() == EvolutionStage::Genesis)
                .all(|item| {
                    item.is_placed_in(EvolutionStage::Genesis)
                        && item.actual_classification() == Some(Classification::Build)
                }),
            Achievement::Repurposer => items
                .iter()
                .find(|item| item.target_classification() == Some(Classification::Repurpose))
                .is_some_and(|item| {
                    item.actual_classification() == Some(Classification::Repurpose)
                }),
            Achievement::Strategist => score() >= STRATEGIST_MIN_SCORE,
            Achievement::DependencyMapper => {
                self.reference.count_matches(relationships) >= DEPENDENCY_MAPPER_MIN_CORRECT
            }
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_score(total: f64) -> u8 {
    if total.is_nan() {
        return 0;
    }
    total.round().clamp(0.0, 100.0) as u8
}
