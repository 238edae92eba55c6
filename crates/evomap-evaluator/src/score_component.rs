//! Weighted sub-scores of the map evaluation.
//!
//! Each [`ScoreComponent`] produces a value in `[0.0, weight]`. The four components
//! in [`ALL_SCORE_COMPONENTS`] have weights summing to 100:
//!
//! | Component                  | Weight | Measures                                   |
//! |----------------------------|--------|--------------------------------------------|
//! | [`PositionAccuracy`]       | 30     | distance of placed items from their target |
//! | [`ClassificationAccuracy`] | 30     | share of correct sourcing decisions        |
//! | [`DependencyAccuracy`]     | 25     | declared relationships found in reference  |
//! | [`CompletionBonus`]        | 15     | how much of the map has been filled in     |
//!
//! Components only look at the part of the input they need and treat unset fields
//! as "not yet answered": an unplaced item is ignored by the position component, an
//! unclassified item by the classification component.

use std::fmt;

use evomap_engine::{Item, MAX_MAP_DISTANCE, ReferenceTable, Relationship};

/// Snapshot handed to every component.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationInput<'a> {
    pub items: &'a [Item],
    pub relationships: &'a [Relationship],
    pub reference: &'a ReferenceTable,
}

/// One weighted part of the total score.
pub trait ScoreComponent: fmt::Debug + Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    /// Maximum value [`ScoreComponent::evaluate`] can return.
    fn weight(&self) -> f64;

    /// Computes the component value in `[0.0, self.weight()]`.
    #[must_use]
    fn evaluate(&self, input: &EvaluationInput<'_>) -> f64;
}

pub const ALL_SCORE_COMPONENTS: [&dyn ScoreComponent; 4] = [
    &PositionAccuracy,
    &ClassificationAccuracy,
    &DependencyAccuracy,
    &CompletionBonus,
];

/// `numerator / denominator`, or 0 when the denominator is 0.
#[expect(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// Average placement quality over placed items.
///
/// Per item: `(1 - d)²` where `d` is the distance to the target divided by the map
/// diagonal, clamped to `[0, 1]`. The quadratic decay rewards near-exact placement
/// much more than rough placement. Unplaced items are skipped entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionAccuracy;

impl PositionAccuracy {
    pub const WEIGHT: f64 = 30.0;

    /// Quality of a single placement in `[0.0, 1.0]`.
    #[must_use]
    pub fn placement_quality(item: &Item) -> Option<f64> {
        let actual = item.actual_position()?;
        let normalized =
            (actual.distance(item.target_position()) / MAX_MAP_DISTANCE).clamp(0.0, 1.0);
        Some((1.0 - normalized).powi(2))
    }
}

impl ScoreComponent for PositionAccuracy {
    fn id(&self) -> &'static str {
        "position"
    }

    fn name(&self) -> &'static str {
        "Position Accuracy"
    }

    fn weight(&self) -> f64 {
        Self::WEIGHT
    }

    #[expect(clippy::cast_precision_loss)]
    fn evaluate(&self, input: &EvaluationInput<'_>) -> f64 {
        let (sum, count) = input
            .items
            .iter()
            .filter_map(Self::placement_quality)
            .fold((0.0, 0_usize), |(sum, count), q| (sum + q, count + 1));
        if count == 0 {
            return 0.0;
        }
        sum / count as f64 * Self::WEIGHT
    }
}

/// Share of classified items whose classification matches the target.
///
/// Items without a classification are left out of the denominator. An item with no
/// target classification counts as wrong once it is classified.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationAccuracy;

impl ClassificationAccuracy {
    pub const WEIGHT: f64 = 30.0;
}

impl ScoreComponent for ClassificationAccuracy {
    fn id(&self) -> &'static str {
        "classification"
    }

    fn name(&self) -> &'static str {
        "Classification Accuracy"
    }

    fn weight(&self) -> f64 {
        Self::WEIGHT
    }

    fn evaluate(&self, input: &EvaluationInput<'_>) -> f64 {
        let classified = input.items.iter().filter(|item| item.is_classified());
        let (correct, total) = classified.fold((0, 0), |(correct, total), item| {
            let hit = item.actual_classification() == item.target_classification();
            (correct + usize::from(hit), total + 1)
        });
        ratio(correct, total) * Self::WEIGHT
    }
}

/// Correct relationships over `max(declared, reference size)`.
///
/// Declaring fewer relationships than the reference contains caps the result, and
/// declaring many wrong ones dilutes it. No relationships at all yields exactly 0.
/// The collection is scored as given; duplicates are the caller's concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyAccuracy;

impl DependencyAccuracy {
    pub const WEIGHT: f64 = 25.0;
}

impl ScoreComponent for DependencyAccuracy {
    fn id(&self) -> &'static str {
        "dependency"
    }

    fn name(&self) -> &'static str {
        "Dependency Accuracy"
    }

    fn weight(&self) -> f64 {
        Self::WEIGHT
    }

    fn evaluate(&self, input: &EvaluationInput<'_>) -> f64 {
        let declared = input.relationships.len();
        if declared == 0 {
            return 0.0;
        }
        let correct = input.reference.count_matches(input.relationships);
        ratio(correct, declared.max(input.reference.len())) * Self::WEIGHT
    }
}

/// Bonus for filling in the whole map.
///
/// Full weight once every item is placed and classified, otherwise the mean of the
/// placed and classified ratios times the weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionBonus;

impl CompletionBonus {
    pub const WEIGHT: f64 = 15.0;
}

impl ScoreComponent for CompletionBonus {
    fn id(&self) -> &'static str {
        "completion"
    }

    fn name(&self) -> &'static str {
        "Completion Bonus"
    }

    fn weight(&self) -> f64 {
        Self::WEIGHT
    }

    fn evaluate(&self, input: &EvaluationInput<'_>) -> f64 {
        let total = input.items.len();
        if total == 0 {
            return 0.0;
        }
        if input.items.iter().all(Item::is_complete) {
            return Self::WEIGHT;
        }
        let placed = input.items.iter().filter(|item| item.is_placed()).count();
        let classified = input.items.iter().filter(|item| item.is_classified()).count();
        (ratio(placed, total) + ratio(classified, total)) / 2.0 * Self::WEIGHT
    }
}
