//! Event-driven re-evaluation of a changing arrangement.
//!
//! The presentation layer owns an [`Arrangement`] and mutates it in response to user
//! input. Each mutation returns an [`ArrangementEvent`]; passing that event to
//! [`LiveEvaluation::observe`] recomputes the derived report and tells the caller
//! what changed (score delta, achievements gained or lost).
//!
//! Recomputation is keyed on [`Arrangement::version`], which is unique across
//! arrangements and clones: observing the same version twice returns `None` without
//! evaluating again.

use evomap_engine::{Arrangement, ArrangementEvent, Scenario};

use crate::{
    achievement::Achievement,
    map_evaluator::{EvaluationReport, MapEvaluator},
};

/// Difference between two consecutive evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationUpdate {
    pub revision: u64,
    pub previous_score: Option<u8>,
    pub score: u8,
    pub gained: Vec<Achievement>,
    pub lost: Vec<Achievement>,
}

impl EvaluationUpdate {
    #[must_use]
    pub fn score_changed(&self) -> bool {
        self.previous_score != Some(self.score)
    }
}

/// Cached evaluation of an arrangement, refreshed on mutation events.
///
/// # Example
///
/// ```
/// use evomap_engine::{Arrangement, Classification, MapPoint, Scenario};
/// use evomap_evaluator::{achievement::Achievement, live_evaluator::LiveEvaluation};
///
/// let scenario = Scenario::tea_shop();
/// let mut arrangement = Arrangement::new(&scenario);
/// let mut live = LiveEvaluation::from_scenario(&scenario);
///
/// let event = arrangement
///     .classify(&"legacy_till".into(), Some(Classification::Repurpose))
///     .unwrap();
/// let update = live.observe(&arrangement, &event).unwrap();
/// assert_eq!(update.gained, [Achievement::Repurposer]);
/// ```
#[derive(Debug, Clone)]
pub struct LiveEvaluation {
    evaluator: MapEvaluator,
    version: Option<u64>,
    report: Option<EvaluationReport>,
}

impl LiveEvaluation {
    #[must_use]
    pub fn new(evaluator: MapEvaluator) -> Self {
        Self {
            evaluator,
            version: None,
            report: None,
        }
    }

    #[must_use]
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(MapEvaluator::from_scenario(scenario))
    }

    #[must_use]
    pub fn evaluator(&self) -> &MapEvaluator {
        &self.evaluator
    }

    /// Latest report, if any evaluation has happened yet.
    #[must_use]
    pub fn report(&self) -> Option<&EvaluationReport> {
        self.report.as_ref()
    }

    /// Handles a mutation event emitted by `arrangement`.
    pub fn observe(
        &mut self,
        arrangement: &Arrangement,
        event: &ArrangementEvent,
    ) -> Option<EvaluationUpdate> {
        tracing::trace!(?event, revision = arrangement.revision(), "arrangement changed");
        self.refresh(arrangement)
    }

    /// Re-evaluates `arrangement` unless this exact state was already evaluated.
    pub fn refresh(&mut self, arrangement: &Arrangement) -> Option<EvaluationUpdate> {
        let version = arrangement.version();
        if self.version == Some(version) {
            return None;
        }

        let report = self
            .evaluator
            .evaluate(arrangement.items(), arrangement.relationships());
        let previous = self.report.replace(report);
        self.version = Some(version);

        let current = self.report.as_ref()?;
        let was_earned =
            |a: Achievement| previous.as_ref().is_some_and(|prev| prev.is_earned(a));
        let gained: Vec<_> = current.earned().filter(|a| !was_earned(*a)).collect();
        let lost: Vec<_> = Achievement::ALL
            .into_iter()
            .filter(|a| was_earned(*a) && !current.is_earned(*a))
            .collect();

        for achievement in &gained {
            tracing::info!(achievement = achievement.id(), "achievement earned");
        }
        for achievement in &lost {
            tracing::info!(achievement = achievement.id(), "achievement lost");
        }

        Some(EvaluationUpdate {
            revision: arrangement.revision(),
            previous_score: previous.map(|prev| prev.score),
            score: current.score,
            gained,
            lost,
        })
    }
}

#[cfg(test)]
mod tests {
    use evomap_engine::{Classification, MapPoint};

    use super::*;

    #[test]
    fn test_first_refresh_evaluates() {
        let scenario = Scenario::tea_shop();
        let arrangement = Arrangement::new(&scenario);
        let mut live = LiveEvaluation::from_scenario(&scenario);
        assert!(live.report().is_none());

        let update = live.refresh(&arrangement).unwrap();
        assert_eq!(update.revision, 0);
        assert_eq!(update.previous_score, None);
        assert_eq!(update.score, 0);
        assert!(update.score_changed());
        assert!(update.gained.is_empty());
        assert_eq!(live.report().unwrap().score, 0);
    }

    #[test]
    fn test_same_revision_is_not_recomputed() {
        let scenario = Scenario::tea_shop();
        let arrangement = Arrangement::new(&scenario);
        let mut live = LiveEvaluation::from_scenario(&scenario);
        assert!(live.refresh(&arrangement).is_some());
        assert!(live.refresh(&arrangement).is_none());
    }

    #[test]
    fn test_diverged_clones_are_evaluated_separately() {
        let scenario = Scenario::tea_shop();
        let fresh = Arrangement::new(&scenario);
        let mut a = fresh.clone();
        let mut b = fresh.clone();
        let mut live = LiveEvaluation::from_scenario(&scenario);
        let power = "power".into();

        a.place(&power, MapPoint::new(0.0, 0.0)).unwrap();
        assert!(live.refresh(&a).is_some());

        b.classify(&power, Some(Classification::Buy)).unwrap();
        assert_eq!(a.revision(), b.revision());
        let update = live.refresh(&b).unwrap();
        let expected = live.evaluator().score(b.items(), b.relationships());
        assert_eq!(update.score, expected);
        assert_eq!(live.report().unwrap().score, expected);
        assert_ne!(update.previous_score, Some(expected));
    }

    #[test]
    fn test_gained_and_lost_achievements() {
        let scenario = Scenario::tea_shop();
        let mut arrangement = Arrangement::new(&scenario);
        let mut live = LiveEvaluation::from_scenario(&scenario);
        live.refresh(&arrangement);

        let power = "power".into();
        let event = arrangement.place(&power, MapPoint::new(90.0, 90.0)).unwrap();
        let update = live.observe(&arrangement, &event).unwrap();
        assert!(update.gained.is_empty());
        assert!(update.score > 0);

        let event = arrangement
            .classify(&power, Some(Classification::Buy))
            .unwrap();
        let update = live.observe(&arrangement, &event).unwrap();
        assert_eq!(update.gained, [Achievement::CommodityBuyer]);
        assert!(update.lost.is_empty());

        let event = arrangement.place(&power, MapPoint::new(10.0, 90.0)).unwrap();
        let update = live.observe(&arrangement, &event).unwrap();
        assert!(update.gained.is_empty());
        assert_eq!(update.lost, [Achievement::CommodityBuyer]);
        assert!(!live.report().unwrap().is_earned(Achievement::CommodityBuyer));
    }

    #[test]
    fn test_reset_drops_score() {
        let scenario = Scenario::tea_shop();
        let mut arrangement = Arrangement::new(&scenario);
        let mut live = LiveEvaluation::from_scenario(&scenario);
        for item in &scenario.items {
            let event = arrangement.place(&item.id, item.target_position).unwrap();
            live.observe(&arrangement, &event);
        }
        assert_eq!(live.report().unwrap().score, 38);

        let event = arrangement.reset();
        let update = live.observe(&arrangement, &event).unwrap();
        assert_eq!(update.previous_score, Some(38));
        assert_eq!(update.score, 0);
    }
}
