//! Evaluator for evolution-map exercises.
//!
//! Converts the player's current arrangement (placed and classified items plus
//! declared relationships) into a score in `0..=100` and a set of earned
//! achievements.
//!
//! # Architecture
//!
//! ```text
//! LiveEvaluation (recompute on arrangement events)
//!     ↓ uses
//! MapEvaluator (score, breakdown, achievements)
//!     ↓ uses
//! ScoreComponent × 4 (position, classification, dependency, completion)
//! ```
//!
//! - [`score_component`] - the four independently weighted sub-scores. Each one is
//!   computed directly on its own `0..=weight` scale and the weights sum to 100.
//! - [`map_evaluator`] - sums the components, rounds the total, and evaluates the
//!   achievement predicates.
//! - [`achievement`] - the closed set of achievements.
//! - [`live_evaluator`] - caches the last report per arrangement version and
//!   reports achievements gained or lost between mutations.
//!
//! Everything here is a pure function of its inputs. Nothing mutates the items or
//! relationships it is given, and incomplete input never produces an error: unset
//! fields contribute zero.
//!
//! # Example
//!
//! ```
//! use evomap_engine::{Arrangement, Classification, MapPoint, Scenario};
//! use evomap_evaluator::{achievement::Achievement, map_evaluator::MapEvaluator};
//!
//! let scenario = Scenario::tea_shop();
//! let evaluator = MapEvaluator::from_scenario(&scenario);
//! let mut arrangement = Arrangement::new(&scenario);
//!
//! assert_eq!(evaluator.score(arrangement.items(), arrangement.relationships()), 0);
//!
//! arrangement.place(&"power".into(), MapPoint::new(94.0, 88.0)).unwrap();
//! arrangement.classify(&"power".into(), Some(Classification::Buy)).unwrap();
//!
//! let report = evaluator.evaluate(arrangement.items(), arrangement.relationships());
//! assert!(report.score > 0);
//! assert!(report.is_earned(Achievement::CommodityBuyer));
//! ```

pub mod achievement;
pub mod live_evaluator;
pub mod map_evaluator;
pub mod score_component;

#[cfg(test)]
mod test_util;
