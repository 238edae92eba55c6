use chrono::{DateTime, Utc};
use evomap_engine::ItemId;
use evomap_evaluator::map_evaluator::EvaluationReport;
use evomap_router::{CanvasTransform, EdgeRouter, RoutedEdge};
use serde::Serialize;

/// Output of `evomap score`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub scenario: String,
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: EvaluationReport,
}

/// Output of `evomap edges`.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeLayout {
    pub scenario: String,
    pub canvas: CanvasTransform,
    pub router: EdgeRouter,
    pub edges: Vec<LaidOutEdge>,
    /// Relationships left out because an endpoint is not placed.
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaidOutEdge {
    pub source: ItemId,
    pub target: ItemId,
    #[serde(flatten)]
    pub route: RoutedEdge,
}
