use std::path::PathBuf;

use chrono::Utc;
use evomap_engine::{Arrangement, Scenario};
use evomap_evaluator::map_evaluator::MapEvaluator;

use crate::{
    schema::{arrangement::ArrangementState, report::ScoreReport},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Arrangement JSON file to score
    #[arg(long)]
    arrangement: PathBuf,
    /// Scenario JSON file (defaults to the built-in tea shop)
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let ScoreArg {
        arrangement,
        scenario,
        output,
    } = arg;
    let scenario = util::load_scenario(scenario.as_deref())?;
    let state: ArrangementState = util::read_json_file("arrangement", arrangement)?;
    let arrangement = state.to_arrangement(&scenario);

    let report = score(&scenario, &arrangement);
    tracing::info!(
        scenario = %report.scenario,
        score = report.report.score,
        earned = report.report.earned().count(),
        "arrangement scored"
    );
    Output::save_json(&report, output.clone())
}

fn score(scenario: &Scenario, arrangement: &Arrangement) -> ScoreReport {
    let evaluator = MapEvaluator::from_scenario(scenario);
    ScoreReport {
        scenario: scenario.name.clone(),
        evaluated_at: Utc::now(),
        report: evaluator.evaluate(arrangement.items(), arrangement.relationships()),
    }
}
