use std::path::PathBuf;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScenarioArg {
    /// Scenario file to validate and re-emit (defaults to the built-in tea shop)
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScenarioArg) -> anyhow::Result<()> {
    let scenario = util::load_scenario(arg.scenario.as_deref())?;
    tracing::info!(
        name = %scenario.name,
        items = scenario.items.len(),
        reference = scenario.reference.len(),
        "scenario is valid"
    );
    Output::save_json(&scenario, arg.output.clone())
}
