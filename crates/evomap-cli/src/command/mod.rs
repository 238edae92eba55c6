use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use self::{edges::EdgesArg, route::RouteArg, scenario::ScenarioArg, score::ScoreArg};

mod edges;
mod route;
mod scenario;
mod score;

/// Environment variable holding the log filter, in `tracing` directive syntax.
const LOG_ENV_VAR: &str = "EVOMAP_LOG";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug output from every evomap crate
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score an arrangement against a scenario
    Score(#[clap(flatten)] ScoreArg),
    /// Route a single connector between two box centers
    Route(#[clap(flatten)] RouteArg),
    /// Route every relationship of an arrangement on a pixel canvas
    Edges(#[clap(flatten)] EdgesArg),
    /// Write a scenario as JSON
    Scenario(#[clap(flatten)] ScenarioArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose)?;
    match &args.mode {
        Mode::Score(arg) => score::run(arg)?,
        Mode::Route(arg) => route::run(arg)?,
        Mode::Edges(arg) => edges::run(arg)?,
        Mode::Scenario(arg) => scenario::run(arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let mut filter = EnvFilter::builder()
        .with_default_directive("evomap=info".parse()?)
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();
    if verbose {
        filter = filter.add_directive("evomap=debug".parse()?);
    }
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_route_arguments() {
        let args =
            CommandArgs::try_parse_from(["evomap", "-v", "route", "--from", "0,0", "--to", "100,0"])
                .unwrap();
        assert!(args.verbose);
        assert!(matches!(args.mode, Mode::Route(_)));
    }

    #[test]
    fn test_score_requires_arrangement() {
        assert!(CommandArgs::try_parse_from(["evomap", "score"]).is_err());
    }
}
