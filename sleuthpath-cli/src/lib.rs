//! Command-line interface for planning and reviewing SleuthPath
//! investigations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod input;
mod output;
mod plan;
mod report;

pub use error::CliError;

use plan::{PlanArgs, run_plan};
use report::{CluesArgs, ExploreArgs, RankArgs, run_clues, run_explore, run_rank};

const ARG_PLAN_BUDGET: &str = "budget";
const ARG_ORIGIN: &str = "origin";
const ARG_DESTINATION: &str = "destination";
const ARG_SCENARIO: &str = "scenario";
const ARG_MAX_EXPANSIONS: &str = "max-expansions";
const ENV_PLAN_BUDGET: &str = "SLEUTHPATH_CMDS_PLAN_BUDGET";

/// Run the SleuthPath CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Explore(args) => run_explore(args),
        Command::Rank(args) => run_rank(args),
        Command::Clues(args) => run_clues(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sleuthpath",
    about = "Plan and review investigation walks through a building",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the best walk within a time budget.
    Plan(PlanArgs),
    /// Sweep the building breadth-first and report what is found.
    Explore(ExploreArgs),
    /// Rank suspects over every clue.
    Rank(RankArgs),
    /// Show the clues and leading suspect per location.
    Clues(CluesArgs),
}

#[cfg(test)]
mod tests;
