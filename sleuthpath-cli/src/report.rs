//! Read-only reports over a scenario: exploration, suspect ranking and the
//! per-location clue view.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sleuthpath_core::{
    Clue, Location, Minutes, Scenario, SuspectScore, explore, leading_suspect, rank,
    shortest_paths,
};
use std::io::Write;

use crate::input::{load_scenario, require_existing};
use crate::output::write_json;
use crate::{ARG_DESTINATION, ARG_ORIGIN, ARG_SCENARIO, CliError};

/// CLI arguments for the `explore` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "explore",
    long_about = "Sweep the building breadth-first from the origin and report \
                 the visiting order, the clues found on the way, the \
                 shortest travel time to every location and the suspect \
                 ranking over the clues found. With a destination, the \
                 quickest route there is included.",
    about = "Explore the building from an origin"
)]
#[ortho_config(prefix = "SLEUTHPATH")]
pub(crate) struct ExploreArgs {
    /// Starting location; defaults to the scenario's origin.
    #[arg(long = ARG_ORIGIN, value_name = "location")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// Location to report the quickest route to.
    #[arg(long = ARG_DESTINATION, value_name = "location")]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// Path to a JSON scenario file.
    #[arg(long = ARG_SCENARIO, value_name = "path")]
    #[serde(default)]
    pub(crate) scenario: Option<Utf8PathBuf>,
}

impl ExploreArgs {
    pub(crate) fn into_config(self) -> Result<ExploreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ExploreConfig::from(merged))
    }
}

/// Resolved `explore` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExploreConfig {
    pub(crate) origin: Option<Location>,
    pub(crate) destination: Option<Location>,
    pub(crate) scenario: Option<Utf8PathBuf>,
}

impl From<ExploreArgs> for ExploreConfig {
    fn from(args: ExploreArgs) -> Self {
        Self {
            origin: args.origin.map(Location::new),
            destination: args.destination.map(Location::new),
            scenario: args.scenario,
        }
    }
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    about = "Rank suspects by the evidence across every clue"
)]
#[ortho_config(prefix = "SLEUTHPATH")]
pub(crate) struct RankArgs {
    /// Path to a JSON scenario file.
    #[arg(long = ARG_SCENARIO, value_name = "path")]
    #[serde(default)]
    pub(crate) scenario: Option<Utf8PathBuf>,
}

/// CLI arguments for the `clues` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "clues",
    about = "List the clues and the leading suspect at each location"
)]
#[ortho_config(prefix = "SLEUTHPATH")]
pub(crate) struct CluesArgs {
    /// Path to a JSON scenario file.
    #[arg(long = ARG_SCENARIO, value_name = "path")]
    #[serde(default)]
    pub(crate) scenario: Option<Utf8PathBuf>,
}

/// Travel time from the origin to one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TravelTime {
    pub(crate) location: Location,
    pub(crate) minutes: Option<Minutes>,
}

/// Quickest route from the origin to the requested destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RouteReport {
    pub(crate) destination: Location,
    pub(crate) minutes: Option<Minutes>,
    pub(crate) locations: Vec<Location>,
}

/// Output of the `explore` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ExploreReport {
    pub(crate) origin: Location,
    pub(crate) order: Vec<Location>,
    pub(crate) clues_found: Vec<Clue>,
    pub(crate) travel_times: Vec<TravelTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) route: Option<RouteReport>,
    pub(crate) ranking: Vec<SuspectScore>,
}

/// Output of the `rank` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RankReport {
    pub(crate) ranking: Vec<SuspectScore>,
}

/// One location's entry in the `clues` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct LocationClues {
    pub(crate) location: Location,
    pub(crate) clues: Vec<String>,
    pub(crate) leading_suspect: Option<SuspectScore>,
}

pub(super) fn run_explore(args: ExploreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_explore_with(args, &mut stdout)
}

pub(super) fn run_explore_with(args: ExploreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let scenario = open_scenario(config.scenario.as_deref())?;
    let report = explore_report(&scenario, &config)?;
    write_json(writer, &report)
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let scenario = open_scenario(merged.scenario.as_deref())?;
    let report = RankReport {
        ranking: rank(scenario.clues().clues()),
    };
    write_json(writer, &report)
}

pub(super) fn run_clues(args: CluesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_clues_with(args, &mut stdout)
}

pub(super) fn run_clues_with(args: CluesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let scenario = open_scenario(merged.scenario.as_deref())?;
    write_json(writer, &clues_report(&scenario))
}

fn open_scenario(path: Option<&Utf8Path>) -> Result<Scenario, CliError> {
    if let Some(path) = path {
        require_existing(path, ARG_SCENARIO)?;
    }
    load_scenario(path)
}

pub(crate) fn explore_report(
    scenario: &Scenario,
    config: &ExploreConfig,
) -> Result<ExploreReport, CliError> {
    let origin = config
        .origin
        .clone()
        .unwrap_or_else(|| scenario.origin().clone());
    let exploration =
        explore(scenario.graph(), scenario.clues(), origin.as_str()).map_err(CliError::Explore)?;
    let paths = shortest_paths(scenario.graph(), origin.as_str()).map_err(CliError::Route)?;
    let travel_times = paths
        .distances()
        .map(|(location, minutes)| TravelTime {
            location: location.clone(),
            minutes,
        })
        .collect();
    let route = config
        .destination
        .as_ref()
        .map(|destination| {
            Ok::<_, CliError>(RouteReport {
                destination: destination.clone(),
                minutes: paths
                    .distance_to(destination.as_str())
                    .map_err(CliError::Route)?,
                locations: paths
                    .path_to(destination.as_str())
                    .map_err(CliError::Route)?,
            })
        })
        .transpose()?;
    let ranking = rank(&exploration.clues_found);
    Ok(ExploreReport {
        origin,
        order: exploration.order,
        clues_found: exploration.clues_found,
        travel_times,
        route,
        ranking,
    })
}

pub(crate) fn clues_report(scenario: &Scenario) -> Vec<LocationClues> {
    scenario
        .graph()
        .locations()
        .iter()
        .map(|location| {
            let here: Vec<&Clue> = scenario.clues().clues_at(location.as_str()).collect();
            LocationClues {
                location: location.clone(),
                clues: here.iter().map(|clue| clue.id.clone()).collect(),
                leading_suspect: leading_suspect(here.iter().copied()),
            }
        })
        .collect()
}
