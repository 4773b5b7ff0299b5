//! Plan command implementation for the SleuthPath CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sleuthpath_core::{Location, Scenario, SolveRequest, SolveResponse, Solver};
use sleuthpath_solver_dfs::{DfsSolver, DfsSolverConfig};
use std::io::Write;

use crate::input::{load_scenario, require_existing};
use crate::output::write_json;
use crate::{
    ARG_MAX_EXPANSIONS, ARG_ORIGIN, ARG_PLAN_BUDGET, ARG_SCENARIO, CliError, ENV_PLAN_BUDGET,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Find the walk that collects the most evidence within a \
                 time budget. The building comes from a JSON scenario file \
                 or, when none is given, the built-in reference building. \
                 The result is printed as a JSON solve response.",
    about = "Plan the most rewarding walk within a time budget"
)]
#[ortho_config(prefix = "SLEUTHPATH")]
pub(crate) struct PlanArgs {
    /// Time budget in minutes.
    #[arg(
        long = ARG_PLAN_BUDGET,
        value_name = "minutes",
        allow_negative_numbers = true
    )]
    #[serde(default)]
    pub(crate) budget: Option<i64>,
    /// Starting location; defaults to the scenario's origin.
    #[arg(long = ARG_ORIGIN, value_name = "location")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// Path to a JSON scenario file.
    #[arg(long = ARG_SCENARIO, value_name = "path")]
    #[serde(default)]
    pub(crate) scenario: Option<Utf8PathBuf>,
    /// Abort the search after expanding this many nodes.
    #[arg(long = ARG_MAX_EXPANSIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_expansions: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Budget as given; validated against the request rules later.
    pub(crate) budget: i64,
    /// Explicit starting location, if any.
    pub(crate) origin: Option<Location>,
    /// Scenario file, or `None` for the reference building.
    pub(crate) scenario: Option<Utf8PathBuf>,
    /// Search expansion bound.
    pub(crate) max_expansions: Option<u64>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if let Some(path) = &self.scenario {
            require_existing(path, ARG_SCENARIO)?;
        }
        Ok(())
    }

    fn scenario_path(&self) -> Option<&Utf8Path> {
        self.scenario.as_deref()
    }

    fn request_for(&self, scenario: &Scenario) -> SolveRequest {
        let origin = self
            .origin
            .clone()
            .unwrap_or_else(|| scenario.origin().clone());
        SolveRequest::new(origin, self.budget)
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let budget = args.budget.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_BUDGET,
            env: ENV_PLAN_BUDGET,
        })?;
        Ok(Self {
            budget,
            origin: args.origin.map(Location::new),
            scenario: args.scenario,
            max_expansions: args.max_expansions,
        })
    }
}

/// Builds a solver instance for the current plan invocation.
pub(super) trait PlanSolverBuilder {
    fn build(
        &self,
        scenario: &Scenario,
        config: &PlanConfig,
    ) -> Result<Box<dyn Solver>, CliError>;
}

pub(super) struct DefaultPlanSolverBuilder;

impl PlanSolverBuilder for DefaultPlanSolverBuilder {
    fn build(
        &self,
        scenario: &Scenario,
        config: &PlanConfig,
    ) -> Result<Box<dyn Solver>, CliError> {
        let solver = DfsSolver::from_scenario(scenario)
            .map_err(CliError::DistanceTable)?
            .configured(DfsSolverConfig {
                max_expansions: config.max_expansions,
            });
        Ok(Box::new(solver))
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultPlanSolverBuilder;
    run_plan_with(args, &builder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlanSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_plan(args, builder)?;
    write_json(writer, &response)
}

fn execute_plan(
    args: PlanArgs,
    builder: &dyn PlanSolverBuilder,
) -> Result<SolveResponse, CliError> {
    let config = resolve_plan_config(args)?;
    let scenario = load_scenario(config.scenario_path())?;
    let request = config.request_for(&scenario);
    request
        .validate()
        .map_err(|source| CliError::InvalidPlanRequest { source })?;
    let solver = builder.build(&scenario, &config)?;
    let response = solver
        .solve(&request)
        .map_err(|source| CliError::Solve { source })?;
    log::info!(
        "planned {} scoring {} in {} minutes",
        response.walk,
        response.score,
        response.walk.total_minutes()
    );
    Ok(response)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
