//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{DETOUR_SCENARIO, Workspace, parse_output};
use super::*;
use crate::plan::{DefaultPlanSolverBuilder, run_plan_with};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use sleuthpath_core::{Location, SolveError, SolveRequestValidationError, SolveResponse};
use std::cell::RefCell;

#[derive(Debug)]
struct PlanWorld {
    workspace: Workspace,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_arg(&self, flag: &str, value: &str) {
        let mut args = self.cli_args.borrow_mut();
        args.push(format!("--{flag}"));
        args.push(value.to_owned());
    }

    fn run(&self, extra: &[String]) {
        let mut argv = vec!["sleuthpath".to_owned(), "plan".to_owned()];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv.extend(extra.iter().cloned());
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Plan(args) => {
                let mut buffer = self.stdout.borrow_mut();
                run_plan_with(args, &DefaultPlanSolverBuilder, &mut *buffer)
            }
            other => panic!("expected plan command, found {other:?}"),
        });
        self.result.replace(Some(outcome));
    }

    fn response(&self) -> SolveResponse {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let value = parse_output(&self.stdout.borrow());
        serde_json::from_value(value).expect("output should be a solve response")
    }

    fn error<T>(&self, inspect: impl FnOnce(&CliError) -> T) -> T {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        inspect(error)
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("the detour scenario file")]
fn detour_scenario_file(#[from(world)] world: &PlanWorld) {
    let path = world.workspace.file("detour.json", DETOUR_SCENARIO);
    world.push_arg(ARG_SCENARIO, path.as_str());
}

#[given("the walk starts at {origin}")]
fn walk_starts_at(#[from(world)] world: &PlanWorld, origin: String) {
    world.push_arg(ARG_ORIGIN, origin.trim_matches('"'));
}

#[when("I run the plan command with a budget of {budget} minutes")]
fn run_plan_with_budget(#[from(world)] world: &PlanWorld, budget: i64) {
    world.run(&[format!("--{ARG_PLAN_BUDGET}"), budget.to_string()]);
}

#[when("I run the plan command without a budget")]
fn run_plan_without_budget(#[from(world)] world: &PlanWorld) {
    world.run(&[]);
}

#[then("the command succeeds with a score of {score}")]
fn command_succeeds_with_score(#[from(world)] world: &PlanWorld, score: u64) {
    assert_eq!(world.response().score, score);
}

#[then("the planned walk is {walk}")]
fn planned_walk_is(#[from(world)] world: &PlanWorld, walk: String) {
    let expected: Vec<Location> = walk
        .trim_matches('"')
        .split(',')
        .map(|label| Location::new(label.trim()))
        .collect();
    let response = world.response();
    assert_eq!(response.walk.locations(), expected.as_slice());
}

#[then("the command fails because the budget is negative")]
fn command_fails_negative_budget(#[from(world)] world: &PlanWorld) {
    world.error(|error| match error {
        CliError::InvalidPlanRequest { source } => {
            assert_eq!(
                *source,
                SolveRequestValidationError::NegativeBudget { budget: -1 }
            );
        }
        other => panic!("expected InvalidPlanRequest, found {other:?}"),
    });
}

#[then("the command fails because the budget is missing")]
fn command_fails_missing_budget(#[from(world)] world: &PlanWorld) {
    world.error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PLAN_BUDGET),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because the origin is unknown")]
fn command_fails_unknown_origin(#[from(world)] world: &PlanWorld) {
    world.error(|error| match error {
        CliError::Solve {
            source: SolveError::UnknownOrigin { origin },
        } => assert_eq!(origin.as_str(), "Roof"),
        other => panic!("expected Solve(UnknownOrigin), found {other:?}"),
    });
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_reference, "planning a walk through the reference building");
register_plan_scenario!(plan_scenario_file, "planning from a scenario file");
register_plan_scenario!(plan_other_origin, "planning from another origin");
register_plan_scenario!(plan_negative_budget, "rejecting a negative budget");
register_plan_scenario!(plan_missing_budget, "rejecting a missing budget");
register_plan_scenario!(plan_unknown_origin, "rejecting an unknown origin");
