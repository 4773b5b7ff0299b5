#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for the DFS solver using rstest-bdd.

use std::cell::RefCell;
use std::collections::HashSet;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use sleuthpath_core::{Location, Scenario, SolveError, SolveRequest, SolveResponse, Solver};
use sleuthpath_solver_dfs::{DfsSolver, DfsSolverConfig};

#[derive(Debug, Default)]
struct PlanningWorld {
    solver: RefCell<Option<DfsSolver>>,
    outcome: RefCell<Option<Result<SolveResponse, SolveError>>>,
}

impl PlanningWorld {
    fn response(&self) -> SolveResponse {
        self.outcome
            .borrow()
            .clone()
            .expect("a plan should be recorded")
            .expect("planning should succeed")
    }

    fn error(&self) -> SolveError {
        self.outcome
            .borrow()
            .clone()
            .expect("a plan should be recorded")
            .expect_err("planning should fail")
    }
}

#[fixture]
fn world() -> PlanningWorld {
    PlanningWorld::default()
}

#[given("the reference building")]
fn given_reference_building(world: &PlanningWorld) {
    let scenario = Scenario::reference().expect("reference scenario is valid");
    let solver = DfsSolver::from_scenario(&scenario).expect("reference layout is connected");
    world.solver.replace(Some(solver));
}

#[given("a search limit of {limit} expansions")]
fn given_search_limit(world: &PlanningWorld, limit: u64) {
    let solver = world
        .solver
        .take()
        .expect("a building should be loaded first")
        .configured(DfsSolverConfig {
            max_expansions: Some(limit),
        });
    world.solver.replace(Some(solver));
}

#[when("I plan from {origin} with {budget} minutes")]
fn when_plan(world: &PlanningWorld, origin: String, budget: i64) {
    let borrowed = world.solver.borrow();
    let solver = borrowed.as_ref().expect("a building should be loaded");
    let request = SolveRequest::new(Location::new(origin.trim_matches('"')), budget);
    world.outcome.replace(Some(solver.solve(&request)));
}

#[then("the walk collects {score} points")]
fn then_score(world: &PlanningWorld, score: u64) {
    assert_eq!(world.response().score, score);
}

#[then("the walk visits every room")]
fn then_every_room(world: &PlanningWorld) {
    let response = world.response();
    let visited: HashSet<&Location> = response.walk.locations().iter().collect();
    let borrowed = world.solver.borrow();
    let solver = borrowed.as_ref().expect("a building should be loaded");
    assert_eq!(visited.len(), solver.table().len());
}

#[then("the walk is only {origin}")]
fn then_only_origin(world: &PlanningWorld, origin: String) {
    let response = world.response();
    assert_eq!(
        response.walk.locations(),
        [Location::new(origin.trim_matches('"'))]
    );
    assert_eq!(response.walk.total_minutes(), 0);
}

#[then("the request is rejected as invalid")]
fn then_invalid(world: &PlanningWorld) {
    assert!(matches!(world.error(), SolveError::InvalidRequest(_)));
}

#[then("the request is rejected for an unknown origin")]
fn then_unknown_origin(world: &PlanningWorld) {
    assert!(matches!(world.error(), SolveError::UnknownOrigin { .. }));
}

#[then("the search reports that the limit was exceeded")]
fn then_limit_exceeded(world: &PlanningWorld) {
    assert!(matches!(
        world.error(),
        SolveError::SearchLimitExceeded { .. }
    ));
}

macro_rules! register_planning_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/dfs_solver.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanningWorld) {
            let _ = world;
        }
    };
}

register_planning_scenario!(covering_the_building, "Covering the whole building");
register_planning_scenario!(staying_put, "Staying put without time");
register_planning_scenario!(negative_budget, "Rejecting a negative budget");
register_planning_scenario!(unknown_origin, "Rejecting an unknown origin");
register_planning_scenario!(search_limit, "Stopping at the search limit");
