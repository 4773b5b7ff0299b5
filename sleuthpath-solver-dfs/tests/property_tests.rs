#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for the DFS solver.
//!
//! These tests use `proptest` to assert invariants that must hold for all valid
//! solver inputs, complementing the golden walk regression tests and BDD
//! behavioural tests.
//!
//! # Invariants tested
//!
//! - **Budget compliance:** the walk's travel time never exceeds the budget.
//! - **Walk validity:** walks start at the origin and their minutes match the
//!   distance table.
//! - **Credit once:** the score equals the summed values of the distinct
//!   rooms on the walk.
//! - **Monotonicity:** a larger budget never lowers the best value.
//! - **Optimality:** the score matches a brute-force search over walks
//!   without revisits.

mod proptest_support;

use std::collections::HashSet;

use proptest::prelude::*;
use sleuthpath_core::{Location, Minutes, Score, SolveRequest, Solver};
use sleuthpath_solver_dfs::{DfsSolver, optimal_walk};

use proptest_support::{Instance, brute_force_best, instance};

fn solve(instance: &Instance, budget: Minutes) -> (Score, sleuthpath_core::Walk) {
    optimal_walk(
        instance.origin.as_str(),
        budget,
        &instance.values,
        &instance.table,
    )
    .expect("origin is part of the table")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: walks start at the origin, fit the budget and are priced
    /// by the table.
    #[test]
    fn walks_are_valid(problem in instance(5, true), budget in 0_u32..=10) {
        let (_, walk) = solve(&problem, budget);
        prop_assert_eq!(walk.origin(), Some(&problem.origin));
        prop_assert!(walk.total_minutes() <= budget);
        let priced = problem
            .table
            .walk_minutes(walk.locations())
            .expect("walk uses known rooms");
        prop_assert_eq!(priced, walk.total_minutes());
    }

    /// Property: each room's value is credited at most once.
    #[test]
    fn score_counts_each_room_once(problem in instance(5, true), budget in 0_u32..=10) {
        let (score, walk) = solve(&problem, budget);
        let distinct: HashSet<&Location> = walk.locations().iter().collect();
        let expected: Score = distinct
            .iter()
            .map(|loc| problem.values.get(loc.as_str()))
            .sum();
        prop_assert_eq!(score, expected);
        prop_assert!(score <= problem.values.total());
    }

    /// Property: increasing the budget never decreases the best value.
    #[test]
    fn best_value_is_monotone_in_budget(
        problem in instance(5, false),
        budget in 0_u32..=8,
        extra in 0_u32..=4,
    ) {
        let (smaller, _) = solve(&problem, budget);
        let (larger, _) = solve(&problem, budget + extra);
        prop_assert!(smaller <= larger, "{smaller} at {budget} > {larger} at {}", budget + extra);
    }

    /// Property: without free doorways a zero budget keeps the walk at the
    /// origin and scores the origin's own value.
    #[test]
    fn zero_budget_stays_put(problem in instance(5, false)) {
        let (score, walk) = solve(&problem, 0);
        prop_assert_eq!(walk.locations(), [problem.origin.clone()]);
        prop_assert_eq!(score, problem.values.get(problem.origin.as_str()));
    }

    /// Property: the exhaustive search finds the true optimum.
    #[test]
    fn search_matches_brute_force(problem in instance(5, true), budget in 0_u32..=10) {
        let (score, _) = solve(&problem, budget);
        prop_assert_eq!(score, brute_force_best(&problem, budget));
    }

    /// Property: the `Solver` trait and `optimal_walk` agree.
    #[test]
    fn solver_and_entry_point_agree(problem in instance(4, true), budget in 0_u32..=10) {
        let solver = DfsSolver::new(problem.table.clone(), &problem.values);
        let request = SolveRequest::new(problem.origin.clone(), i64::from(budget));
        let response = solver.solve(&request).expect("valid request");
        let (score, walk) = solve(&problem, budget);
        prop_assert_eq!(response.score, score);
        prop_assert_eq!(response.walk, walk);
    }
}
