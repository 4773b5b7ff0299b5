//! Tests for the `Solver` trait using a dummy implementation.

use rstest::rstest;
use sleuthpath_core::{
    Diagnostics, Location, SolveError, SolveRequest, SolveResponse, Solver, Walk,
};

/// Hops to a fixed neighbour when the budget allows it.
struct NextDoorSolver;

impl Solver for NextDoorSolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let budget = request.validate()?;
        if request.origin.as_str() != "Hall" {
            return Err(SolveError::UnknownOrigin {
                origin: request.origin.clone(),
            });
        }
        let walk = if budget >= 2 {
            Walk::new(vec![Location::new("Hall"), Location::new("Study")], 2)
        } else {
            Walk::stay(Location::new("Hall"))
        };
        let score = if walk.len() > 1 { 3 } else { 0 };
        Ok(SolveResponse {
            walk,
            score,
            diagnostics: Diagnostics::default(),
        })
    }
}

#[rstest]
#[case("Hall", 10, true)]
#[case("Hall", 0, true)]
#[case("Hall", -5, false)]
#[case("Attic", 10, false)]
fn solver_returns_expected(
    #[case] origin: &str,
    #[case] budget: i64,
    #[case] should_succeed: bool,
) {
    let solver: Box<dyn Solver> = Box::new(NextDoorSolver);
    let result = solver.solve(&SolveRequest::new(Location::new(origin), budget));
    assert_eq!(result.is_ok(), should_succeed);
}

#[rstest]
#[case(1, 0, 0)]
#[case(2, 3, 2)]
fn responses_stay_within_budget(#[case] budget: i64, #[case] score: u64, #[case] minutes: u32) {
    let response = NextDoorSolver
        .solve(&SolveRequest::new(Location::new("Hall"), budget))
        .expect("Hall is known");
    assert_eq!(response.score, score);
    assert_eq!(response.walk.total_minutes(), minutes);
    assert!(i64::from(response.walk.total_minutes()) <= budget);
    assert_eq!(response.walk.origin().map(Location::as_str), Some("Hall"));
}
