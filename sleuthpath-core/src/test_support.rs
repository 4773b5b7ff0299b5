//! Test-only builders for small layouts, clues and solvers used by unit and
//! behaviour tests.

use crate::{
    CaseGraph, Clue, Diagnostics, Edge, Evidence, GraphError, Location, SolveError, SolveRequest,
    SolveResponse, Solver, Walk,
};

/// Build a clue without validation.
///
/// Useful for exercising the validation paths themselves.
pub fn clue(id: &str, location: &str, evidence: &[(&str, u32)]) -> Clue {
    Clue {
        id: id.to_owned(),
        location: Location::new(location),
        description: format!("clue {id}"),
        evidence: evidence
            .iter()
            .map(|&(suspect, weight)| Evidence::new(suspect, weight))
            .collect(),
    }
}

/// A corridor `L0 - L1 - ... - L{n-1}` with every hop taking `minutes`.
///
/// `L0` is always registered, so a zero length yields a single room.
///
/// # Errors
///
/// Propagates [`GraphError`] from the builder.
pub fn corridor(len: usize, minutes: u32) -> Result<CaseGraph, GraphError> {
    let mut builder = CaseGraph::builder();
    builder.location("L0");
    for idx in 1..len {
        builder.edge(format!("L{}", idx - 1), format!("L{idx}"), minutes)?;
    }
    builder.build()
}

/// A hub `H` joined to `spokes` rooms `R0..` by the given travel time.
///
/// # Errors
///
/// Propagates [`GraphError`] from the builder.
pub fn star(spokes: usize, minutes: u32) -> Result<CaseGraph, GraphError> {
    CaseGraph::from_edges((0..spokes).map(|idx| Edge::new("H", format!("R{idx}"), minutes)))
}

/// `Solver` that never moves: the walk is the origin and the score is zero.
#[derive(Debug, Copy, Clone, Default)]
pub struct StayPutSolver;

impl Solver for StayPutSolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        request.validate()?;
        Ok(SolveResponse {
            walk: Walk::stay(request.origin.clone()),
            score: 0,
            diagnostics: Diagnostics::default(),
        })
    }
}
