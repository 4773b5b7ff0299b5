//! Facade crate for the SleuthPath investigation engine.
//!
//! This crate re-exports the core domain types and exposes the walk solver
//! behind a feature flag.
//!
//! ```
//! # #[cfg(feature = "solver-dfs")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sleuthpath::{DfsSolver, Location, Scenario, SolveRequest, Solver};
//!
//! let scenario = Scenario::reference()?;
//! let solver = DfsSolver::from_scenario(&scenario)?;
//! let response = solver.solve(&SolveRequest::new(Location::new("C0"), 17))?;
//! assert_eq!(response.score, 13);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "solver-dfs"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use sleuthpath_core::{
    CaseGraph, CaseGraphBuilder, Clue, ClueError, ClueIndex, Diagnostics, DistanceError,
    DistanceTable, Edge, Evidence, Exploration, GraphError, Location, LocationValues, Minutes,
    PathError, Scenario, ScenarioDefinition, ScenarioError, Score, ShortestPaths, SolveError,
    SolveRequest, SolveRequestValidationError, SolveResponse, Solver, SuspectScore, Walk,
    breadth_first_order, explore, leading_suspect, rank, shortest_paths,
};

#[cfg(feature = "solver-dfs")]
pub use sleuthpath_solver_dfs::{DfsSolver, DfsSolverConfig, optimal_walk};
