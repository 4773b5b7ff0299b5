//! Core domain types for the SleuthPath investigation engine.
//!
//! The crate models a small building as a weighted, undirected
//! [`CaseGraph`] whose locations hold [`Clue`] records. On top of that it
//! provides the collaborators a route solver needs: single-source
//! [`shortest_paths`], the all-pairs [`DistanceTable`], breadth-first
//! [`explore`] reports and suspect [`rank`]ings. The [`Solver`] trait is the
//! seam behind which the time-budgeted walk search lives.
//!
//! Constructors validate their input and return `Result`, so every value
//! handed to a solver is already known to be consistent.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clue;
pub mod distance;
pub mod graph;
mod location;
pub mod scenario;
pub mod shortest_path;
mod solver;
pub mod suspect;
pub mod traversal;
mod walk;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clue::{Clue, ClueError, ClueIndex, Evidence, LocationValues};
pub use distance::{DistanceError, DistanceTable};
pub use graph::{CaseGraph, CaseGraphBuilder, Edge, GraphError};
pub use location::Location;
pub use scenario::{Scenario, ScenarioDefinition, ScenarioError};
pub use shortest_path::{PathError, ShortestPaths, shortest_paths};
pub use solver::{
    Diagnostics, SolveError, SolveRequest, SolveRequestValidationError, SolveResponse, Solver,
};
pub use suspect::{SuspectScore, leading_suspect, rank};
pub use traversal::{Exploration, breadth_first_order, explore};
pub use walk::Walk;

/// Travel time between two locations, in whole minutes.
pub type Minutes = u32;

/// Accumulated evidence value.
pub type Score = u64;
