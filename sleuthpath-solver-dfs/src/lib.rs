//! Exhaustive walk planner for SleuthPath.
//!
//! This crate provides [`DfsSolver`], the default implementation of the
//! [`Solver`](sleuthpath_core::Solver) trait, and the [`optimal_walk`]
//! convenience entry point. Given the all-pairs travel times of a building,
//! the evidence value of each location, a starting location and a budget in
//! minutes, the solver enumerates every time-feasible walk, revisits
//! included, and returns one that collects the most evidence. A location's
//! value counts the first time the walk reaches it.
//!
//! The search is exponential in the number of locations and is meant for
//! building-sized layouts. [`DfsSolverConfig::max_expansions`] bounds the
//! work for callers that cannot afford an unbounded search.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod search;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use solver::{DfsSolver, DfsSolverConfig, optimal_walk};
