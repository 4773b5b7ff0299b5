//! Solver seam for time-budgeted investigation walks.

use std::time::Duration;

use thiserror::Error;

use crate::{Location, Minutes, Score, Walk};

/// Parameters for a solve request.
///
/// The budget is signed so that a negative value supplied by a caller can be
/// rejected explicitly instead of wrapping or clamping.
///
/// # Examples
/// ```rust
/// use sleuthpath_core::{Location, SolveRequest};
///
/// let request = SolveRequest::new(Location::new("C0"), 20);
/// assert_eq!(request.validate(), Ok(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Where the walk starts.
    pub origin: Location,
    /// Travel-time budget in minutes. Must be non-negative.
    pub budget_minutes: i64,
}

/// Validation failures for [`SolveRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveRequestValidationError {
    /// The budget was below zero.
    #[error("budget must be non-negative, got {budget} minutes")]
    NegativeBudget {
        /// Rejected budget.
        budget: i64,
    },
    /// The budget does not fit the minute type used for travel times.
    #[error("budget of {budget} minutes is too large")]
    BudgetTooLarge {
        /// Rejected budget.
        budget: i64,
    },
}

impl SolveRequest {
    /// Construct a request.
    #[must_use]
    pub const fn new(origin: Location, budget_minutes: i64) -> Self {
        Self {
            origin,
            budget_minutes,
        }
    }

    /// Check the budget and return it as [`Minutes`].
    ///
    /// # Errors
    ///
    /// Returns [`SolveRequestValidationError::NegativeBudget`] below zero and
    /// [`SolveRequestValidationError::BudgetTooLarge`] when it overflows
    /// [`Minutes`].
    pub fn validate(&self) -> Result<Minutes, SolveRequestValidationError> {
        let budget = self.budget_minutes;
        if budget < 0 {
            return Err(SolveRequestValidationError::NegativeBudget { budget });
        }
        Minutes::try_from(budget).map_err(|_| SolveRequestValidationError::BudgetTooLarge { budget })
    }
}

/// Search statistics reported with every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent solving.
    pub solve_time: Duration,
    /// Search nodes expanded.
    pub nodes_expanded: u64,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// The chosen walk.
    pub walk: Walk,
    /// Evidence value collected, each location counted once.
    pub score: Score,
    /// Search statistics.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] SolveRequestValidationError),
    /// The origin is not part of the distance table.
    #[error("origin {origin} is not a known location")]
    UnknownOrigin {
        /// Requested origin.
        origin: Location,
    },
    /// The search expanded more nodes than the configured limit.
    #[error("search stopped after expanding {limit} nodes")]
    SearchLimitExceeded {
        /// Configured limit.
        limit: u64,
    },
}

/// Find a walk that collects as much evidence as the budget allows.
///
/// Implementations should return [`SolveError::InvalidRequest`] for invalid
/// parameters rather than panicking. Solvers must be `Send + Sync`.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a walk or an error.
    ///
    /// # Errors
    ///
    /// Implementation specific; see [`SolveError`].
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError>;
}
