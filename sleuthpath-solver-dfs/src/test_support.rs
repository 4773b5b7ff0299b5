//! Test-only utilities for `sleuthpath-solver-dfs`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use sleuthpath_core::{
    DistanceError, DistanceTable, Location, LocationValues, Minutes, Scenario, Score, Walk,
};

use crate::DfsSolver;

/// Label used for row `idx` of tables built by [`table_from_rows`].
#[must_use]
pub fn row_label(idx: usize) -> Location {
    Location::new(format!("L{idx}"))
}

/// Build a distance table whose locations are labelled `L0`, `L1`, ...
///
/// # Examples
///
/// ```rust
/// use sleuthpath_solver_dfs::test_support::table_from_rows;
///
/// let table = table_from_rows(vec![vec![0, 4], vec![4, 0]]).expect("valid rows");
/// assert_eq!(table.distance("L0", "L1"), Ok(4));
/// ```
///
/// # Errors
///
/// Propagates [`DistanceError`] for malformed rows.
pub fn table_from_rows(rows: Vec<Vec<Minutes>>) -> Result<DistanceTable, DistanceError> {
    let locations = (0..rows.len()).map(row_label).collect();
    DistanceTable::from_rows(locations, rows)
}

/// Location values for `L0`, `L1`, ... in order.
#[must_use]
pub fn values_by_row(values: &[Score]) -> LocationValues {
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| (row_label(idx), value))
        .collect()
}

/// Labels of a walk, for terse assertions.
#[must_use]
pub fn labels(walk: &Walk) -> Vec<&str> {
    walk.locations().iter().map(Location::as_str).collect()
}

/// Solver over the built-in six-room reference building.
///
/// # Panics
///
/// Panics if the reference scenario fails to build, which would be a bug in
/// `sleuthpath-core`.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "the reference scenario is a fixed, valid fixture"
)]
pub fn reference_solver() -> DfsSolver {
    let scenario = Scenario::reference().expect("reference scenario is valid");
    DfsSolver::from_scenario(&scenario).expect("reference layout is connected")
}
