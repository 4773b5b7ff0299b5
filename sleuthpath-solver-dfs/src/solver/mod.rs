//! `DfsSolver` implementation backed by the backtracking search.

use std::time::Instant;

use sleuthpath_core::{
    Diagnostics, DistanceError, DistanceTable, Location, LocationValues, Minutes, Scenario, Score,
    SolveError, SolveRequest, SolveResponse, Solver, Walk,
};

use crate::search::{SearchInstance, SearchOutcome};

/// Configuration for [`DfsSolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DfsSolverConfig {
    /// Upper bound on expanded search nodes, unbounded when `None`.
    pub max_expansions: Option<u64>,
}

/// Exhaustive solver for the time-budgeted walk with the highest evidence
/// value.
///
/// The solver owns the all-pairs table and the value of every location,
/// aligned with the table rows, so repeated requests share that setup.
///
/// # Examples
/// ```
/// use sleuthpath_core::{Location, Scenario, SolveRequest, Solver};
/// use sleuthpath_solver_dfs::DfsSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let solver = DfsSolver::from_scenario(&Scenario::reference()?)?;
/// let response = solver.solve(&SolveRequest::new(Location::new("C0"), 9))?;
/// assert_eq!(response.score, 6);
/// assert_eq!(response.walk.to_string(), "C0 -> S-1 -> A3");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DfsSolver {
    table: DistanceTable,
    values: Vec<Score>,
    config: DfsSolverConfig,
}

impl DfsSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(table: DistanceTable, values: &LocationValues) -> Self {
        Self::with_config(table, values, DfsSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub fn with_config(
        table: DistanceTable,
        values: &LocationValues,
        config: DfsSolverConfig,
    ) -> Self {
        Self {
            values: aligned_values(&table, values),
            table,
            config,
        }
    }

    /// Build a solver for a validated scenario.
    ///
    /// # Errors
    ///
    /// Propagates [`DistanceError`] from building the distance table.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, DistanceError> {
        Ok(Self::new(
            scenario.distance_table()?,
            &scenario.location_values(),
        ))
    }

    /// Replace the configuration.
    #[must_use]
    pub const fn configured(mut self, config: DfsSolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The distance table the solver searches over.
    #[must_use]
    pub const fn table(&self) -> &DistanceTable {
        &self.table
    }

    fn search(&self, origin: &Location, budget: Minutes) -> Result<SearchOutcome, SolveError> {
        SearchInstance {
            table: &self.table,
            values: &self.values,
            origin: origin_index(&self.table, origin.as_str())?,
            budget,
            max_expansions: self.config.max_expansions,
        }
        .run()
    }
}

/// Location values in table row order.
fn aligned_values(table: &DistanceTable, values: &LocationValues) -> Vec<Score> {
    table
        .locations()
        .iter()
        .map(|loc| values.get(loc.as_str()))
        .collect()
}

fn origin_index(table: &DistanceTable, origin: &str) -> Result<usize, SolveError> {
    table
        .index_of(origin)
        .ok_or_else(|| SolveError::UnknownOrigin {
            origin: Location::new(origin),
        })
}

fn walk_for(table: &DistanceTable, outcome: &SearchOutcome) -> Walk {
    let locations = outcome
        .path
        .iter()
        .filter_map(|&idx| table.locations().get(idx).cloned())
        .collect();
    Walk::new(locations, outcome.minutes)
}

impl Solver for DfsSolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let budget = request.validate()?;
        let started_at = Instant::now();
        let outcome = self.search(&request.origin, budget)?;
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            nodes_expanded: outcome.nodes_expanded,
        };
        log::debug!(
            "best walk from {} within {budget} minutes scores {} after {} expansions",
            request.origin,
            outcome.score,
            outcome.nodes_expanded
        );
        Ok(SolveResponse {
            walk: walk_for(&self.table, &outcome),
            score: outcome.score,
            diagnostics,
        })
    }
}

/// Best value and walk from `origin` within `budget` minutes.
///
/// Each location's value is credited at most once, the origin's included.
/// Among walks with the same value the first one met in table order is
/// returned.
///
/// # Errors
///
/// Returns [`SolveError::UnknownOrigin`] when `origin` is not in `table`.
///
/// # Examples
/// ```
/// use sleuthpath_core::Scenario;
/// use sleuthpath_solver_dfs::optimal_walk;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let scenario = Scenario::reference()?;
/// let table = scenario.distance_table()?;
/// let (score, walk) = optimal_walk("C0", 0, &scenario.location_values(), &table)?;
/// assert_eq!(score, 0);
/// assert_eq!(walk.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn optimal_walk(
    origin: &str,
    budget: Minutes,
    values: &LocationValues,
    table: &DistanceTable,
) -> Result<(Score, Walk), SolveError> {
    let values = aligned_values(table, values);
    let outcome = SearchInstance {
        table,
        values: &values,
        origin: origin_index(table, origin)?,
        budget,
        max_expansions: None,
    }
    .run()?;
    Ok((outcome.score, walk_for(table, &outcome)))
}
