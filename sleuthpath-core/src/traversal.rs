//! Breadth-first exploration of the case graph.
//!
//! Neighbours are enqueued in adjacency order, so the visiting order is
//! deterministic for a given graph.

use std::collections::VecDeque;

use crate::{CaseGraph, Clue, ClueIndex, GraphError, Location};

/// Outcome of a breadth-first sweep: where the investigator went and what
/// they found, both in visiting order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exploration {
    /// Locations in the order they were visited.
    pub order: Vec<Location>,
    /// Clues collected on the way, grouped by location in visiting order.
    pub clues_found: Vec<Clue>,
}

/// Visit every location reachable from `origin` in breadth-first order.
///
/// Each location appears exactly once and only after it was discovered
/// through an edge from an already visited location.
///
/// # Errors
///
/// Returns [`GraphError::UnknownLocation`] when `origin` is absent.
///
/// # Examples
/// ```
/// use sleuthpath_core::{CaseGraph, Edge, breadth_first_order};
///
/// # fn main() -> Result<(), sleuthpath_core::GraphError> {
/// let graph = CaseGraph::from_edges([Edge::new("A", "B", 1), Edge::new("B", "C", 1)])?;
/// let order = breadth_first_order(&graph, "B")?;
/// let labels: Vec<_> = order.iter().map(|l| l.as_str()).collect();
/// assert_eq!(labels, ["B", "A", "C"]);
/// # Ok(())
/// # }
/// ```
pub fn breadth_first_order(graph: &CaseGraph, origin: &str) -> Result<Vec<Location>, GraphError> {
    let start = graph.require(origin)?;
    Ok(reachable_indices(graph, start)
        .into_iter()
        .filter_map(|idx| graph.location_at(idx).cloned())
        .collect())
}

/// Sweep the graph breadth-first from `origin`, collecting every clue on
/// the way.
///
/// # Errors
///
/// Returns [`GraphError::UnknownLocation`] when `origin` is absent.
pub fn explore(
    graph: &CaseGraph,
    clues: &ClueIndex,
    origin: &str,
) -> Result<Exploration, GraphError> {
    let order = breadth_first_order(graph, origin)?;
    let clues_found = order
        .iter()
        .flat_map(|loc| clues.clues_at(loc.as_str()))
        .cloned()
        .collect();
    Ok(Exploration { order, clues_found })
}

pub(crate) fn reachable_indices(graph: &CaseGraph, start: usize) -> Vec<usize> {
    let mut visited = vec![false; graph.len()];
    let mut order = Vec::with_capacity(graph.len());
    let mut queue = VecDeque::new();

    if let Some(flag) = visited.get_mut(start) {
        *flag = true;
        queue.push_back(start);
    }

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &(next, _) in graph.neighbour_indices(current) {
            if let Some(flag) = visited.get_mut(next)
                && !*flag
            {
                *flag = true;
                queue.push_back(next);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;
    use rstest::rstest;

    fn star() -> CaseGraph {
        CaseGraph::from_edges([
            Edge::new("Hub", "North", 4),
            Edge::new("Hub", "East", 2),
            Edge::new("North", "Attic", 1),
        ])
        .expect("valid star")
    }

    #[rstest]
    #[case("Hub", &["Hub", "North", "East", "Attic"])]
    #[case("Attic", &["Attic", "North", "Hub", "East"])]
    fn order_follows_discovery(#[case] origin: &str, #[case] expected: &[&str]) {
        let order = breadth_first_order(&star(), origin).expect("known origin");
        let labels: Vec<_> = order.iter().map(Location::as_str).collect();
        assert_eq!(labels, expected);
    }

    #[rstest]
    fn unknown_origin_fails() {
        let err = breadth_first_order(&star(), "Cellar").expect_err("unknown origin");
        assert!(matches!(err, GraphError::UnknownLocation { .. }));
    }
}
