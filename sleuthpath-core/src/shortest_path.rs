//! Single-source shortest travel times.
//!
//! [`shortest_paths`] runs Dijkstra's algorithm with a linear scan for the
//! closest unvisited location. The graphs handled here have a handful of
//! locations, so the O(V²) selection is cheaper than maintaining a heap.

use thiserror::Error;

use crate::{CaseGraph, Location, Minutes};

/// Errors from shortest-path queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A query named a location the graph does not contain.
    #[error("unknown location {location}")]
    UnknownLocation {
        /// The requested label.
        location: Location,
    },
    /// No path links the origin to the destination.
    #[error("no path from {origin} to {destination}")]
    NoPath {
        /// Search origin.
        origin: Location,
        /// Requested destination.
        destination: Location,
    },
}

/// Distances and predecessor links from one origin.
///
/// # Examples
/// ```
/// use sleuthpath_core::{CaseGraph, Edge, shortest_paths};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = CaseGraph::from_edges([
///     Edge::new("A", "B", 2),
///     Edge::new("B", "C", 2),
///     Edge::new("A", "C", 9),
/// ])?;
/// let paths = shortest_paths(&graph, "A")?;
/// assert_eq!(paths.distance_to("C")?, Some(4));
/// let path = paths.path_to("C")?;
/// let route: Vec<_> = path.iter().map(|l| l.as_str()).collect();
/// assert_eq!(route, ["A", "B", "C"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g CaseGraph,
    origin: usize,
    origin_label: Location,
    distances: Vec<Option<Minutes>>,
    predecessors: Vec<Option<usize>>,
}

/// Compute shortest travel times from `origin` to every location.
///
/// # Errors
///
/// Returns [`PathError::UnknownLocation`] when `origin` is absent.
pub fn shortest_paths<'g>(
    graph: &'g CaseGraph,
    origin: &str,
) -> Result<ShortestPaths<'g>, PathError> {
    let start = graph
        .index_of(origin)
        .ok_or_else(|| PathError::UnknownLocation {
            location: Location::new(origin),
        })?;

    let n = graph.len();
    let mut distances: Vec<Option<Minutes>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    if let Some(slot) = distances.get_mut(start) {
        *slot = Some(0);
    }

    while let Some((current, base)) = closest_unsettled(&distances, &settled) {
        if let Some(flag) = settled.get_mut(current) {
            *flag = true;
        }
        for &(next, minutes) in graph.neighbour_indices(current) {
            let candidate = base.saturating_add(minutes);
            let Some(slot) = distances.get_mut(next) else {
                continue;
            };
            if slot.is_none_or(|known| candidate < known) {
                *slot = Some(candidate);
                if let Some(pred) = predecessors.get_mut(next) {
                    *pred = Some(current);
                }
            }
        }
    }

    Ok(ShortestPaths {
        graph,
        origin: start,
        origin_label: Location::new(origin),
        distances,
        predecessors,
    })
}

fn closest_unsettled(
    distances: &[Option<Minutes>],
    settled: &[bool],
) -> Option<(usize, Minutes)> {
    distances
        .iter()
        .zip(settled)
        .enumerate()
        .filter(|(_, (_, done))| !**done)
        .filter_map(|(idx, (dist, _))| dist.map(|d| (idx, d)))
        .min_by_key(|&(_, d)| d)
}

impl ShortestPaths<'_> {
    /// The origin the distances were computed from.
    #[must_use]
    pub const fn origin(&self) -> &Location {
        &self.origin_label
    }

    /// Minimal travel time to `destination`, `None` when unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnknownLocation`] when `destination` is absent.
    pub fn distance_to(&self, destination: &str) -> Result<Option<Minutes>, PathError> {
        let idx = self.require(destination)?;
        Ok(self.distances.get(idx).copied().flatten())
    }

    /// Every location paired with its travel time, in graph order.
    pub fn distances(&self) -> impl Iterator<Item = (&Location, Option<Minutes>)> + '_ {
        self.graph
            .locations()
            .iter()
            .zip(self.distances.iter().copied())
    }

    /// Location preceding `destination` on a shortest path.
    ///
    /// `None` for the origin and for unreachable locations.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnknownLocation`] when `destination` is absent.
    pub fn predecessor(&self, destination: &str) -> Result<Option<&Location>, PathError> {
        let idx = self.require(destination)?;
        Ok(self
            .predecessors
            .get(idx)
            .copied()
            .flatten()
            .and_then(|p| self.graph.location_at(p)))
    }

    /// Reconstruct a shortest path from the origin to `destination`.
    ///
    /// The walk back along predecessor links is bounded by the number of
    /// locations, so a corrupted link chain cannot loop forever.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnknownLocation`] when `destination` is absent
    /// and [`PathError::NoPath`] when it cannot be reached.
    pub fn path_to(&self, destination: &str) -> Result<Vec<Location>, PathError> {
        let target = self.require(destination)?;
        let no_path = || PathError::NoPath {
            origin: self.origin().clone(),
            destination: Location::new(destination),
        };

        let mut reversed = vec![target];
        let mut current = target;
        while current != self.origin {
            if reversed.len() > self.graph.len() {
                log::warn!("predecessor chain to {destination} exceeds graph size");
                return Err(no_path());
            }
            current = self
                .predecessors
                .get(current)
                .copied()
                .flatten()
                .ok_or_else(no_path)?;
            reversed.push(current);
        }

        Ok(reversed
            .into_iter()
            .rev()
            .filter_map(|idx| self.graph.location_at(idx).cloned())
            .collect())
    }

    pub(crate) fn distance_row(&self) -> &[Option<Minutes>] {
        &self.distances
    }

    fn require(&self, location: &str) -> Result<usize, PathError> {
        self.graph
            .index_of(location)
            .ok_or_else(|| PathError::UnknownLocation {
                location: Location::new(location),
            })
    }
}
