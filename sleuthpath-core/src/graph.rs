//! Weighted, undirected location graph.
//!
//! A [`CaseGraph`] is built once through [`CaseGraphBuilder`] and is
//! immutable afterwards. Every edge is stored in both adjacency lists, so a
//! lookup from either endpoint sees the same weight. Construction rejects
//! self-loops, conflicting duplicate edges and disconnected layouts.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Location, Minutes, traversal};

/// An undirected edge between two locations.
///
/// # Examples
/// ```
/// use sleuthpath_core::Edge;
///
/// let edge = Edge::new("C0", "S-1", 3);
/// assert_eq!(edge.minutes, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// One endpoint.
    pub from: Location,
    /// The other endpoint.
    pub to: Location,
    /// Travel time in minutes, in either direction.
    pub minutes: Minutes,
}

impl Edge {
    /// Construct an edge.
    pub fn new(from: impl Into<Location>, to: impl Into<Location>, minutes: Minutes) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            minutes,
        }
    }
}

/// Errors raised while building or querying a [`CaseGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No locations were supplied.
    #[error("graph must contain at least one location")]
    Empty,
    /// An edge joined a location to itself.
    #[error("edge from {location} to itself is not allowed")]
    SelfLoop {
        /// The offending location.
        location: Location,
    },
    /// The same pair was given two different weights.
    #[error("edge {from} - {to} already takes {existing} minutes, cannot also take {requested}")]
    ConflictingEdge {
        /// First endpoint.
        from: Location,
        /// Second endpoint.
        to: Location,
        /// Weight recorded first.
        existing: Minutes,
        /// Weight that conflicted with it.
        requested: Minutes,
    },
    /// Some location cannot be reached from the first one.
    #[error("location {location} is not reachable from {origin}")]
    Disconnected {
        /// Location the connectivity check started from.
        origin: Location,
        /// First location found to be unreachable.
        location: Location,
    },
    /// A query named a location the graph does not contain.
    #[error("unknown location {location}")]
    UnknownLocation {
        /// The requested label.
        location: Location,
    },
}

/// Incremental builder for a [`CaseGraph`].
///
/// Locations are numbered in first-seen order; that order is the iteration
/// order of every table derived from the graph.
#[derive(Debug, Clone, Default)]
pub struct CaseGraphBuilder {
    locations: Vec<Location>,
    index: HashMap<Location, usize>,
    adjacency: Vec<Vec<(usize, Minutes)>>,
}

impl CaseGraphBuilder {
    /// Construct an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location, returning its dense index.
    ///
    /// Registering an existing location is a no-op.
    pub fn location(&mut self, label: impl Into<Location>) -> usize {
        let location = label.into();
        if let Some(&idx) = self.index.get(&location) {
            return idx;
        }
        let idx = self.locations.len();
        self.index.insert(location.clone(), idx);
        self.locations.push(location);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add an undirected edge, registering both endpoints.
    ///
    /// Re-adding an edge with the same weight is accepted, so adjacency
    /// lists written out from both ends can be fed in verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] when both endpoints match and
    /// [`GraphError::ConflictingEdge`] when the pair already has a
    /// different weight.
    pub fn edge(
        &mut self,
        from: impl Into<Location>,
        to: impl Into<Location>,
        minutes: Minutes,
    ) -> Result<&mut Self, GraphError> {
        let from_idx = self.location(from);
        let to_idx = self.location(to);
        if from_idx == to_idx {
            return Err(GraphError::SelfLoop {
                location: self.label(from_idx),
            });
        }

        let existing = self
            .adjacency
            .get(from_idx)
            .and_then(|row| row.iter().find(|(n, _)| *n == to_idx))
            .map(|&(_, w)| w);
        match existing {
            Some(w) if w == minutes => return Ok(self),
            Some(w) => {
                return Err(GraphError::ConflictingEdge {
                    from: self.label(from_idx),
                    to: self.label(to_idx),
                    existing: w,
                    requested: minutes,
                });
            }
            None => {}
        }

        if let Some(row) = self.adjacency.get_mut(from_idx) {
            row.push((to_idx, minutes));
        }
        if let Some(row) = self.adjacency.get_mut(to_idx) {
            row.push((from_idx, minutes));
        }
        Ok(self)
    }

    /// Finish the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Empty`] without locations and
    /// [`GraphError::Disconnected`] when some location cannot be reached
    /// from the first one registered.
    pub fn build(self) -> Result<CaseGraph, GraphError> {
        let graph = CaseGraph {
            locations: self.locations,
            index: self.index,
            adjacency: self.adjacency,
        };
        let Some(first) = graph.locations.first() else {
            return Err(GraphError::Empty);
        };

        let reached = traversal::reachable_indices(&graph, 0);
        if reached.len() < graph.len() {
            let mut seen = vec![false; graph.len()];
            for idx in reached {
                if let Some(flag) = seen.get_mut(idx) {
                    *flag = true;
                }
            }
            let missing = seen.iter().position(|flag| !flag).unwrap_or_default();
            return Err(GraphError::Disconnected {
                origin: first.clone(),
                location: graph.locations.get(missing).cloned().unwrap_or_else(|| first.clone()),
            });
        }
        Ok(graph)
    }

    fn label(&self, idx: usize) -> Location {
        self.locations
            .get(idx)
            .cloned()
            .unwrap_or_else(|| Location::new(String::new()))
    }
}

/// Immutable weighted, undirected, connected graph of locations.
///
/// # Examples
/// ```
/// use sleuthpath_core::CaseGraph;
///
/// # fn main() -> Result<(), sleuthpath_core::GraphError> {
/// let mut builder = CaseGraph::builder();
/// builder.edge("C0", "S-1", 3)?.edge("C0", "A3", 5)?;
/// let graph = builder.build()?;
///
/// assert_eq!(graph.len(), 3);
/// let from_s1: Vec<_> = graph.neighbours("S-1")?.collect();
/// assert_eq!(from_s1.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseGraph {
    locations: Vec<Location>,
    index: HashMap<Location, usize>,
    adjacency: Vec<Vec<(usize, Minutes)>>,
}

impl CaseGraph {
    /// Start building a graph.
    #[must_use]
    pub fn builder() -> CaseGraphBuilder {
        CaseGraphBuilder::new()
    }

    /// Build a graph from a list of edges.
    ///
    /// # Errors
    ///
    /// Propagates any [`GraphError`] raised by [`CaseGraphBuilder`].
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut builder = CaseGraphBuilder::new();
        for edge in edges {
            builder.edge(edge.from, edge.to, edge.minutes)?;
        }
        builder.build()
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the graph has no locations. Always `false` once built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in registration order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Whether `location` is part of the graph.
    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.index.contains_key(location)
    }

    /// Dense index of `location`, if present.
    #[must_use]
    pub fn index_of(&self, location: &str) -> Option<usize> {
        self.index.get(location).copied()
    }

    /// Location stored at dense index `idx`.
    #[must_use]
    pub fn location_at(&self, idx: usize) -> Option<&Location> {
        self.locations.get(idx)
    }

    /// Neighbours of `location` with the minutes needed to reach them.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownLocation`] when `location` is absent.
    pub fn neighbours<'a>(
        &'a self,
        location: &str,
    ) -> Result<impl Iterator<Item = (&'a Location, Minutes)> + use<'a>, GraphError> {
        let idx = self.require(location)?;
        Ok(self
            .neighbour_indices(idx)
            .iter()
            .filter_map(|&(n, w)| self.locations.get(n).map(|loc| (loc, w))))
    }

    /// Every edge once, lower-indexed endpoint first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(a, row)| {
            row.iter().filter(move |(b, _)| a < *b).filter_map(move |&(b, w)| {
                Some(Edge {
                    from: self.locations.get(a)?.clone(),
                    to: self.locations.get(b)?.clone(),
                    minutes: w,
                })
            })
        })
    }

    pub(crate) fn neighbour_indices(&self, idx: usize) -> &[(usize, Minutes)] {
        self.adjacency.get(idx).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn require(&self, location: &str) -> Result<usize, GraphError> {
        self.index_of(location)
            .ok_or_else(|| GraphError::UnknownLocation {
                location: Location::new(location),
            })
    }
}
