//! All-pairs travel-time table.
//!
//! The [`DistanceTable`] is derived once from a [`CaseGraph`] by running
//! [`shortest_paths`](crate::shortest_paths) from every location. Rows and
//! columns follow the graph's location order, so dense indices from the
//! graph and the table agree.

use std::collections::HashMap;

use thiserror::Error;

use crate::{CaseGraph, Location, Minutes, PathError, shortest_paths};

/// Errors from building or querying a [`DistanceTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// A query named a location the table does not contain.
    #[error("unknown location {location}")]
    UnknownLocation {
        /// The requested label.
        location: Location,
    },
    /// Some destination cannot be reached from an origin.
    #[error("{destination} is unreachable from {origin}")]
    Unreachable {
        /// Row origin.
        origin: Location,
        /// Column destination.
        destination: Location,
    },
    /// A row does not have one entry per location.
    #[error("row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Entries found.
        found: usize,
        /// Entries required.
        expected: usize,
    },
    /// A location is more than zero minutes from itself.
    #[error("{location} is {minutes} minutes from itself")]
    NonZeroDiagonal {
        /// Offending location.
        location: Location,
        /// Diagonal entry.
        minutes: Minutes,
    },
    /// The same label appears twice.
    #[error("location {location} appears more than once")]
    DuplicateLocation {
        /// Repeated label.
        location: Location,
    },
    /// The two directions between a pair of locations disagree.
    #[error("{from} to {to} takes {there} minutes but {back} minutes back")]
    Asymmetric {
        /// Row location.
        from: Location,
        /// Column location.
        to: Location,
        /// Minutes from `from` to `to`.
        there: Minutes,
        /// Minutes from `to` to `from`.
        back: Minutes,
    },
    /// A direct entry is longer than going through a third location.
    #[error("{from} to {to} takes {direct} minutes but {detour} via {via}")]
    TriangleInequality {
        /// Row location.
        from: Location,
        /// Column location.
        to: Location,
        /// Intermediate location giving the shorter detour.
        via: Location,
        /// Direct entry.
        direct: Minutes,
        /// Minutes through `via`.
        detour: Minutes,
    },
    /// A shortest-path query failed while building the table.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Square origin × destination table of minimal travel times.
///
/// # Examples
/// ```
/// use sleuthpath_core::{CaseGraph, DistanceTable, Edge};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = CaseGraph::from_edges([Edge::new("A", "B", 2), Edge::new("B", "C", 3)])?;
/// let table = DistanceTable::from_graph(&graph)?;
/// assert_eq!(table.distance("A", "C")?, 5);
/// assert_eq!(table.distance("C", "A")?, 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    locations: Vec<Location>,
    index: HashMap<Location, usize>,
    minutes: Vec<Vec<Minutes>>,
}

impl DistanceTable {
    /// Run the shortest-path engine from every location of `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::Unreachable`] if some pair is not connected.
    /// Graphs built through [`CaseGraph::builder`] are connected, so this
    /// only guards against inconsistent input.
    pub fn from_graph(graph: &CaseGraph) -> Result<Self, DistanceError> {
        let mut minutes = Vec::with_capacity(graph.len());
        for origin in graph.locations() {
            let paths = shortest_paths(graph, origin.as_str())?;
            let row = paths
                .distance_row()
                .iter()
                .zip(graph.locations())
                .map(|(dist, destination)| {
                    dist.ok_or_else(|| DistanceError::Unreachable {
                        origin: origin.clone(),
                        destination: destination.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            minutes.push(row);
        }
        log::debug!("built {n}x{n} distance table", n = graph.len());
        Self::from_rows(graph.locations().to_vec(), minutes)
    }

    /// Build a table from explicit rows.
    ///
    /// The rows must describe minimal travel times: square, zero on the
    /// diagonal, symmetric, and never beaten by a detour through a third
    /// location.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::DuplicateLocation`],
    /// [`DistanceError::NotSquare`], [`DistanceError::NonZeroDiagonal`],
    /// [`DistanceError::Asymmetric`] or
    /// [`DistanceError::TriangleInequality`] when the rows do not describe a
    /// valid table.
    pub fn from_rows(
        locations: Vec<Location>,
        minutes: Vec<Vec<Minutes>>,
    ) -> Result<Self, DistanceError> {
        let expected = locations.len();
        if minutes.len() != expected {
            return Err(DistanceError::NotSquare {
                row: minutes.len(),
                found: 0,
                expected,
            });
        }

        let mut index = HashMap::with_capacity(expected);
        for (idx, (location, row)) in locations.iter().zip(&minutes).enumerate() {
            if index.insert(location.clone(), idx).is_some() {
                return Err(DistanceError::DuplicateLocation {
                    location: location.clone(),
                });
            }
            if row.len() != expected {
                return Err(DistanceError::NotSquare {
                    row: idx,
                    found: row.len(),
                    expected,
                });
            }
            match row.get(idx) {
                Some(0) => {}
                Some(&other) => {
                    return Err(DistanceError::NonZeroDiagonal {
                        location: location.clone(),
                        minutes: other,
                    });
                }
                None => {}
            }
        }
        check_metric(&locations, &minutes)?;

        Ok(Self {
            locations,
            index,
            minutes,
        })
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the table has no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in row order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Dense index of `location`, if present.
    #[must_use]
    pub fn index_of(&self, location: &str) -> Option<usize> {
        self.index.get(location).copied()
    }

    /// Minimal travel time from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::UnknownLocation`] for a missing endpoint.
    pub fn distance(&self, origin: &str, destination: &str) -> Result<Minutes, DistanceError> {
        let from = self.require(origin)?;
        let to = self.require(destination)?;
        self.minutes_between(from, to)
            .ok_or_else(|| DistanceError::UnknownLocation {
                location: Location::new(destination),
            })
    }

    /// Travel times from `origin` to every location, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::UnknownLocation`] when `origin` is absent.
    pub fn all_distances_from<'a>(
        &'a self,
        origin: &str,
    ) -> Result<impl Iterator<Item = (&'a Location, Minutes)> + use<'a>, DistanceError> {
        let from = self.require(origin)?;
        let row = self.row(from).unwrap_or_default();
        Ok(self.locations.iter().zip(row.iter().copied()))
    }

    /// Row of travel times for dense index `origin`.
    #[must_use]
    pub fn row(&self, origin: usize) -> Option<&[Minutes]> {
        self.minutes.get(origin).map(Vec::as_slice)
    }

    /// Travel time between two dense indices.
    #[must_use]
    pub fn minutes_between(&self, from: usize, to: usize) -> Option<Minutes> {
        self.minutes.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Total travel time of a walk, summing consecutive table lookups.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::UnknownLocation`] for a location outside the
    /// table.
    pub fn walk_minutes(&self, walk: &[Location]) -> Result<Minutes, DistanceError> {
        walk.windows(2).try_fold(0, |total: Minutes, pair| match pair {
            [from, to] => Ok(total.saturating_add(self.distance(from.as_str(), to.as_str())?)),
            _ => Ok(total),
        })
    }

    fn require(&self, location: &str) -> Result<usize, DistanceError> {
        self.index_of(location)
            .ok_or_else(|| DistanceError::UnknownLocation {
                location: Location::new(location),
            })
    }
}

/// Reject rows that are asymmetric or admit a shorter detour.
///
/// Expects square rows; runs in cubic time over the location count.
fn check_metric(locations: &[Location], minutes: &[Vec<Minutes>]) -> Result<(), DistanceError> {
    for (from_idx, (from, row)) in locations.iter().zip(minutes).enumerate() {
        for (to_idx, (to, &direct)) in locations.iter().zip(row).enumerate() {
            let back = minutes
                .get(to_idx)
                .and_then(|other| other.get(from_idx))
                .copied()
                .unwrap_or(direct);
            if back != direct {
                return Err(DistanceError::Asymmetric {
                    from: from.clone(),
                    to: to.clone(),
                    there: direct,
                    back,
                });
            }
            for (via_idx, (via, via_row)) in locations.iter().zip(minutes).enumerate() {
                let detour = row
                    .get(via_idx)
                    .zip(via_row.get(to_idx))
                    .and_then(|(&first, &second)| first.checked_add(second));
                if let Some(detour) = detour
                    && detour < direct
                {
                    return Err(DistanceError::TriangleInequality {
                        from: from.clone(),
                        to: to.clone(),
                        via: via.clone(),
                        direct,
                        detour,
                    });
                }
            }
        }
    }
    Ok(())
}
