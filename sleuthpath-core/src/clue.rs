//! Clues, the per-location clue index and derived location values.
//!
//! A [`Clue`] lives at one location and weighs evidence against one or more
//! suspects. The [`ClueIndex`] groups clues by location once; the
//! [`LocationValues`] derived from it feed the route solver.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{CaseGraph, Location, Score};

/// Evidence a clue carries against a single suspect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evidence {
    /// Suspect name.
    pub suspect: String,
    /// Positive evidence weight.
    pub weight: u32,
}

impl Evidence {
    /// Construct an evidence entry.
    pub fn new(suspect: impl Into<String>, weight: u32) -> Self {
        Self {
            suspect: suspect.into(),
            weight,
        }
    }
}

/// A piece of evidence found at a location.
///
/// # Examples
/// ```
/// use sleuthpath_core::{Clue, Evidence};
///
/// # fn main() -> Result<(), sleuthpath_core::ClueError> {
/// let clue = Clue::new(
///     "P5",
///     "B6",
///     "Wax and binoculars",
///     vec![Evidence::new("Rodrigo", 3)],
/// )?;
/// assert_eq!(clue.value(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clue {
    /// Unique clue identifier.
    pub id: String,
    /// Where the clue is found.
    pub location: Location,
    /// Human-readable description.
    pub description: String,
    /// Evidence weights, in the order they were recorded.
    pub evidence: Vec<Evidence>,
}

/// Errors raised while validating clues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    /// The clue names no suspects.
    #[error("clue {clue} carries no evidence")]
    MissingEvidence {
        /// Clue identifier.
        clue: String,
    },
    /// A suspect was given a zero weight.
    #[error("clue {clue} gives {suspect} a zero weight")]
    ZeroWeight {
        /// Clue identifier.
        clue: String,
        /// Suspect with the zero weight.
        suspect: String,
    },
    /// The same suspect appears twice in one clue.
    #[error("clue {clue} lists {suspect} more than once")]
    DuplicateSuspect {
        /// Clue identifier.
        clue: String,
        /// Repeated suspect.
        suspect: String,
    },
    /// Two clues share an identifier.
    #[error("clue id {clue} is used more than once")]
    DuplicateId {
        /// Repeated identifier.
        clue: String,
    },
    /// The clue sits at a location outside the graph.
    #[error("clue {clue} is placed at unknown location {location}")]
    UnknownLocation {
        /// Clue identifier.
        clue: String,
        /// The missing location.
        location: Location,
    },
}

impl Clue {
    /// Validate and construct a clue.
    ///
    /// # Errors
    ///
    /// See [`Clue::validate`].
    pub fn new(
        id: impl Into<String>,
        location: impl Into<Location>,
        description: impl Into<String>,
        evidence: Vec<Evidence>,
    ) -> Result<Self, ClueError> {
        let clue = Self {
            id: id.into(),
            location: location.into(),
            description: description.into(),
            evidence,
        };
        clue.validate()?;
        Ok(clue)
    }

    /// Check the evidence list of a clue built by hand or deserialised.
    ///
    /// # Errors
    ///
    /// Returns [`ClueError::MissingEvidence`] for an empty list,
    /// [`ClueError::ZeroWeight`] for a zero weight and
    /// [`ClueError::DuplicateSuspect`] when a suspect repeats.
    pub fn validate(&self) -> Result<(), ClueError> {
        if self.evidence.is_empty() {
            return Err(ClueError::MissingEvidence {
                clue: self.id.clone(),
            });
        }
        let mut seen = HashSet::with_capacity(self.evidence.len());
        for entry in &self.evidence {
            if entry.weight == 0 {
                return Err(ClueError::ZeroWeight {
                    clue: self.id.clone(),
                    suspect: entry.suspect.clone(),
                });
            }
            if !seen.insert(entry.suspect.as_str()) {
                return Err(ClueError::DuplicateSuspect {
                    clue: self.id.clone(),
                    suspect: entry.suspect.clone(),
                });
            }
        }
        Ok(())
    }

    /// Total evidence weight carried by this clue.
    #[must_use]
    pub fn value(&self) -> Score {
        self.evidence.iter().map(|e| Score::from(e.weight)).sum()
    }
}

/// Read-only grouping of clues by location.
///
/// Clue order is preserved, both overall and within each location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClueIndex {
    clues: Vec<Clue>,
    by_location: HashMap<Location, Vec<usize>>,
}

impl ClueIndex {
    /// Validate `clues` against `graph` and index them by location.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClueError`] found: an invalid clue, a repeated
    /// identifier or a location the graph does not contain.
    pub fn new(graph: &CaseGraph, clues: Vec<Clue>) -> Result<Self, ClueError> {
        let mut ids = HashSet::with_capacity(clues.len());
        let mut by_location: HashMap<Location, Vec<usize>> = HashMap::new();
        for (idx, clue) in clues.iter().enumerate() {
            clue.validate()?;
            if !ids.insert(clue.id.as_str()) {
                return Err(ClueError::DuplicateId {
                    clue: clue.id.clone(),
                });
            }
            if !graph.contains(clue.location.as_str()) {
                return Err(ClueError::UnknownLocation {
                    clue: clue.id.clone(),
                    location: clue.location.clone(),
                });
            }
            by_location
                .entry(clue.location.clone())
                .or_default()
                .push(idx);
        }
        Ok(Self { clues, by_location })
    }

    /// Every clue, in input order.
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Clues found at `location`; empty for locations without clues.
    pub fn clues_at<'a>(&'a self, location: &str) -> impl Iterator<Item = &'a Clue> + use<'a> {
        self.by_location
            .get(location)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .filter_map(|&idx| self.clues.get(idx))
    }

    /// Sum of clue values at `location`.
    #[must_use]
    pub fn location_value(&self, location: &str) -> Score {
        self.clues_at(location).map(Clue::value).sum()
    }

    /// Value of every location in `graph`, zero where there are no clues.
    #[must_use]
    pub fn location_values(&self, graph: &CaseGraph) -> LocationValues {
        graph
            .locations()
            .iter()
            .map(|loc| (loc.clone(), self.location_value(loc.as_str())))
            .collect()
    }
}

/// Evidence value obtainable at each location, counted once per visit.
///
/// # Examples
/// ```
/// use sleuthpath_core::{Location, LocationValues};
///
/// let values: LocationValues = [(Location::new("F7"), 4)].into_iter().collect();
/// assert_eq!(values.get("F7"), 4);
/// assert_eq!(values.get("C0"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationValues {
    values: HashMap<Location, Score>,
}

impl LocationValues {
    /// Value of `location`, zero when unknown.
    #[must_use]
    pub fn get(&self, location: &str) -> Score {
        self.values.get(location).copied().unwrap_or_default()
    }

    /// Sum of all location values.
    #[must_use]
    pub fn total(&self) -> Score {
        self.values.values().sum()
    }

    /// Iterate over `(location, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Location, Score)> + '_ {
        self.values.iter().map(|(loc, &v)| (loc, v))
    }
}

impl FromIterator<(Location, Score)> for LocationValues {
    fn from_iter<I: IntoIterator<Item = (Location, Score)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
