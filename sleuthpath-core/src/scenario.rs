//! Case scenarios: a building layout, its clues and a default origin.
//!
//! A [`ScenarioDefinition`] is the raw, serialisable form. Turning it into a
//! [`Scenario`] validates the graph, the clues and the origin together.
//! [`Scenario::reference`] provides the six-room building used throughout
//! the documentation and tests.

use thiserror::Error;

use crate::{
    CaseGraph, CaseGraphBuilder, Clue, ClueError, ClueIndex, DistanceError, DistanceTable, Edge,
    Evidence, GraphError, Location, LocationValues,
};

/// Errors raised while assembling a [`Scenario`].
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The layout is not a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A clue failed validation.
    #[error(transparent)]
    Clue(#[from] ClueError),
    /// The default origin is not in the layout.
    #[error("origin {origin} is not a location of the scenario")]
    UnknownOrigin {
        /// Requested origin.
        origin: Location,
    },
    /// The scenario document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("invalid scenario document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialisable description of a scenario.
///
/// `locations` is optional; listing locations there fixes their order ahead
/// of the order in which edges mention them and allows a single room
/// without edges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioDefinition {
    /// Default starting location.
    pub origin: Location,
    /// Locations registered before any edge.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locations: Vec<Location>,
    /// Undirected corridors with their travel times.
    pub edges: Vec<Edge>,
    /// Clues placed in the building.
    #[cfg_attr(feature = "serde", serde(default))]
    pub clues: Vec<Clue>,
}

const REFERENCE_EDGES: [(&str, &str, u32); 15] = [
    ("Z10", "F7", 5),
    ("Z10", "B6", 6),
    ("Z10", "A3", 9),
    ("Z10", "C0", 12),
    ("Z10", "S-1", 13),
    ("F7", "B6", 3),
    ("F7", "A3", 6),
    ("F7", "C0", 9),
    ("F7", "S-1", 10),
    ("B6", "A3", 5),
    ("B6", "C0", 8),
    ("B6", "S-1", 9),
    ("A3", "C0", 5),
    ("A3", "S-1", 6),
    ("C0", "S-1", 3),
];

const REFERENCE_CLUES: [(&str, &str, &str, &str, u32); 5] = [
    ("P1", "S-1", "Script 3D de Pepelu", "Pepelu", 4),
    ("P2", "F7", "Tarjeta de Eva a las 19:52", "Eva", 4),
    ("P3", "Z10", "Post-it de Beltrán", "Beltrán", 1),
    ("P4", "A3", "Etiquetas Zara de Adriana", "Adriana", 2),
    ("P5", "B6", "Cera y prismáticos de Rodrigo", "Rodrigo", 3),
];

impl ScenarioDefinition {
    /// The six-room reference building with clues P1 to P5, starting at C0.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            origin: Location::new("C0"),
            locations: Vec::new(),
            edges: REFERENCE_EDGES
                .iter()
                .map(|&(from, to, minutes)| Edge::new(from, to, minutes))
                .collect(),
            clues: REFERENCE_CLUES
                .iter()
                .map(|&(id, location, description, suspect, weight)| Clue {
                    id: id.to_owned(),
                    location: Location::new(location),
                    description: description.to_owned(),
                    evidence: vec![Evidence::new(suspect, weight)],
                })
                .collect(),
        }
    }
}

/// A validated layout with its clues and default origin.
///
/// # Examples
/// ```
/// use sleuthpath_core::Scenario;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let scenario = Scenario::reference()?;
/// assert_eq!(scenario.origin().as_str(), "C0");
/// assert_eq!(scenario.graph().len(), 6);
/// assert_eq!(scenario.location_values().total(), 14);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    graph: CaseGraph,
    clues: ClueIndex,
    origin: Location,
}

impl Scenario {
    /// Validate a definition.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Graph`] for an invalid layout,
    /// [`ScenarioError::Clue`] for an invalid clue and
    /// [`ScenarioError::UnknownOrigin`] when the origin is not a location.
    pub fn from_definition(definition: ScenarioDefinition) -> Result<Self, ScenarioError> {
        let ScenarioDefinition {
            origin,
            locations,
            edges,
            clues,
        } = definition;

        let mut builder = CaseGraphBuilder::new();
        for location in locations {
            builder.location(location);
        }
        for edge in edges {
            builder.edge(edge.from, edge.to, edge.minutes)?;
        }
        let graph = builder.build()?;
        if !graph.contains(origin.as_str()) {
            return Err(ScenarioError::UnknownOrigin { origin });
        }
        let clues = ClueIndex::new(&graph, clues)?;
        log::debug!(
            "loaded scenario with {} locations and {} clues",
            graph.len(),
            clues.clues().len()
        );
        Ok(Self {
            graph,
            clues,
            origin,
        })
    }

    /// The built-in six-room building.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the result mirrors [`Scenario::from_definition`].
    pub fn reference() -> Result<Self, ScenarioError> {
        Self::from_definition(ScenarioDefinition::reference())
    }

    /// Parse and validate a JSON scenario document.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for malformed JSON and any
    /// validation error from [`Scenario::from_definition`].
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, ScenarioError> {
        let definition: ScenarioDefinition = serde_json::from_reader(reader)?;
        Self::from_definition(definition)
    }

    /// The validated layout.
    #[must_use]
    pub const fn graph(&self) -> &CaseGraph {
        &self.graph
    }

    /// Clues indexed by location.
    #[must_use]
    pub const fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// Default starting location.
    #[must_use]
    pub const fn origin(&self) -> &Location {
        &self.origin
    }

    /// All-pairs travel times for the layout.
    ///
    /// # Errors
    ///
    /// Propagates [`DistanceError`]; a validated layout is connected, so
    /// this does not fail for scenarios built here.
    pub fn distance_table(&self) -> Result<DistanceTable, DistanceError> {
        DistanceTable::from_graph(&self.graph)
    }

    /// Evidence value of every location.
    #[must_use]
    pub fn location_values(&self) -> LocationValues {
        self.clues.location_values(&self.graph)
    }
}
