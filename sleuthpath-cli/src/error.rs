//! Error types emitted by the SleuthPath CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`; large sources are boxed.

use std::sync::Arc;

use camino::Utf8PathBuf;
use sleuthpath_core::{
    DistanceError, GraphError, PathError, ScenarioError, SolveError, SolveRequestValidationError,
};
use thiserror::Error;

/// Errors emitted by the SleuthPath CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// The configured path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// The configured path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// The configured path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the scenario file failed.
    #[error("failed to open scenario at {path:?}: {source}")]
    OpenScenario {
        /// Scenario file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The scenario file could not be decoded or failed validation.
    #[error("invalid scenario in {path:?}: {source}")]
    InvalidScenario {
        /// Scenario file path.
        path: Utf8PathBuf,
        /// Parse or validation failure.
        #[source]
        source: Box<ScenarioError>,
    },
    /// The built-in reference scenario failed to build.
    #[error("failed to build the reference scenario: {0}")]
    ReferenceScenario(#[source] Box<ScenarioError>),
    /// The scenario layout has no complete distance table.
    #[error("failed to build the distance table: {0}")]
    DistanceTable(#[source] DistanceError),
    /// The plan request failed validation.
    #[error("plan request failed validation: {source}")]
    InvalidPlanRequest {
        /// The validation failure.
        #[source]
        source: SolveRequestValidationError,
    },
    /// The solver rejected the request.
    #[error("solver failed: {source}")]
    Solve {
        /// The solver failure.
        #[source]
        source: SolveError,
    },
    /// Exploring the scenario failed.
    #[error("exploration failed: {0}")]
    Explore(#[source] GraphError),
    /// Reconstructing the route to a destination failed.
    #[error("route lookup failed: {0}")]
    Route(#[source] PathError),
    /// Serializing a report failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing a report failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
