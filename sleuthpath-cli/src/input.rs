//! Scenario inputs shared by every subcommand.

use std::io::BufReader;

use camino::Utf8Path;
use sleuthpath_core::Scenario;
use sleuthpath_fs::open_utf8_file;

use crate::CliError;

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match sleuthpath_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the scenario at `path`, or the built-in reference building when no
/// path is configured.
pub(crate) fn load_scenario(path: Option<&Utf8Path>) -> Result<Scenario, CliError> {
    let Some(path) = path else {
        log::debug!("no scenario file configured, using the reference building");
        return Scenario::reference().map_err(|err| CliError::ReferenceScenario(Box::new(err)));
    };
    let file = open_utf8_file(path).map_err(|source| CliError::OpenScenario {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario = Scenario::from_json_reader(BufReader::new(file)).map_err(|err| {
        CliError::InvalidScenario {
            path: path.to_path_buf(),
            source: Box::new(err),
        }
    })?;
    log::debug!(
        "loaded scenario {path} with {} locations",
        scenario.graph().len()
    );
    Ok(scenario)
}
