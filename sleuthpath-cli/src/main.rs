//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(err) = sleuthpath_cli::run() {
        eprintln!("sleuthpath: {err}");
        std::process::exit(1);
    }
}

/// Send log records to stderr, filtered by `SLEUTHPATH_LOG` (default `warn`).
///
/// Stdout is reserved for the JSON reports.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SLEUTHPATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
