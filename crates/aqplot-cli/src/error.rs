//! Application-wide error types using thiserror.

use aqplot_common::AqPlotError;
use std::path::PathBuf;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Chart, configuration or validation failure from the library crates.
    #[error(transparent)]
    Core(#[from] AqPlotError),

    /// The reading set could not be read.
    #[error("failed to read input from {source_name}")]
    ReadInput {
        /// File path, or `<stdin>`.
        source_name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid reading set document.
    #[error("input from {source_name} is not a valid daily reading set")]
    ParseInput {
        /// File path, or `<stdin>`.
        source_name: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The chart could not be written.
    #[error("failed to write chart configuration")]
    WriteOutput(#[source] std::io::Error),
}

impl CliError {
    pub(crate) fn read_input(path: Option<&PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            source_name: source_name(path),
            source,
        }
    }

    pub(crate) fn parse_input(path: Option<&PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseInput {
            source_name: source_name(path),
            source,
        }
    }
}

pub(crate) fn source_name(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
