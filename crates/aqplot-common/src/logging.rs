//! Structured logging infrastructure for aqplot

use crate::error::{AqPlotError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = AqPlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(AqPlotError::validation_field(
                format!("unknown log format '{other}' (expected pretty, compact or json)"),
                "logging.format",
            )),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "aqplot_charts=trace")
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Optional file path for log output; stderr when unset
    pub file_path: Option<String>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Logs never go to stdout: the CLI writes chart JSON there.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AqPlotError::config(format!("invalid log filter '{}': {e}", config.level)))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let to_file = config.file_path.is_some();
    let writer = match &config.file_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_span_events(span_events)
                    .with_ansi(!to_file)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_span_events(span_events)
                    .with_ansi(!to_file)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| AqPlotError::config(format!("failed to install log subscriber: {e}")))
}
