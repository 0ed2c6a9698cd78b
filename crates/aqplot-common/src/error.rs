//! Error types and utilities for aqplot

use thiserror::Error;

/// Result type alias for aqplot operations
pub type Result<T> = std::result::Result<T, AqPlotError>;

/// Main error type for aqplot operations
#[derive(Error, Debug)]
pub enum AqPlotError {
    /// Reading sets that cannot be turned into a coherent chart
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What is wrong with the input.
        message: String,
        /// Offending field, when one can be named.
        field: Option<String>,
    },

    /// Unknown or unusable IANA timezone identifiers
    #[error("Timezone error: {message}")]
    Timezone {
        /// What went wrong.
        message: String,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration values and scale selectors
    #[error("Validation error: {message}")]
    Validation {
        /// What failed validation.
        message: String,
        /// Offending field, when one can be named.
        field: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AqPlotError {
    /// Create a new invalid input error naming the offending field
    pub fn invalid_input_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new timezone error
    pub fn timezone(msg: impl Into<String>) -> Self {
        Self::Timezone { message: msg.into() }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Field named by an input or validation error, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } | Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}
