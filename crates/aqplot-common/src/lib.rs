//! # aqplot Common
//!
//! Shared types, utilities, and common functionality for aqplot.
//!
//! This crate provides the error taxonomy, the [`DayStamp`] timestamp type,
//! timezone-aware day labelling, and the logging bootstrap used by every
//! other crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{AqPlotError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::*;
pub use utils::*;
