//! # aqplot CLI
//!
//! Command line front end for the aqplot chart builders.
//!
//! Reads a daily reading set as JSON from a file or stdin, builds the
//! standard or small-multiples range barplot configuration and writes it to
//! stdout. Logs go to stderr so the output stays machine-readable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod args;
pub mod error;

pub use app::*;
pub use args::*;
pub use error::*;
