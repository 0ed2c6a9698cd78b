//! Command line arguments.

use aqplot_charts::Layout;
use clap::Parser;
use std::path::PathBuf;

/// Turn daily PM2.5 readings (JSON) into a range barplot chart configuration.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "aqplot", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (YAML or TOML)
    #[arg(short, long, env = "AQPLOT_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Emit the small-multiples variant
    #[arg(short, long)]
    pub small: bool,

    /// Chart title; an empty string keeps the title slot but leaves it blank
    #[arg(short, long)]
    pub title: Option<String>,

    /// Location name used when no title is given
    #[arg(long)]
    pub location: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Log level filter, overriding the configuration file
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Reading set JSON file; stdin when omitted or `-`
    pub input: Option<PathBuf>,
}

impl Args {
    /// Layout selected by `--small`.
    pub fn layout(&self) -> Layout {
        if self.small {
            Layout::Small
        } else {
            Layout::Standard
        }
    }

    /// Input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
