//! Read a reading set, build the chart, write it out.

use crate::args::Args;
use crate::error::{CliError, CliResult};
use aqplot_charts::{DailyReadingSet, RangeBarplotBuilder};
use aqplot_config::Config;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Parse a reading set from `reader`. `path` only names the source in errors.
pub fn read_readings<R: Read>(mut reader: R, path: Option<&PathBuf>) -> CliResult<DailyReadingSet> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| CliError::read_input(path, e))?;
    serde_json::from_str(&content).map_err(|e| CliError::parse_input(path, e))
}

/// Apply `--title` and `--location` on top of the input document.
pub fn apply_overrides(readings: &mut DailyReadingSet, args: &Args) {
    if let Some(title) = &args.title {
        readings.title = Some(title.clone());
    }
    if let Some(location) = &args.location {
        readings.location_name = Some(location.clone());
    }
}

/// Build the chart for `readings` and serialize it.
pub fn render(config: &Config, args: &Args, readings: &DailyReadingSet) -> CliResult<String> {
    let builder = RangeBarplotBuilder::from_style(args.layout(), config.chart.clone())?;
    let chart = builder.build(readings)?;
    debug!(days = chart.categories().len(), "chart configuration built");

    let json = if args.pretty {
        serde_json::to_string_pretty(&chart)
    } else {
        serde_json::to_string(&chart)
    };
    json.map_err(|e| CliError::Core(e.into()))
}

/// Run one conversion: `input` is used when `args` names no file.
pub fn run<R: Read, W: Write>(config: &Config, args: &Args, input: R, mut output: W) -> CliResult<()> {
    let path = args.input_path();
    let mut readings = match path {
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|e| CliError::read_input(Some(path), e))?;
            read_readings(file, Some(path))?
        }
        None => read_readings(input, None)?,
    };
    apply_overrides(&mut readings, args);

    info!(
        source = %crate::error::source_name(path),
        days = readings.len(),
        layout = ?args.layout(),
        "rendering daily range barplot"
    );

    let json = render(config, args, &readings)?;
    writeln!(output, "{json}").map_err(CliError::WriteOutput)?;
    output.flush().map_err(CliError::WriteOutput)
}
