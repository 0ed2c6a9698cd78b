//! Configuration schema definitions using serde.

use aqplot_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Main configuration structure for aqplot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chart styling shared by every layout.
    pub chart: ChartStyle,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Presentation settings for daily range barplots.
///
/// Defaults reproduce the stock chart exactly; see [`crate::defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// AQI breakpoint set used for threshold lines and mean colours.
    pub aqi_version: u8,
    /// Flat colour of the min/max range bars.
    pub range_color: String,
    /// Outline colour of the mean markers.
    pub marker_line_color: String,
    /// Outline width of the mean markers.
    pub marker_line_width: f64,
    /// Mean marker radius in the standard layout.
    pub marker_radius: f64,
    /// Mean marker radius in the small-multiples layout.
    pub small_marker_radius: f64,
    /// Marker symbol name understood by the renderer.
    pub marker_symbol: String,
    /// Plot border colour in the standard layout.
    pub plot_border_color: String,
    /// Plot border width in the standard layout.
    pub plot_border_width: f64,
    /// Horizontal grid line colour in the standard layout.
    pub grid_line_color: String,
    /// Horizontal grid line dash style in the standard layout.
    pub grid_line_dash_style: String,
    /// Horizontal grid line width in the standard layout.
    pub grid_line_width: f64,
    /// Y-axis title in the standard layout.
    pub y_axis_title: String,
    /// Legend vertical alignment in the standard layout.
    pub legend_vertical_align: String,
    /// Legend name of the range series.
    pub range_series_name: String,
    /// Legend name of the mean series.
    pub mean_series_name: String,
    /// Title colour in the small-multiples layout.
    pub small_title_color: String,
    /// Title font size in the small-multiples layout.
    pub small_title_font_size: String,
    /// Width of the AQI threshold lines.
    pub threshold_line_width: f64,
    /// strftime pattern for x-axis day labels.
    pub day_label_format: String,
}

/// Logging section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter, `EnvFilter` syntax.
    pub level: String,
    /// Line format.
    pub format: LogFormat,
    /// Optional log file; stderr when unset.
    pub file: Option<String>,
    /// Whether to emit span open/close events.
    pub include_spans: bool,
}

impl LoggingSettings {
    /// Converts the file section into a subscriber configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            include_spans: self.include_spans,
            ..LoggingConfig::default()
        }
    }
}
