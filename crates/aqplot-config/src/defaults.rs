//! Default values reproducing the stock daily range barplot.

use crate::schema::{ChartStyle, LoggingSettings};
use aqplot_common::{LogFormat, DEFAULT_DAY_LABEL_FORMAT};

/// AQI breakpoint set applied when none is configured.
pub const DEFAULT_AQI_VERSION: u8 = 2;

/// AQI breakpoint sets the chart builders know about.
pub const SUPPORTED_AQI_VERSIONS: [u8; 2] = [1, 2];

/// Y-axis title for PM2.5 concentrations.
pub const PM25_AXIS_TITLE: &str = "PM2.5 (\u{00b5}g/m\u{00b3})";

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            aqi_version: DEFAULT_AQI_VERSION,
            range_color: "#bbb".to_string(),
            marker_line_color: "#333".to_string(),
            marker_line_width: 0.5,
            marker_radius: 3.0,
            small_marker_radius: 2.0,
            marker_symbol: "circle".to_string(),
            plot_border_color: "#ddd".to_string(),
            plot_border_width: 1.0,
            grid_line_color: "#ddd".to_string(),
            grid_line_dash_style: "Dash".to_string(),
            grid_line_width: 1.0,
            y_axis_title: PM25_AXIS_TITLE.to_string(),
            legend_vertical_align: "top".to_string(),
            range_series_name: "Daily Range".to_string(),
            mean_series_name: "Daily Mean".to_string(),
            small_title_color: "#333333".to_string(),
            small_title_font_size: "12px".to_string(),
            threshold_line_width: 2.0,
            day_label_format: DEFAULT_DAY_LABEL_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            file: None,
            include_spans: false,
        }
    }
}
