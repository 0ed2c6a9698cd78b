//! Runtime validation of loaded configuration.

use crate::defaults::SUPPORTED_AQI_VERSIONS;
use crate::schema::{ChartStyle, Config, LoggingSettings};
use aqplot_common::{validate_label_format, AqPlotError, Result};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_chart(&config.chart)?;
        Self::validate_logging(&config.logging)
    }

    /// Validates chart styling on its own.
    pub fn validate_chart(style: &ChartStyle) -> Result<()> {
        if !SUPPORTED_AQI_VERSIONS.contains(&style.aqi_version) {
            return Err(AqPlotError::validation_field(
                format!(
                    "unsupported AQI version {} (supported: {:?})",
                    style.aqi_version, SUPPORTED_AQI_VERSIONS
                ),
                "chart.aqi_version",
            ));
        }

        let required = [
            ("chart.range_color", &style.range_color),
            ("chart.marker_line_color", &style.marker_line_color),
            ("chart.marker_symbol", &style.marker_symbol),
            ("chart.plot_border_color", &style.plot_border_color),
            ("chart.grid_line_color", &style.grid_line_color),
            ("chart.small_title_color", &style.small_title_color),
            ("chart.range_series_name", &style.range_series_name),
            ("chart.mean_series_name", &style.mean_series_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AqPlotError::validation_field("value cannot be empty", field));
            }
        }

        let positive = [
            ("chart.marker_radius", style.marker_radius),
            ("chart.small_marker_radius", style.small_marker_radius),
            ("chart.threshold_line_width", style.threshold_line_width),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(AqPlotError::validation_field(
                    format!("must be a positive number, got {value}"),
                    field,
                ));
            }
        }

        let non_negative = [
            ("chart.marker_line_width", style.marker_line_width),
            ("chart.plot_border_width", style.plot_border_width),
            ("chart.grid_line_width", style.grid_line_width),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(AqPlotError::validation_field(
                    format!("must be zero or positive, got {value}"),
                    field,
                ));
            }
        }

        validate_label_format(&style.day_label_format).map_err(|e| match e {
            AqPlotError::Validation { message, .. } => {
                AqPlotError::validation_field(message, "chart.day_label_format")
            }
            other => other,
        })
    }

    fn validate_logging(logging: &LoggingSettings) -> Result<()> {
        if logging.level.trim().is_empty() {
            return Err(AqPlotError::validation_field(
                "log level cannot be empty",
                "logging.level",
            ));
        }
        if logging.file.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(AqPlotError::validation_field(
                "log file path cannot be blank",
                "logging.file",
            ));
        }
        Ok(())
    }
}
