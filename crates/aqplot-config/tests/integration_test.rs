//! Integration tests for aqplot-config crate.

use aqplot_common::{AqPlotError, LogFormat};
use aqplot_config::{ChartStyle, Config, ConfigLoader, ConfigValidator};
use std::error::Error;
use std::io::Write;

fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp config file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_default_config_validation() {
    let config = Config::default();
    assert!(ConfigValidator::validate(&config).is_ok());
    assert_eq!(config.chart, ChartStyle::default());
}

#[test]
fn test_load_yaml_file() {
    let file = write_config(
        ".yaml",
        r##"
chart:
  range_color: "#aaa"
  marker_radius: 4
  y_axis_title: "PM2.5"
logging:
  level: info
  format: compact
"##,
    );

    let config = ConfigLoader::load_config(file.path()).unwrap();
    assert_eq!(config.chart.range_color, "#aaa");
    assert_eq!(config.chart.marker_radius, 4.0);
    assert_eq!(config.chart.y_axis_title, "PM2.5");
    assert_eq!(config.chart.mean_series_name, "Daily Mean");
    assert_eq!(config.logging.format, LogFormat::Compact);
}

#[test]
fn test_load_toml_file() {
    let file = write_config(".toml", "[chart]\nday_label_format = \"%d %b\"\n");
    let config = ConfigLoader::load_from(Some(file.path())).unwrap();
    assert_eq!(config.chart.day_label_format, "%d %b");
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let file = write_config(".yaml", "chart:\n  aqi_version: 7\n");
    let err = ConfigLoader::load_config(file.path()).unwrap_err();
    assert!(matches!(err, AqPlotError::Validation { .. }));
}

#[test]
fn test_parse_errors_keep_their_source() {
    let file = write_config(".yaml", "chart: [not, a, map\n");
    let err = ConfigLoader::load_config(file.path()).unwrap_err();
    assert!(matches!(err, AqPlotError::Config { .. }));
    assert!(err.source().is_some());
}

#[test]
fn test_missing_file() {
    let err = ConfigLoader::load_config("/definitely/not/here/aqplot.yaml").unwrap_err();
    assert!(matches!(err, AqPlotError::Config { .. }));
}

#[test]
fn test_logging_settings_conversion() {
    let file = write_config(".yaml", "logging:\n  level: debug\n  file: /tmp/aqplot.log\n  include_spans: true\n");
    let config = ConfigLoader::load_config(file.path()).unwrap();
    let logging = config.logging.to_logging_config();
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.file_path.as_deref(), Some("/tmp/aqplot.log"));
    assert!(logging.include_spans);
}
