//! Integration tests for aqplot-charts crate.
//!
//! These tests drive the public builders end to end from JSON input.

use aqplot_charts::{
    daily_range_barplot_config, small_daily_range_barplot_config, AqiCategory, DailyReadingSet,
    Layout, RangeBarplotBuilder, MISSING_COLOR,
};
use aqplot_common::test_utils::{init_test_logging, reading_fixtures};
use aqplot_common::AqPlotError;
use serde_json::json;

fn readings(value: serde_json::Value) -> DailyReadingSet {
    serde_json::from_value(value).expect("valid reading set")
}

#[test]
fn test_site_a_example() {
    init_test_logging();
    let config = daily_range_barplot_config(&readings(reading_fixtures::site_a_json())).unwrap();

    assert_eq!(config.categories(), ["Jan 01", "Jan 02"]);
    assert_eq!(config.range_series().unwrap().data, vec![[2.0, 12.0], [5.0, 15.0]]);
    let means: Vec<f64> = config.mean_series().unwrap().data.iter().map(|p| p.y).collect();
    assert_eq!(means, vec![6.0, 10.0]);
    assert_eq!(config.title.text.as_deref(), Some("Site A"));
    assert_eq!(config.y_axis.max, 50.0);
}

#[test]
fn test_serialized_shape() {
    let value = RangeBarplotBuilder::new(Layout::Standard)
        .build_json(&readings(reading_fixtures::site_a_json()))
        .unwrap();

    assert_eq!(value["accessibility"], json!({ "enabled": false }));
    assert_eq!(value["plotOptions"], json!({ "columnrange": { "animation": false } }));
    assert_eq!(value["chart"]["plotBorderColor"], "#ddd");
    assert_eq!(value["yAxis"]["gridLineColor"], "#ddd");
    assert_eq!(value["yAxis"]["title"]["text"], "PM2.5 (\u{00b5}g/m\u{00b3})");
    assert_eq!(value["legend"]["verticalAlign"], "top");
    assert_eq!(value["series"][0]["name"], "Daily Range");
    assert_eq!(value["series"][0]["color"], "#bbb");
    assert_eq!(value["series"][1]["name"], "Daily Mean");
    assert_eq!(value["series"][1]["marker"]["symbol"], "circle");
    assert_eq!(value["series"][1]["marker"]["lineColor"], "#333");
    assert_eq!(value["series"][1]["data"][0]["color"], "rgb(0,228,0)");
    assert!(value["title"].get("style").is_none());
}

#[test]
fn test_small_serialized_shape() {
    let value = RangeBarplotBuilder::new(Layout::Small)
        .build_json(&readings(reading_fixtures::site_a_json()))
        .unwrap();

    assert_eq!(value["legend"], json!({ "enabled": false }));
    assert_eq!(value["xAxis"]["visible"], false);
    assert_eq!(value["chart"], json!({ "animation": false }));
    assert_eq!(value["title"]["style"], json!({ "color": "#333333", "fontSize": "12px" }));
    assert_eq!(value["yAxis"]["title"]["text"], "");
    assert!(value["yAxis"].get("gridLineDashStyle").is_none());
}

#[test]
fn test_title_rules() {
    let mut input = reading_fixtures::site_a_json();
    input["title"] = json!("");
    let config = daily_range_barplot_config(&readings(input)).unwrap();
    assert_eq!(config.title.text.as_deref(), Some(""));

    let mut input = reading_fixtures::site_a_json();
    input["title"] = json!("Custom");
    let config = small_daily_range_barplot_config(&readings(input)).unwrap();
    assert_eq!(config.title.text.as_deref(), Some("Custom"));

    let mut input = reading_fixtures::site_a_json();
    input.as_object_mut().unwrap().remove("locationName");
    let config = daily_range_barplot_config(&readings(input)).unwrap();
    assert_eq!(config.title.text, None);
    let value = serde_json::to_value(&config).unwrap();
    assert!(value["title"].get("text").is_none());
}

#[test]
fn test_smoke_week_colours_and_ceiling() {
    let config = daily_range_barplot_config(&readings(reading_fixtures::smoke_week_json())).unwrap();

    assert_eq!(config.categories().first().map(String::as_str), Some("Sep 08"));
    assert_eq!(config.categories().len(), 7);
    // Peak mean 260.7 lands on the 400 rung.
    assert_eq!(config.y_axis.max, 400.0);

    let colors: Vec<&str> = config
        .mean_series()
        .unwrap()
        .data
        .iter()
        .map(|p| p.color.as_str())
        .collect();
    assert_eq!(
        colors,
        vec![
            AqiCategory::Good.color(),
            AqiCategory::Moderate.color(),
            AqiCategory::UnhealthyForSensitiveGroups.color(),
            AqiCategory::Unhealthy.color(),
            AqiCategory::Hazardous.color(),
            AqiCategory::Unhealthy.color(),
            AqiCategory::Moderate.color(),
        ]
    );
    assert!(colors.iter().all(|c| *c != MISSING_COLOR));
}

#[test]
fn test_threshold_lines_use_revised_breakpoints() {
    let config = daily_range_barplot_config(&readings(reading_fixtures::site_a_json())).unwrap();
    let values: Vec<f64> = config.y_axis.plot_lines.iter().map(|l| l.value).collect();
    assert_eq!(values, vec![9.0, 35.5, 55.5, 125.5, 225.5]);
    assert_eq!(config.y_axis.plot_lines[2].color, AqiCategory::Unhealthy.color());
}

#[test]
fn test_instants_are_labelled_in_local_time() {
    let input = json!({
        "daily_datetime": ["2023-07-01T07:00:00Z", "2023-07-02T07:00:00Z"],
        "daily_min": [1.0, 1.0],
        "daily_mean": [2.0, 2.0],
        "daily_max": [3.0, 3.0],
        "timezone": "Asia/Tokyo"
    });
    let config = daily_range_barplot_config(&readings(input)).unwrap();
    assert_eq!(config.categories(), ["Jul 01", "Jul 02"]);
}

#[test]
fn test_errors() {
    let mut input = reading_fixtures::site_a_json();
    input["timezone"] = json!("Nowhere/Special");
    let err = daily_range_barplot_config(&readings(input)).unwrap_err();
    assert!(matches!(err, AqPlotError::Timezone { .. }));

    let mut input = reading_fixtures::site_a_json();
    input["daily_mean"] = json!([6.0]);
    let err = small_daily_range_barplot_config(&readings(input)).unwrap_err();
    assert_eq!(err.field(), Some("daily_mean"));

    let empty = json!({
        "daily_datetime": [],
        "daily_min": [],
        "daily_mean": [],
        "daily_max": [],
        "timezone": "UTC"
    });
    let err = daily_range_barplot_config(&readings(empty)).unwrap_err();
    assert!(matches!(err, AqPlotError::InvalidInput { .. }));

    let bad_stamp = json!({
        "daily_datetime": ["yesterday"],
        "daily_min": [1.0],
        "daily_mean": [1.0],
        "daily_max": [1.0],
        "timezone": "UTC"
    });
    assert!(serde_json::from_value::<DailyReadingSet>(bad_stamp).is_err());
}
