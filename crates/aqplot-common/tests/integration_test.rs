//! Integration tests for aqplot-common crate.

use aqplot_common::{
    format_day_label, parse_timezone, validate_label_format, AqPlotError, DayStamp,
    DEFAULT_DAY_LABEL_FORMAT,
};

#[test]
fn test_labels_follow_input_order() {
    let stamps: Vec<DayStamp> = ["2023-12-31", "2024-01-01", "2024-02-29"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let labels: Vec<String> = stamps
        .iter()
        .map(|s| format_day_label(s, "UTC", DEFAULT_DAY_LABEL_FORMAT).unwrap())
        .collect();

    assert_eq!(labels, vec!["Dec 31", "Jan 01", "Feb 29"]);
}

#[test]
fn test_local_wall_time_is_not_shifted() {
    let stamp: DayStamp = "2023-06-15T23:30:00".parse().unwrap();
    assert_eq!(
        format_day_label(&stamp, "Pacific/Auckland", DEFAULT_DAY_LABEL_FORMAT).unwrap(),
        "Jun 15"
    );
}

#[test]
fn test_custom_label_format() {
    let stamp: DayStamp = "2023-06-15".parse().unwrap();
    assert!(validate_label_format("%d/%m").is_ok());
    assert_eq!(format_day_label(&stamp, "UTC", "%d/%m").unwrap(), "15/06");
}

#[test]
fn test_time_specifiers_on_dates_use_midnight() {
    let stamp: DayStamp = "2023-06-15".parse().unwrap();
    assert_eq!(format_day_label(&stamp, "UTC", "%b %d %H:%M").unwrap(), "Jun 15 00:00");
}

#[test]
fn test_unknown_timezone_is_reported() {
    let stamp: DayStamp = "2023-06-15".parse().unwrap();
    let err = format_day_label(&stamp, "Atlantis/Capital", DEFAULT_DAY_LABEL_FORMAT).unwrap_err();
    assert!(matches!(err, AqPlotError::Timezone { .. }));
    assert!(err.to_string().contains("Atlantis/Capital"));
    assert!(parse_timezone("  Europe/Paris ").is_ok());
}
