//! Test utilities and shared test helpers for aqplot.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use chrono::NaiveDate;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for a calendar date.
pub fn mock_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Reading-set fixtures in the JSON shape accepted by the chart builders.
pub mod reading_fixtures {
    use super::mock_date;
    use chrono::Duration;
    use serde_json::{json, Value};

    /// Two days at "Site A" in Los Angeles.
    pub fn site_a_json() -> Value {
        json!({
            "daily_datetime": ["2023-01-01", "2023-01-02"],
            "daily_min": [2.0, 5.0],
            "daily_mean": [6.0, 10.0],
            "daily_max": [12.0, 15.0],
            "locationName": "Site A",
            "timezone": "America/Los_Angeles"
        })
    }

    /// A week of smoke-affected readings crossing several AQI categories.
    pub fn smoke_week_json() -> Value {
        let start = mock_date(2020, 9, 8);
        let days: Vec<String> = (0..7)
            .map(|i| (start + Duration::days(i)).format("%Y-%m-%d").to_string())
            .collect();
        json!({
            "daily_datetime": days,
            "daily_min": [3.1, 8.0, 20.5, 60.2, 140.0, 35.0, 4.0],
            "daily_mean": [7.5, 22.4, 48.9, 110.3, 260.7, 80.1, 9.0],
            "daily_max": [12.0, 40.3, 90.0, 190.8, 480.2, 150.6, 15.5],
            "locationName": "Paradise, CA",
            "timezone": "America/Los_Angeles"
        })
    }
}

/// Property-based testing utilities using proptest.
pub mod property_testing {
    use super::mock_date;
    use chrono::Duration;
    use proptest::prelude::*;

    /// Strategy for one day's `(min, mean, max)` with `min <= mean <= max`.
    pub fn daily_triple_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
        (0.0f64..500.0, 0.0f64..1.0, 0.0f64..200.0).prop_map(|(min, frac, spread)| {
            let max = min + spread;
            let mean = (min + (max - min) * frac).clamp(min, max);
            (min, mean, max)
        })
    }

    /// Strategy for consecutive ISO dates paired with valid daily triples.
    pub fn daily_series_strategy(
        max_days: usize,
    ) -> impl Strategy<Value = (Vec<String>, Vec<(f64, f64, f64)>)> {
        (
            0i64..3650,
            prop::collection::vec(daily_triple_strategy(), 1..=max_days.max(1)),
        )
            .prop_map(|(offset, triples)| {
                let start = mock_date(2015, 1, 1) + Duration::days(offset);
                let days = (0..triples.len())
                    .map(|i| (start + Duration::days(i as i64)).format("%Y-%m-%d").to_string())
                    .collect();
                (days, triples)
            })
    }
}
