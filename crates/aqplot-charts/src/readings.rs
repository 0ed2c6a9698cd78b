//! Daily PM2.5 reading sets, the input of every chart builder.

use aqplot_common::{AqPlotError, DayStamp, Result};
use serde::{Deserialize, Serialize};

/// Daily minimum, mean and maximum PM2.5 for one monitoring location.
///
/// Columns are parallel: index `i` of every `daily_*` vector describes the
/// same day. The JSON form uses the same field names, with `locationName`
/// accepted for `location_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReadingSet {
    /// Day stamps, displayed in `timezone`.
    pub daily_datetime: Vec<DayStamp>,
    /// Daily minimum concentration (µg/m³).
    pub daily_min: Vec<f64>,
    /// Daily mean concentration (µg/m³).
    pub daily_mean: Vec<f64>,
    /// Daily maximum concentration (µg/m³).
    pub daily_max: Vec<f64>,
    /// Monitoring location, used as the title fallback.
    #[serde(default, alias = "locationName", skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    /// IANA timezone identifier for day labels.
    pub timezone: String,
    /// Explicit title. `Some("")` asks the renderer for no title at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One day of a [`DailyReadingSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyReading {
    /// Day stamp.
    pub stamp: DayStamp,
    /// Daily minimum.
    pub min: f64,
    /// Daily mean.
    pub mean: f64,
    /// Daily maximum.
    pub max: f64,
}

impl DailyReadingSet {
    /// Creates an empty set displayed in `timezone`.
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            daily_datetime: Vec::new(),
            daily_min: Vec::new(),
            daily_mean: Vec::new(),
            daily_max: Vec::new(),
            location_name: None,
            timezone: timezone.into(),
            title: None,
        }
    }

    /// Sets the location name.
    #[must_use]
    pub fn with_location_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = Some(name.into());
        self
    }

    /// Sets an explicit title; pass `""` to suppress the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends one day to every column.
    pub fn push(&mut self, stamp: impl Into<DayStamp>, min: f64, mean: f64, max: f64) {
        self.daily_datetime.push(stamp.into());
        self.daily_min.push(min);
        self.daily_mean.push(mean);
        self.daily_max.push(max);
    }

    /// Number of days, taken from the datetime column.
    pub fn len(&self) -> usize {
        self.daily_datetime.len()
    }

    /// Whether the set has no days.
    pub fn is_empty(&self) -> bool {
        self.daily_datetime.is_empty()
    }

    /// Iterates over days in column order, stopping at the shortest column.
    pub fn iter(&self) -> impl Iterator<Item = DailyReading> + '_ {
        self.daily_datetime
            .iter()
            .zip(&self.daily_min)
            .zip(&self.daily_mean)
            .zip(&self.daily_max)
            .map(|(((stamp, min), mean), max)| DailyReading {
                stamp: *stamp,
                min: *min,
                mean: *mean,
                max: *max,
            })
    }

    /// Largest daily mean, or `None` for an empty set.
    pub fn peak_mean(&self) -> Option<f64> {
        self.daily_mean.iter().copied().reduce(f64::max)
    }

    /// The explicit title when present (even if empty), else the location name.
    pub fn resolved_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.location_name.as_deref())
    }

    /// Checks column alignment and `min <= mean <= max` for every day.
    ///
    /// Empty sets are rejected: they have no peak to scale the axis by.
    pub fn validate(&self) -> Result<()> {
        let expected = self.daily_datetime.len();
        for (field, len) in [
            ("daily_min", self.daily_min.len()),
            ("daily_mean", self.daily_mean.len()),
            ("daily_max", self.daily_max.len()),
        ] {
            if len != expected {
                return Err(AqPlotError::invalid_input_field(
                    format!("{field} has {len} values but daily_datetime has {expected}"),
                    field,
                ));
            }
        }

        if expected == 0 {
            return Err(AqPlotError::invalid_input_field(
                "reading set contains no days",
                "daily_datetime",
            ));
        }

        for (i, day) in self.iter().enumerate() {
            for (field, value) in [("daily_min", day.min), ("daily_mean", day.mean), ("daily_max", day.max)] {
                if !value.is_finite() {
                    return Err(AqPlotError::invalid_input_field(
                        format!("day {i} ({}): {field} is not a finite number", day.stamp),
                        field,
                    ));
                }
            }
            if day.min > day.max {
                return Err(AqPlotError::invalid_input_field(
                    format!("day {i} ({}): min {} exceeds max {}", day.stamp, day.min, day.max),
                    "daily_min",
                ));
            }
            if day.mean < day.min || day.mean > day.max {
                return Err(AqPlotError::invalid_input_field(
                    format!(
                        "day {i} ({}): mean {} outside [{}, {}]",
                        day.stamp, day.mean, day.min, day.max
                    ),
                    "daily_mean",
                ));
            }
        }

        Ok(())
    }
}
