//! Collaborator traits the chart builder is generic over.

use crate::chart::PlotLine;
use aqplot_common::{
    format_day_label_in, parse_timezone, validate_label_format, DayStamp, Result,
    DEFAULT_DAY_LABEL_FORMAT,
};

/// Turns day stamps into x-axis category labels.
pub trait DayLabeler: Send + Sync {
    /// Label for one day, displayed in `timezone`.
    fn day_label(&self, stamp: &DayStamp, timezone: &str) -> Result<String>;

    /// Labels for every day, in input order.
    fn day_labels(&self, stamps: &[DayStamp], timezone: &str) -> Result<Vec<String>> {
        stamps
            .iter()
            .map(|stamp| self.day_label(stamp, timezone))
            .collect()
    }
}

/// Maps concentrations onto axis limits, colours and reference lines.
pub trait ConcentrationScale: Send + Sync {
    /// Y-axis maximum for the largest plotted value.
    fn axis_ceiling(&self, peak: f64) -> f64;

    /// Fill colour for one value.
    fn color_for(&self, value: f64) -> String;

    /// Breakpoint version [`Self::color_for`] colours with.
    fn version(&self) -> u8;

    /// Horizontal threshold lines for a breakpoint `version`.
    fn threshold_lines(&self, version: u8) -> Result<Vec<PlotLine>>;
}

/// strftime-based [`DayLabeler`] backed by the IANA timezone database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TzDayLabeler {
    format: String,
}

impl Default for TzDayLabeler {
    fn default() -> Self {
        Self {
            format: DEFAULT_DAY_LABEL_FORMAT.to_string(),
        }
    }
}

impl TzDayLabeler {
    /// Creates a labeler using a custom strftime pattern.
    pub fn with_format(format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        validate_label_format(&format)?;
        Ok(Self { format })
    }

    /// The strftime pattern in use.
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl DayLabeler for TzDayLabeler {
    fn day_label(&self, stamp: &DayStamp, timezone: &str) -> Result<String> {
        format_day_label_in(stamp, parse_timezone(timezone)?, &self.format)
    }

    // Resolve the zone once for the whole column.
    fn day_labels(&self, stamps: &[DayStamp], timezone: &str) -> Result<Vec<String>> {
        let tz = parse_timezone(timezone)?;
        stamps
            .iter()
            .map(|stamp| format_day_label_in(stamp, tz, &self.format))
            .collect()
    }
}
