//! Timezone and day-label helpers.

use crate::error::{AqPlotError, Result};
use crate::types::DayStamp;
use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;
use std::fmt::Write;

/// Abbreviated month and zero-padded day, e.g. `Jan 01`.
pub const DEFAULT_DAY_LABEL_FORMAT: &str = "%b %d";

/// Resolves an IANA timezone identifier such as `America/Los_Angeles`.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .trim()
        .parse::<Tz>()
        .map_err(|e| AqPlotError::timezone(format!("unknown timezone '{timezone}': {e}")))
}

/// Checks that `format` is a usable strftime pattern.
pub fn validate_label_format(format: &str) -> Result<()> {
    if format.is_empty() {
        return Err(AqPlotError::validation_field(
            "label format cannot be empty",
            "day_label_format",
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(AqPlotError::validation_field(
            format!("invalid strftime pattern '{format}'"),
            "day_label_format",
        ));
    }
    Ok(())
}

/// Formats a day stamp as a category label in an already-resolved timezone.
pub fn format_day_label_in(stamp: &DayStamp, tz: Tz, format: &str) -> Result<String> {
    let local = stamp.local_datetime(tz);
    let mut label = String::new();
    write!(label, "{}", local.format(format)).map_err(|_| {
        AqPlotError::validation_field(
            format!("pattern '{format}' cannot format day stamp {stamp}"),
            "day_label_format",
        )
    })?;
    Ok(label)
}

/// Formats a day stamp as a category label in the named timezone.
pub fn format_day_label(stamp: &DayStamp, timezone: &str, format: &str) -> Result<String> {
    format_day_label_in(stamp, parse_timezone(timezone)?, format)
}
