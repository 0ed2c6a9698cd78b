//! Common type definitions for daily air-quality readings.

use crate::error::AqPlotError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp of one daily record.
///
/// Daily records usually carry a bare calendar date, but upstream feeds also
/// hand out local wall-clock times or full instants. Dates and wall-clock
/// times are taken as already local to the display timezone; instants are
/// converted into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayStamp {
    /// Calendar date, e.g. `2023-01-01`.
    Date(NaiveDate),
    /// Local wall-clock time without offset, e.g. `2023-01-01T08:00:00`.
    Local(NaiveDateTime),
    /// Instant with an explicit offset, e.g. `2023-01-01T08:00:00Z`.
    Instant(DateTime<FixedOffset>),
}

impl DayStamp {
    /// Wall-clock time of this stamp in `tz`. Bare dates map to local midnight.
    pub fn local_datetime(&self, tz: Tz) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::Local(datetime) => *datetime,
            Self::Instant(instant) => instant.with_timezone(&tz).naive_local(),
        }
    }

    /// Calendar day of this stamp in `tz`.
    pub fn local_date(&self, tz: Tz) -> NaiveDate {
        self.local_datetime(tz).date()
    }
}

impl From<NaiveDate> for DayStamp {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DayStamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::Local(datetime)
    }
}

impl From<DateTime<FixedOffset>> for DayStamp {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self::Instant(instant)
    }
}

impl FromStr for DayStamp {
    type Err = AqPlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Instant(instant));
        }
        if let Ok(datetime) = s.parse::<NaiveDateTime>() {
            return Ok(Self::Local(datetime));
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Ok(Self::Local(datetime));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        Err(AqPlotError::invalid_input_field(
            format!("unrecognised day stamp '{s}'"),
            "daily_datetime",
        ))
    }
}

impl TryFrom<String> for DayStamp {
    type Error = AqPlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayStamp> for String {
    fn from(stamp: DayStamp) -> Self {
        stamp.to_string()
    }
}

impl fmt::Display for DayStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Local(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S")),
            Self::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(
            "2023-01-01".parse::<DayStamp>().unwrap(),
            DayStamp::Date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        );
        assert!(matches!(
            "2023-01-01T08:30:00".parse::<DayStamp>().unwrap(),
            DayStamp::Local(_)
        ));
        assert!(matches!(
            "2023-01-01 08:30:00".parse::<DayStamp>().unwrap(),
            DayStamp::Local(_)
        ));
        assert!(matches!(
            "2023-01-01T08:30:00Z".parse::<DayStamp>().unwrap(),
            DayStamp::Instant(_)
        ));
        assert!(matches!(
            "2023-01-01T08:30:00-08:00".parse::<DayStamp>().unwrap(),
            DayStamp::Instant(_)
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "yesterday".parse::<DayStamp>().unwrap_err();
        assert_eq!(err.field(), Some("daily_datetime"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_instant_converts_into_timezone() {
        // 06:00 UTC on Jan 2 is still Jan 1 in Los Angeles.
        let stamp: DayStamp = "2023-01-02T06:00:00Z".parse().unwrap();
        assert_eq!(
            stamp.local_date(chrono_tz::America::Los_Angeles),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(
            stamp.local_date(chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_dates_ignore_timezone() {
        let stamp: DayStamp = "2023-07-04".parse().unwrap();
        assert_eq!(
            stamp.local_date(chrono_tz::Asia::Tokyo),
            NaiveDate::from_ymd_opt(2023, 7, 4).unwrap()
        );
    }

    #[test]
    fn test_serde_uses_strings() {
        let stamps: Vec<DayStamp> = serde_json::from_str(r#"["2023-01-01", "2023-01-02T00:00:00"]"#).unwrap();
        assert_eq!(stamps.len(), 2);

        let json = serde_json::to_string(&stamps).unwrap();
        assert_eq!(json, r#"["2023-01-01","2023-01-02T00:00:00"]"#);

        assert!(serde_json::from_str::<DayStamp>(r#""not a date""#).is_err());
    }
}
