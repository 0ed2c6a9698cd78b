//! # aqplot Charts
//!
//! Chart configuration builders for daily PM2.5 readings.
//!
//! Given a [`DailyReadingSet`], the builders here produce a [`ChartConfig`]:
//! a serializable, Highcharts-style description of a daily range barplot
//! with min/max bands, AQI-coloured daily means and AQI threshold lines.
//!
//! ```
//! use aqplot_charts::{daily_range_barplot_config, DailyReadingSet};
//! use chrono::NaiveDate;
//!
//! let mut readings = DailyReadingSet::new("America/Los_Angeles").with_location_name("Site A");
//! readings.push(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 2.0, 6.0, 12.0);
//!
//! let config = daily_range_barplot_config(&readings)?;
//! assert_eq!(config.categories(), ["Jan 01"]);
//! # Ok::<(), aqplot_common::AqPlotError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod range_barplot;
pub mod readings;
pub mod scale;
pub mod traits;

pub use chart::*;
pub use range_barplot::*;
pub use readings::*;
pub use scale::*;
pub use traits::*;
