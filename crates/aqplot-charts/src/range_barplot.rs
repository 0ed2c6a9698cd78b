//! Daily range barplot configuration builder.
//!
//! One builder serves both the full-size chart and the "small multiples"
//! variant; the two differ only in presentation, never in how the data is
//! derived.

use crate::chart::{
    Accessibility, AxisTitle, ChartConfig, ChartOptions, ColoredPoint, Legend, Marker,
    PlotOptions, RangeSeries, ScatterSeries, Series, SeriesTypeOptions, TextStyle, Title, XAxis,
    YAxis,
};
use crate::readings::DailyReadingSet;
use crate::scale::Pm25AqiScale;
use crate::traits::{ConcentrationScale, DayLabeler, TzDayLabeler};
use aqplot_common::{AqPlotError, Result};
use aqplot_config::ChartStyle;
use tracing::{debug, instrument, warn};

/// Presentation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Full chart with legend, axis titles, plot border and grid styling.
    #[default]
    Standard,
    /// Compact chart for grids of many locations: no legend, no axis
    /// titles, hidden x-axis and smaller markers.
    Small,
}

/// Builds [`ChartConfig`]s from [`DailyReadingSet`]s.
///
/// The scale and labeler are type parameters so callers can swap in other
/// pollutants or label schemes without touching the layout code.
#[derive(Debug, Clone)]
pub struct RangeBarplotBuilder<S = Pm25AqiScale, L = TzDayLabeler> {
    layout: Layout,
    style: ChartStyle,
    scale: S,
    labeler: L,
}

impl RangeBarplotBuilder {
    /// Create a builder with the stock style, PM2.5 scale and `MMM DD` labels
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            style: ChartStyle::default(),
            scale: Pm25AqiScale::default(),
            labeler: TzDayLabeler::default(),
        }
    }

    /// Create a builder whose scale and labeler follow `style`
    pub fn from_style(layout: Layout, style: ChartStyle) -> Result<Self> {
        let scale = Pm25AqiScale::from_style(&style)?;
        let labeler = TzDayLabeler::with_format(style.day_label_format.clone())?;
        Ok(Self {
            layout,
            style,
            scale,
            labeler,
        })
    }
}

impl<S, L> RangeBarplotBuilder<S, L>
where
    S: ConcentrationScale,
    L: DayLabeler,
{
    /// Replace the style. The scale and labeler are kept as they are, so
    /// `style.aqi_version` must match the scale's version or [`Self::build`]
    /// fails; use [`RangeBarplotBuilder::from_style`] to derive both.
    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the concentration scale
    pub fn with_scale<T: ConcentrationScale>(self, scale: T) -> RangeBarplotBuilder<T, L> {
        RangeBarplotBuilder {
            layout: self.layout,
            style: self.style,
            scale,
            labeler: self.labeler,
        }
    }

    /// Replace the day labeler
    pub fn with_labeler<T: DayLabeler>(self, labeler: T) -> RangeBarplotBuilder<S, T> {
        RangeBarplotBuilder {
            layout: self.layout,
            style: self.style,
            scale: self.scale,
            labeler,
        }
    }

    /// Layout this builder produces.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Style in use.
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Build the chart configuration for one reading set.
    #[instrument(skip_all, fields(layout = ?self.layout, days = readings.len()))]
    pub fn build(&self, readings: &DailyReadingSet) -> Result<ChartConfig> {
        if let Err(e) = readings.validate() {
            warn!(error = %e, "rejected daily reading set");
            return Err(e);
        }

        let categories = self
            .labeler
            .day_labels(&readings.daily_datetime, &readings.timezone)?;

        // Validation guarantees at least one finite mean.
        let peak = readings.peak_mean().unwrap_or(0.0);
        let y_max = self.scale.axis_ceiling(peak);
        // Lines and mean colours must come from the same breakpoints.
        let version = self.scale.version();
        if version != self.style.aqi_version {
            warn!(
                style_version = self.style.aqi_version,
                scale_version = version,
                "AQI version mismatch between style and scale"
            );
            return Err(AqPlotError::validation_field(
                format!(
                    "style selects AQI version {} but the scale colours with version {version}",
                    self.style.aqi_version
                ),
                "aqi_version",
            ));
        }
        let plot_lines = self.scale.threshold_lines(version)?;

        let range_data = readings.iter().map(|day| [day.min, day.max]).collect();
        let mean_data = readings
            .iter()
            .map(|day| ColoredPoint {
                y: day.mean,
                color: self.scale.color_for(day.mean),
            })
            .collect();

        let style = &self.style;
        let small = self.layout == Layout::Small;

        let chart = if small {
            ChartOptions {
                animation: Some(false),
                ..ChartOptions::default()
            }
        } else {
            ChartOptions {
                plot_border_color: Some(style.plot_border_color.clone()),
                plot_border_width: Some(style.plot_border_width),
                animation: None,
            }
        };

        let title = Title {
            text: readings.resolved_title().map(str::to_string),
            style: small.then(|| TextStyle {
                color: style.small_title_color.clone(),
                font_size: style.small_title_font_size.clone(),
            }),
        };

        let y_axis = YAxis {
            min: 0.0,
            max: y_max,
            grid_line_color: (!small).then(|| style.grid_line_color.clone()),
            grid_line_dash_style: (!small).then(|| style.grid_line_dash_style.clone()),
            grid_line_width: (!small).then_some(style.grid_line_width),
            title: AxisTitle {
                text: if small {
                    String::new()
                } else {
                    style.y_axis_title.clone()
                },
            },
            plot_lines,
        };

        let legend = Legend {
            enabled: !small,
            vertical_align: (!small).then(|| style.legend_vertical_align.clone()),
        };

        let series = vec![
            Series::Columnrange(RangeSeries {
                name: style.range_series_name.clone(),
                data: range_data,
                color: style.range_color.clone(),
            }),
            Series::Scatter(ScatterSeries {
                name: style.mean_series_name.clone(),
                data: mean_data,
                animation: false,
                marker: Marker {
                    radius: if small {
                        style.small_marker_radius
                    } else {
                        style.marker_radius
                    },
                    symbol: style.marker_symbol.clone(),
                    line_color: style.marker_line_color.clone(),
                    line_width: style.marker_line_width,
                },
            }),
        ];

        debug!(y_max, peak, "built daily range barplot");

        Ok(ChartConfig {
            accessibility: Accessibility { enabled: false },
            chart,
            plot_options: PlotOptions {
                columnrange: SeriesTypeOptions { animation: false },
            },
            title,
            x_axis: XAxis {
                categories,
                visible: small.then_some(false),
            },
            y_axis,
            legend,
            series,
        })
    }

    /// Build the chart configuration as a JSON value.
    pub fn build_json(&self, readings: &DailyReadingSet) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.build(readings)?)?)
    }
}

impl Default for RangeBarplotBuilder {
    fn default() -> Self {
        Self::new(Layout::Standard)
    }
}

/// Full-size daily range barplot with the stock style.
pub fn daily_range_barplot_config(readings: &DailyReadingSet) -> Result<ChartConfig> {
    RangeBarplotBuilder::new(Layout::Standard).build(readings)
}

/// Small-multiples daily range barplot with the stock style.
pub fn small_daily_range_barplot_config(readings: &DailyReadingSet) -> Result<ChartConfig> {
    RangeBarplotBuilder::new(Layout::Small).build(readings)
}
