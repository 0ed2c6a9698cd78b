//! Chart configuration tree handed to the rendering library.
//!
//! Field names serialize in camelCase and unset options are omitted, so the
//! JSON form can be passed straight to a Highcharts-style renderer.

use serde::{Deserialize, Serialize};

/// Complete configuration for one daily range barplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Renderer accessibility module switch.
    pub accessibility: Accessibility,
    /// Chart-level options.
    pub chart: ChartOptions,
    /// Per-series-type defaults.
    pub plot_options: PlotOptions,
    /// Chart title.
    pub title: Title,
    /// Category axis with one label per day.
    pub x_axis: XAxis,
    /// Concentration axis.
    pub y_axis: YAxis,
    /// Legend settings.
    pub legend: Legend,
    /// Range series followed by the mean series.
    pub series: Vec<Series>,
}

impl ChartConfig {
    /// X-axis category labels.
    pub fn categories(&self) -> &[String] {
        &self.x_axis.categories
    }

    /// The min/max range series, if present.
    pub fn range_series(&self) -> Option<&RangeSeries> {
        self.series.iter().find_map(|s| match s {
            Series::Columnrange(range) => Some(range),
            Series::Scatter(_) => None,
        })
    }

    /// The coloured mean series, if present.
    pub fn mean_series(&self) -> Option<&ScatterSeries> {
        self.series.iter().find_map(|s| match s {
            Series::Scatter(scatter) => Some(scatter),
            Series::Columnrange(_) => None,
        })
    }
}

/// Accessibility module switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessibility {
    /// Whether the module is enabled.
    pub enabled: bool,
}

/// Chart-level options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Plot area border colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_border_color: Option<String>,
    /// Plot area border width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_border_width: Option<f64>,
    /// Whole-chart animation switch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
}

/// Per-series-type defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Defaults for column-range series.
    pub columnrange: SeriesTypeOptions,
}

/// Defaults applied to every series of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesTypeOptions {
    /// Whether series of this type animate in.
    pub animation: bool,
}

/// Chart title.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Title {
    /// Title text; omitted entirely when there is nothing to show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Text style override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

/// CSS-like text styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Text colour.
    pub color: String,
    /// Font size, e.g. `12px`.
    pub font_size: String,
}

/// Category x-axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XAxis {
    /// One label per day, in input order.
    pub categories: Vec<String>,
    /// Axis visibility; unset means visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Concentration y-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    /// Lower bound, always zero.
    pub min: f64,
    /// Upper bound from the concentration scale.
    pub max: f64,
    /// Grid line colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_color: Option<String>,
    /// Grid line dash style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_dash_style: Option<String>,
    /// Grid line width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_width: Option<f64>,
    /// Axis title.
    pub title: AxisTitle,
    /// Horizontal threshold lines.
    pub plot_lines: Vec<PlotLine>,
}

/// Axis title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitle {
    /// Title text; empty hides the title.
    pub text: String,
}

/// Horizontal reference line at a fixed concentration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotLine {
    /// Concentration the line is drawn at.
    pub value: f64,
    /// Line colour.
    pub color: String,
    /// Line width in pixels.
    pub width: f64,
}

/// Legend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    /// Whether the legend is shown.
    pub enabled: bool,
    /// Vertical placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
}

/// A chart series, tagged by renderer series type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    /// Vertical band between two values per category.
    Columnrange(RangeSeries),
    /// Free-standing markers.
    Scatter(ScatterSeries),
}

/// Daily min/max bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSeries {
    /// Legend name.
    pub name: String,
    /// `[low, high]` per category.
    pub data: Vec<[f64; 2]>,
    /// Flat band colour.
    pub color: String,
}

/// Daily mean markers, individually coloured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    /// Legend name.
    pub name: String,
    /// One point per category.
    pub data: Vec<ColoredPoint>,
    /// Whether the series animates in.
    pub animation: bool,
    /// Marker styling.
    pub marker: Marker,
}

/// A point carrying its own colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint {
    /// Value.
    pub y: f64,
    /// Fill colour.
    pub color: String,
}

/// Scatter marker styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Marker radius in pixels.
    pub radius: f64,
    /// Symbol name.
    pub symbol: String,
    /// Outline colour.
    pub line_color: String,
    /// Outline width.
    pub line_width: f64,
}
