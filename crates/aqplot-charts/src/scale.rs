//! PM2.5 Air Quality Index scale: category colours, breakpoints and the
//! y-axis ceiling ladder.

use crate::chart::PlotLine;
use crate::traits::ConcentrationScale;
use aqplot_common::{AqPlotError, Result};
use aqplot_config::ChartStyle;

/// Colour used for values that cannot be categorised.
pub const MISSING_COLOR: &str = "#bbbbbb";

/// Fixed y-axis maxima, smallest first.
const AXIS_CEILINGS: [f64; 7] = [50.0, 100.0, 200.0, 400.0, 600.0, 1000.0, 1500.0];

/// Headroom applied to peaks above the last fixed ceiling.
const OVERFLOW_HEADROOM: f64 = 1.05;

/// Lower bounds (µg/m³) of the Moderate through Hazardous categories.
const V1_BREAKPOINTS: [f64; 5] = [12.0, 35.5, 55.5, 150.5, 250.5];
const V2_BREAKPOINTS: [f64; 5] = [9.0, 35.5, 55.5, 125.5, 225.5];

/// Published revision of the PM2.5 AQI breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AqiVersion {
    /// Breakpoints in force before the 2024 NAAQS revision.
    V1,
    /// Breakpoints from the 2024 NAAQS revision.
    #[default]
    V2,
}

impl AqiVersion {
    /// Category lower bounds, ascending.
    pub fn breakpoints(self) -> &'static [f64; 5] {
        match self {
            Self::V1 => &V1_BREAKPOINTS,
            Self::V2 => &V2_BREAKPOINTS,
        }
    }

    /// Numeric version as used in configuration.
    pub fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }
}

impl TryFrom<u8> for AqiVersion {
    type Error = AqPlotError;

    fn try_from(version: u8) -> Result<Self> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(AqPlotError::validation_field(
                format!("unsupported AQI version {other}"),
                "aqi_version",
            )),
        }
    }
}

/// The six EPA AQI categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiCategory {
    /// Air quality is satisfactory.
    Good,
    /// Acceptable; some risk for unusually sensitive people.
    Moderate,
    /// Sensitive groups may experience health effects.
    UnhealthyForSensitiveGroups,
    /// Everyone may begin to experience health effects.
    Unhealthy,
    /// Health alert.
    VeryUnhealthy,
    /// Health emergency.
    Hazardous,
}

impl AqiCategory {
    /// All categories, cleanest first.
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthyForSensitiveGroups,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// EPA colour as a CSS `rgb()` string.
    pub fn color(self) -> &'static str {
        match self {
            Self::Good => "rgb(0,228,0)",
            Self::Moderate => "rgb(255,255,0)",
            Self::UnhealthyForSensitiveGroups => "rgb(255,126,0)",
            Self::Unhealthy => "rgb(255,0,0)",
            Self::VeryUnhealthy => "rgb(143,63,151)",
            Self::Hazardous => "rgb(126,0,35)",
        }
    }

    /// Human-readable category name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

/// Category of a finite PM2.5 concentration.
///
/// A value equal to a breakpoint belongs to the category that breakpoint
/// opens. Returns `None` for NaN and infinities.
pub fn category_for(value: f64, version: AqiVersion) -> Option<AqiCategory> {
    if !value.is_finite() {
        return None;
    }
    let index = version
        .breakpoints()
        .iter()
        .take_while(|&&bound| value >= bound)
        .count();
    Some(AqiCategory::ALL[index])
}

/// Y-axis maximum for a peak daily mean.
pub fn pm25_to_y_max(peak: f64) -> f64 {
    if !peak.is_finite() || peak < 0.0 {
        return AXIS_CEILINGS[0];
    }
    AXIS_CEILINGS
        .iter()
        .copied()
        .find(|&ceiling| peak <= ceiling)
        .unwrap_or(peak * OVERFLOW_HEADROOM)
}

/// Default [`ConcentrationScale`] for PM2.5.
#[derive(Debug, Clone, PartialEq)]
pub struct Pm25AqiScale {
    version: AqiVersion,
    line_width: f64,
}

impl Default for Pm25AqiScale {
    fn default() -> Self {
        Self {
            version: AqiVersion::default(),
            line_width: 2.0,
        }
    }
}

impl Pm25AqiScale {
    /// Creates a scale colouring means with `version` breakpoints.
    pub fn new(version: AqiVersion, line_width: f64) -> Self {
        Self { version, line_width }
    }

    /// Builds the scale described by a chart style.
    pub fn from_style(style: &ChartStyle) -> Result<Self> {
        Ok(Self::new(
            AqiVersion::try_from(style.aqi_version)?,
            style.threshold_line_width,
        ))
    }

    /// Breakpoint version used for mean colours.
    pub fn aqi_version(&self) -> AqiVersion {
        self.version
    }

    /// Threshold line width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }
}

impl ConcentrationScale for Pm25AqiScale {
    fn version(&self) -> u8 {
        self.version.number()
    }

    fn axis_ceiling(&self, peak: f64) -> f64 {
        pm25_to_y_max(peak)
    }

    fn color_for(&self, value: f64) -> String {
        category_for(value, self.version)
            .map_or(MISSING_COLOR, AqiCategory::color)
            .to_string()
    }

    fn threshold_lines(&self, version: u8) -> Result<Vec<PlotLine>> {
        let version = AqiVersion::try_from(version)?;
        Ok(version
            .breakpoints()
            .iter()
            .zip(&AqiCategory::ALL[1..])
            .map(|(&value, category)| PlotLine {
                value,
                color: category.color().to_string(),
                width: self.line_width,
            })
            .collect())
    }
}
