//! Chart State Module
//! The live chart: type, series, axes and legend, plus a redraw revision.

use super::series::{build_series, SeriesEntry};
use crate::data::WeightDataset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mount point the chart is bound to.
pub const CHART_MOUNT_ID: &str = "weightChart";
pub const VALUE_AXIS_LABEL: &str = "Weight in Kgs";
pub const CATEGORY_AXIS_LABEL: &str = "Dates";
pub const LEGEND_HEADING: &str = "Users";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Unsupported chart type '{0}' (expected one of: line, bar)")]
    UnsupportedChartType(String),
    #[error("Chart mount point '{0}' does not exist")]
    MissingMount(String),
}

/// Chart types the viewer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
}

impl ChartType {
    pub const ALL: [Self; 2] = [Self::Line, Self::Bar];

    /// Identifier carried by the plot-type controls.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Bar => "Bar",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ChartError::UnsupportedChartType(s.to_string()))
    }
}

/// Library-wide options applied before any chart is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDefaults {
    /// Connect lines across null points instead of breaking them.
    pub span_gaps: bool,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self { span_gaps: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub value_label: String,
    pub category_label: String,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            value_label: VALUE_AXIS_LABEL.to_string(),
            category_label: CATEGORY_AXIS_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendConfig {
    pub display: bool,
    pub position: LegendPosition,
    pub heading: String,
    pub box_width: f32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            display: true,
            position: LegendPosition::Right,
            heading: LEGEND_HEADING.to_string(),
            box_width: 20.0,
        }
    }
}

/// The live chart. `chart_type` is the single field both construction
/// and the plot-type controls read and write.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    mount: String,
    pub chart_type: ChartType,
    pub labels: Vec<String>,
    pub series: Vec<SeriesEntry>,
    pub axes: AxisConfig,
    pub legend: LegendConfig,
    pub defaults: ChartDefaults,
    revision: u64,
}

impl ChartState {
    /// Bind a chart to `mount`, which must be the weight chart mount id.
    pub fn new(
        mount: &str,
        chart_type: ChartType,
        dataset: &WeightDataset,
        series: Vec<SeriesEntry>,
        defaults: ChartDefaults,
    ) -> Result<Self, ChartError> {
        if mount != CHART_MOUNT_ID {
            return Err(ChartError::MissingMount(mount.to_string()));
        }

        tracing::info!(
            chart_type = %chart_type,
            series = series.len(),
            dates = dataset.dates.len(),
            "chart initialised"
        );

        Ok(Self {
            mount: mount.to_string(),
            chart_type,
            labels: dataset.dates.clone(),
            series,
            axes: AxisConfig::default(),
            legend: LegendConfig::default(),
            defaults,
            revision: 0,
        })
    }

    /// Build the series for `dataset` and bind them to the weight chart.
    pub fn from_dataset(
        dataset: &WeightDataset,
        chart_type: ChartType,
        defaults: ChartDefaults,
    ) -> Result<Self, ChartError> {
        let series = build_series(dataset);
        Self::new(CHART_MOUNT_ID, chart_type, dataset, series, defaults)
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }

    pub fn set_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    /// Request a redraw with the current configuration.
    pub fn update(&mut self) {
        self.revision += 1;
        tracing::debug!(revision = self.revision, chart_type = %self.chart_type, "chart update");
    }

    /// Number of redraws requested since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when no series has a single value to draw.
    pub fn has_no_values(&self) -> bool {
        self.series.iter().all(|s| s.value_count() == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_type_parsing_is_closed() {
        assert_eq!("line".parse::<ChartType>(), Ok(ChartType::Line));
        assert_eq!("bar".parse::<ChartType>(), Ok(ChartType::Bar));
        assert_eq!(
            "radar".parse::<ChartType>(),
            Err(ChartError::UnsupportedChartType("radar".to_string()))
        );
        assert!("Line".parse::<ChartType>().is_err());
    }

    #[test]
    fn display_matches_identifier() {
        for t in ChartType::ALL {
            assert_eq!(t.to_string().parse::<ChartType>(), Ok(t));
        }
    }

    #[test]
    fn construction_uses_fixed_labels() {
        let dataset = WeightDataset {
            dates: vec!["2021-01-01".into()],
            user_weights: vec![],
        };
        let chart = ChartState::new(
            CHART_MOUNT_ID,
            ChartType::Bar,
            &dataset,
            Vec::new(),
            ChartDefaults::default(),
        )
        .unwrap();

        assert_eq!(chart.mount(), "weightChart");
        assert_eq!(chart.chart_type, ChartType::Bar);
        assert_eq!(chart.labels, dataset.dates);
        assert_eq!(chart.axes.value_label, "Weight in Kgs");
        assert_eq!(chart.axes.category_label, "Dates");
        assert!(chart.legend.display);
        assert_eq!(chart.legend.position, LegendPosition::Right);
        assert_eq!(chart.legend.heading, "Users");
        assert!(chart.defaults.span_gaps);
        assert_eq!(chart.revision(), 0);
        assert!(chart.has_no_values());
    }

    #[test]
    fn unknown_mount_fails() {
        let result = ChartState::new(
            "otherChart",
            ChartType::Line,
            &WeightDataset::default(),
            Vec::new(),
            ChartDefaults::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            ChartError::MissingMount("otherChart".to_string())
        );
    }

    #[test]
    fn update_bumps_revision_once() {
        let mut chart = ChartState::new(
            CHART_MOUNT_ID,
            ChartType::Line,
            &WeightDataset::default(),
            Vec::new(),
            ChartDefaults::default(),
        )
        .unwrap();
        chart.set_type(ChartType::Bar);
        assert_eq!(chart.revision(), 0);
        chart.update();
        assert_eq!(chart.revision(), 1);
    }
}
