//! Interaction handlers for the plot-type controls and button selection.

use super::state::{ChartError, ChartState, ChartType};

/// Plot-type control activated: switch the chart to `data_type` and
/// redraw once. Unsupported identifiers leave the chart untouched.
pub fn on_plot_type_activated(chart: &mut ChartState, data_type: &str) -> Result<(), ChartError> {
    let chart_type: ChartType = data_type.parse()?;
    if chart.chart_type != chart_type {
        tracing::info!(from = %chart.chart_type, to = %chart_type, "switching chart type");
    }
    chart.set_type(chart_type);
    chart.update();
    Ok(())
}

/// Tracks which button of a group carries the "selected" marker.
/// At most one button is selected at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonGroup<B> {
    selected: Option<B>,
}

impl<B> Default for ButtonGroup<B> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<B: Clone + PartialEq> ButtonGroup<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the marker from every button, then mark `button`.
    pub fn activate(&mut self, button: B) {
        self.selected = Some(button);
    }

    pub fn is_selected(&self, button: &B) -> bool {
        self.selected.as_ref() == Some(button)
    }

    pub fn selected(&self) -> Option<&B> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::series::build_series;
    use crate::charts::state::{ChartDefaults, CHART_MOUNT_ID};
    use crate::data::WeightDataset;

    fn chart() -> ChartState {
        let dataset = WeightDataset {
            dates: vec!["2021-01-01".into(), "2021-01-02".into()],
            user_weights: vec![("alice".into(), vec![Some(70.0), Some(71.0)])],
        };
        let series = build_series(&dataset);
        ChartState::new(
            CHART_MOUNT_ID,
            ChartType::Line,
            &dataset,
            series,
            ChartDefaults::default(),
        )
        .unwrap()
    }

    #[test]
    fn bar_activation_switches_type_and_redraws_once() {
        let mut chart = chart();
        on_plot_type_activated(&mut chart, "bar").unwrap();
        assert_eq!(chart.chart_type, ChartType::Bar);
        assert_eq!(chart.revision(), 1);
    }

    #[test]
    fn repeated_activation_is_idempotent() {
        let mut chart = chart();
        for _ in 0..3 {
            on_plot_type_activated(&mut chart, "bar").unwrap();
        }
        assert_eq!(chart.chart_type, ChartType::Bar);
        assert_eq!(chart.series.len(), 1);
    }

    #[test]
    fn unsupported_type_leaves_chart_alone() {
        let mut chart = chart();
        let err = on_plot_type_activated(&mut chart, "pie").unwrap_err();
        assert_eq!(err, ChartError::UnsupportedChartType("pie".to_string()));
        assert_eq!(chart.chart_type, ChartType::Line);
        assert_eq!(chart.revision(), 0);
    }

    #[test]
    fn only_last_activated_button_is_selected() {
        let mut group = ButtonGroup::new();
        assert_eq!(group.selected(), None);

        group.activate("line");
        group.activate("bar");
        group.activate("export");
        assert!(group.is_selected(&"export"));
        assert!(!group.is_selected(&"line"));
        assert!(!group.is_selected(&"bar"));
    }
}
