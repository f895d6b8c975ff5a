//! Chart Viewer Widget
//! Central area hosting the weight chart and its legend.

use crate::charts::{ChartPlotter, ChartState, LegendPosition};
use egui::RichText;

const LEGEND_WIDTH: f32 = 160.0;
const LEGEND_HEIGHT: f32 = 90.0;
const MIN_CHART_HEIGHT: f32 = 300.0;

/// Displays the chart (if any) with the legend on the configured side.
#[derive(Default)]
pub struct ChartViewer {
    reset_pending: bool,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the plot to the data on the next frame.
    pub fn reset_view(&mut self) {
        self.reset_pending = true;
    }

    fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_pending)
    }

    pub fn show(&mut self, ui: &mut egui::Ui, chart: Option<&ChartState>) {
        let Some(chart) = chart else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        let reset = self.take_reset();
        let avail = ui.available_size();
        let show_legend = chart.legend.display;

        match chart.legend.position {
            LegendPosition::Left | LegendPosition::Right if show_legend => {
                let size = egui::vec2((avail.x - LEGEND_WIDTH).max(0.0), avail.y);
                let height = avail.y.max(MIN_CHART_HEIGHT);
                ui.horizontal_top(|ui| {
                    if chart.legend.position == LegendPosition::Left {
                        Self::legend(ui, chart);
                    }
                    ui.allocate_ui(size, |ui| ChartPlotter::draw_chart(ui, chart, height, reset));
                    if chart.legend.position == LegendPosition::Right {
                        Self::legend(ui, chart);
                    }
                });
            }
            LegendPosition::Top | LegendPosition::Bottom if show_legend => {
                let height = (avail.y - LEGEND_HEIGHT).max(MIN_CHART_HEIGHT);
                if chart.legend.position == LegendPosition::Top {
                    Self::legend(ui, chart);
                }
                ChartPlotter::draw_chart(ui, chart, height, reset);
                if chart.legend.position == LegendPosition::Bottom {
                    Self::legend(ui, chart);
                }
            }
            _ => ChartPlotter::draw_chart(ui, chart, avail.y.max(MIN_CHART_HEIGHT), reset),
        }
    }

    fn legend(ui: &mut egui::Ui, chart: &ChartState) {
        ui.vertical(|ui| {
            ui.set_width(LEGEND_WIDTH);
            egui::ScrollArea::vertical()
                .id_salt("legend")
                .show(ui, |ui| ChartPlotter::draw_legend(ui, chart));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_applies_to_one_frame() {
        let mut viewer = ChartViewer::new();
        assert!(!viewer.take_reset());

        viewer.reset_view();
        assert!(viewer.take_reset());
        assert!(!viewer.take_reset());
    }
}
