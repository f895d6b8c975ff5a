//! Weight Comparison Main Application
//! Main window with control panel and chart viewer.

use crate::charts::{
    on_plot_type_activated, ChartDefaults, ChartState, ChartType, StaticChartRenderer,
};
use crate::config::ViewerConfig;
use crate::data::{DatasetSource, DateRange};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;

/// Main application window.
pub struct WeightCompareApp {
    config: ViewerConfig,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    /// Type applied to charts built from newly opened data.
    chart_type: ChartType,
    chart: Option<ChartState>,
}

impl WeightCompareApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: ViewerConfig,
        chart_type: ChartType,
        chart: Option<ChartState>,
    ) -> Self {
        let mut app = Self {
            config,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            chart_type,
            chart: None,
        };
        if let Some(chart) = chart {
            app.set_chart(chart);
        }
        app
    }

    fn defaults(&self) -> ChartDefaults {
        ChartDefaults {
            span_gaps: self.config.chart.span_gaps,
        }
    }

    fn set_chart(&mut self, chart: ChartState) {
        self.control_panel.set_status(format!(
            "{} users, {} dates",
            chart.series.len(),
            chart.labels.len()
        ));
        self.control_panel.export_enabled = !chart.has_no_values();
        self.chart_viewer.reset_view();
        self.chart = Some(chart);
    }

    fn report_error(&mut self, context: &str, error: &dyn std::error::Error) {
        tracing::error!(error = %error, "{}", context);
        self.control_panel
            .set_status(format!("Error: {}: {}", context, error));
    }

    /// Plot-type button pressed.
    fn handle_plot_type(&mut self, data_type: &str) {
        let result = match self.chart.as_mut() {
            Some(chart) => on_plot_type_activated(chart, data_type).map(|_| chart.chart_type),
            None => data_type.parse::<ChartType>(),
        };
        match result {
            Ok(chart_type) => self.chart_type = chart_type,
            Err(e) => self.report_error("Cannot switch chart type", &e),
        }
    }

    fn handle_open(&mut self, entries: bool) {
        let dialog = if entries {
            rfd::FileDialog::new().add_filter("Member entries", &["json", "csv"])
        } else {
            rfd::FileDialog::new().add_filter("Weight payload", &["txt", "json", "html"])
        };
        let Some(path) = dialog.pick_file() else {
            return; // User cancelled
        };

        let source = if entries {
            DatasetSource::Entries {
                path,
                range: DateRange::default(),
            }
        } else {
            DatasetSource::Payload(path)
        };
        self.load_source(&source);
    }

    /// Replace the chart with one built from `source`. On failure the
    /// current chart stays.
    fn load_source(&mut self, source: &DatasetSource) {
        let dataset = match source.load() {
            Ok(dataset) => dataset,
            Err(e) => return self.report_error("Cannot load data", &e),
        };
        match ChartState::from_dataset(&dataset, self.chart_type, self.defaults()) {
            Ok(chart) => self.set_chart(chart),
            Err(e) => self.report_error("Cannot build chart", &e),
        }
    }

    fn handle_export(&mut self) {
        let Some(chart) = self.chart.as_ref() else {
            self.control_panel.set_status("No chart to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .add_filter("SVG image", &["svg"])
            .set_file_name("weight_comparison.png")
            .save_file()
        else {
            return;
        };

        let size = (self.config.export.width, self.config.export.height);
        match StaticChartRenderer::render_to_file(chart, &path, size) {
            Ok(_) => self
                .control_panel
                .set_status(format!("Exported {}", path.display())),
            Err(e) => self.report_error("Export failed", &e),
        }
    }
}

impl eframe::App for WeightCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(220.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::PlotType(data_type) => {
                            self.handle_plot_type(&data_type)
                        }
                        ControlPanelAction::OpenPayload => self.handle_open(false),
                        ControlPanelAction::OpenEntries => self.handle_open(true),
                        ControlPanelAction::ExportImage => self.handle_export(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, self.chart.as_ref());
        });
    }
}
