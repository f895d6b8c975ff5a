//! Control Panel Widget
//! Left side panel with the plot-type switch, data and export buttons.

use crate::charts::{ButtonGroup, ChartType};
use egui::{Color32, RichText};

/// Every button of the panel. One of them at a time carries the
/// "selected" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    PlotType(ChartType),
    OpenPayload,
    OpenEntries,
    ExportImage,
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    /// A plot-type button was pressed; carries its type identifier.
    PlotType(String),
    OpenPayload,
    OpenEntries,
    ExportImage,
}

/// Left side control panel.
pub struct ControlPanel {
    pub buttons: ButtonGroup<PanelButton>,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            buttons: ButtonGroup::new(),
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press: the pressed button becomes the selected one.
    pub fn press(&mut self, button: PanelButton) -> ControlPanelAction {
        self.buttons.activate(button);
        match button {
            PanelButton::PlotType(chart_type) => {
                ControlPanelAction::PlotType(chart_type.as_str().to_string())
            }
            PanelButton::OpenPayload => ControlPanelAction::OpenPayload,
            PanelButton::OpenEntries => ControlPanelAction::OpenEntries,
            PanelButton::ExportImage => ControlPanelAction::ExportImage,
        }
    }

    fn button(&self, ui: &mut egui::Ui, button: PanelButton, text: &str) -> bool {
        let widget = egui::Button::new(RichText::new(text).size(14.0))
            .selected(self.buttons.is_selected(&button))
            .min_size(egui::vec2(120.0, 28.0));
        ui.add(widget).clicked()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut pressed = None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⚖ Weight Comparison")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Plot Type Section =====
        ui.label(RichText::new("📈 Plot Type").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            for chart_type in ChartType::ALL {
                let button = PanelButton::PlotType(chart_type);
                if self.button(ui, button, chart_type.title()) {
                    pressed = Some(button);
                }
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        ui.vertical(|ui| {
            if self.button(ui, PanelButton::OpenPayload, "📂 Open payload") {
                pressed = Some(PanelButton::OpenPayload);
            }
            if self.button(ui, PanelButton::OpenEntries, "👥 Open entries") {
                pressed = Some(PanelButton::OpenEntries);
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.add_enabled_ui(self.export_enabled, |ui| {
            if self.button(ui, PanelButton::ExportImage, "🖼 Export image") {
                pressed = Some(PanelButton::ExportImage);
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.starts_with("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        pressed
            .map(|button| self.press(button))
            .unwrap_or(ControlPanelAction::None)
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_type_press_carries_identifier() {
        let mut panel = ControlPanel::new();
        let action = panel.press(PanelButton::PlotType(ChartType::Bar));
        assert_eq!(action, ControlPanelAction::PlotType("bar".to_string()));
        assert!(panel.buttons.is_selected(&PanelButton::PlotType(ChartType::Bar)));
    }

    #[test]
    fn any_press_moves_the_selection() {
        let mut panel = ControlPanel::new();
        assert_eq!(panel.buttons.selected(), None);

        panel.press(PanelButton::PlotType(ChartType::Line));
        panel.press(PanelButton::OpenPayload);

        assert_eq!(panel.buttons.selected(), Some(&PanelButton::OpenPayload));
        assert!(!panel.buttons.is_selected(&PanelButton::PlotType(ChartType::Line)));
    }
}
