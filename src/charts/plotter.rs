//! Chart Plotter Module
//! Draws the interactive weight comparison chart using egui_plot.

use super::color::parse_hex_color;
use super::series::{line_segments, smooth_segment, SeriesEntry};
use super::state::{ChartState, ChartType};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, Points};

/// Fallback colors for series whose color string does not parse.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Interpolated points per span for smoothed lines.
const CURVE_SAMPLES: usize = 12;
/// Share of a date slot taken by one group of bars.
const BAR_GROUP_WIDTH: f64 = 0.8;
/// Aim for about this many date labels on the x-axis.
const TARGET_X_LABELS: usize = 10;

/// Draws a [`ChartState`] with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for a series, falling back to the palette by position.
    pub fn series_color(series: &SeriesEntry, index: usize) -> Color32 {
        parse_hex_color(&series.color)
            .map(|(r, g, b)| Color32::from_rgb(r, g, b))
            .unwrap_or(PALETTE[index % PALETTE.len()])
    }

    /// Label step so that roughly [`TARGET_X_LABELS`] dates are shown.
    pub fn label_step(label_count: usize) -> usize {
        label_count.div_ceil(TARGET_X_LABELS).max(1)
    }

    /// x offset of series `index` within a group of `count` bars.
    pub fn bar_offset(index: usize, count: usize) -> f64 {
        let width = BAR_GROUP_WIDTH / count.max(1) as f64;
        -BAR_GROUP_WIDTH / 2.0 + width * (index as f64 + 0.5)
    }

    /// Draw the chart in its current type. `reset_view` drops any pan or
    /// zoom left over from a previous chart.
    pub fn draw_chart(ui: &mut egui::Ui, chart: &ChartState, height: f32, reset_view: bool) {
        let labels = chart.labels.clone();
        let step = Self::label_step(labels.len());
        let last_index = labels.len().saturating_sub(1) as f64;

        let mut plot = Plot::new(chart.mount())
            .height(height)
            .allow_scroll(false)
            .x_axis_label(chart.axes.category_label.as_str())
            .y_axis_label(chart.axes.value_label.as_str())
            .include_x(-0.5)
            .include_x(last_index + 0.5)
            .x_grid_spacer(move |input| {
                let (lo, hi) = input.bounds;
                let first = lo.max(0.0).ceil() as usize;
                let last = hi.min(last_index).floor().max(0.0) as usize;
                (first..=last)
                    .filter(|i| i % step == 0)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: step as f64,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx - mark.value).abs() < 1e-6 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            });

        if chart.chart_type == ChartType::Bar {
            plot = plot.include_y(0.0);
        }
        if reset_view {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| match chart.chart_type {
            ChartType::Line => {
                for (i, series) in chart.series.iter().enumerate() {
                    let color = Self::series_color(series, i);
                    for segment in line_segments(&series.data, chart.defaults.span_gaps) {
                        let curve = smooth_segment(&segment, series.line_tension, CURVE_SAMPLES);
                        let mut line = Line::new(curve.into_iter().collect::<PlotPoints>())
                            .color(color)
                            .width(2.0)
                            .name(&series.label);
                        if series.fill {
                            line = line.fill(0.0);
                        }
                        plot_ui.line(line);
                        plot_ui.points(
                            Points::new(segment.into_iter().collect::<PlotPoints>())
                                .radius(3.0)
                                .color(color)
                                .name(&series.label),
                        );
                    }
                }
            }
            ChartType::Bar => {
                let count = chart.series.len();
                let width = BAR_GROUP_WIDTH / count.max(1) as f64;
                for (i, series) in chart.series.iter().enumerate() {
                    let color = Self::series_color(series, i);
                    let offset = Self::bar_offset(i, count);
                    let bars: Vec<Bar> = series
                        .data
                        .iter()
                        .enumerate()
                        .filter_map(|(x, v)| v.map(|y| (x, y)))
                        .map(|(x, y)| {
                            Bar::new(x as f64 + offset, y)
                                .width(width)
                                .fill(color)
                                .stroke(egui::Stroke::new(1.0, color))
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).color(color).name(&series.label));
                }
            }
        });
    }

    /// Legend with heading and one color box per series.
    pub fn draw_legend(ui: &mut egui::Ui, chart: &ChartState) {
        ui.label(RichText::new(&chart.legend.heading).size(14.0).strong());
        ui.add_space(6.0);

        let box_size = egui::vec2(chart.legend.box_width, 12.0);
        for (i, series) in chart.series.iter().enumerate() {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(box_size, egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, Self::series_color(series, i));
                ui.label(RichText::new(&series.label).size(13.0));
            });
        }
    }
}
