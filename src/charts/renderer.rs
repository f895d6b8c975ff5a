//! Static Chart Renderer
//! Exports the comparison chart to PNG or SVG with plotters.
//!
//! The exported image mirrors the interactive view: same series colors,
//! smoothing, gap spanning, axis titles and legend placement.

use super::plotter::ChartPlotter;
use super::series::{line_segments, smooth_segment};
use super::state::{ChartState, ChartType, LegendPosition};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CURVE_SAMPLES: usize = 16;
const BAR_GROUP_WIDTH: f64 = 0.8;
const MAX_X_LABELS: usize = 12;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No data to export")]
    NoData,
    #[error("Unsupported export format for '{0}' (expected .png or .svg)")]
    UnsupportedFormat(PathBuf),
    #[error("Drawing failed: {0}")]
    Drawing(String),
}

fn drawing_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => Some(Self::Png),
            Some("svg") => Some(Self::Svg),
            _ => None,
        }
    }
}

/// Padded value-axis bounds over every non-null point. Bar charts always
/// include zero. `None` when there is nothing to draw.
pub fn value_range(chart: &ChartState) -> Option<(f64, f64)> {
    let mut values = chart
        .series
        .iter()
        .flat_map(|s| s.data.iter().flatten().copied())
        .peekable();
    values.peek()?;

    let (mut min, mut max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if chart.chart_type == ChartType::Bar {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    let pad = if max > min { (max - min) * 0.1 } else { 1.0 };
    let lo = if chart.chart_type == ChartType::Bar && min >= 0.0 {
        0.0
    } else {
        min - pad
    };
    max += pad;
    Some((lo, max))
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render to `path`, choosing the backend from its extension.
    pub fn render_to_file(
        chart: &ChartState,
        path: &Path,
        size: (u32, u32),
    ) -> Result<ExportFormat, RenderError> {
        let format = ExportFormat::from_path(path)
            .ok_or_else(|| RenderError::UnsupportedFormat(path.to_path_buf()))?;
        match format {
            ExportFormat::Png => Self::render_png(chart, path, size)?,
            ExportFormat::Svg => Self::render_svg(chart, path, size)?,
        }
        tracing::info!(path = %path.display(), ?format, "chart exported");
        Ok(format)
    }

    pub fn render_png(chart: &ChartState, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
        let range = value_range(chart).ok_or(RenderError::NoData)?;
        let root = BitMapBackend::new(path, size).into_drawing_area();
        Self::draw(&root, chart, range)?;
        root.present().map_err(drawing_error)
    }

    pub fn render_svg(chart: &ChartState, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
        let range = value_range(chart).ok_or(RenderError::NoData)?;
        let root = SVGBackend::new(path, size).into_drawing_area();
        Self::draw(&root, chart, range)?;
        root.present().map_err(drawing_error)
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &ChartState,
        (y_min, y_max): (f64, f64),
    ) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(drawing_error)?;

        let x_max = chart.labels.len().max(1) as f64 - 0.5;
        let mut plot = ChartBuilder::on(root)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)
            .map_err(drawing_error)?;

        let labels = &chart.labels;
        let x_formatter = |v: &f64| {
            let idx = v.round();
            if idx >= 0.0 && (idx - v).abs() < 1e-6 {
                labels.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        };

        plot.configure_mesh()
            .x_desc(chart.axes.category_label.as_str())
            .y_desc(chart.axes.value_label.as_str())
            .x_labels(labels.len().clamp(1, MAX_X_LABELS))
            .x_label_formatter(&x_formatter)
            .draw()
            .map_err(drawing_error)?;

        let count = chart.series.len();
        for (i, series) in chart.series.iter().enumerate() {
            let c = ChartPlotter::series_color(series, i);
            let color = RGBColor(c.r(), c.g(), c.b());

            match chart.chart_type {
                ChartType::Line => {
                    for segment in line_segments(&series.data, chart.defaults.span_gaps) {
                        let curve = smooth_segment(&segment, series.line_tension, CURVE_SAMPLES);
                        plot.draw_series(LineSeries::new(
                            curve.into_iter().map(|p| (p[0], p[1])),
                            color.stroke_width(2),
                        ))
                        .map_err(drawing_error)?;
                        plot.draw_series(
                            segment
                                .iter()
                                .map(|p| Circle::new((p[0], p[1]), 3, color.filled())),
                        )
                        .map_err(drawing_error)?;
                    }
                }
                ChartType::Bar => {
                    let width = BAR_GROUP_WIDTH / count.max(1) as f64;
                    let offset = ChartPlotter::bar_offset(i, count);
                    let base = y_min.max(0.0);
                    plot.draw_series(series.data.iter().enumerate().filter_map(|(x, v)| {
                        v.map(|y| {
                            let center = x as f64 + offset;
                            Rectangle::new(
                                [(center - width / 2.0, base), (center + width / 2.0, y)],
                                color.filled(),
                            )
                        })
                    }))
                    .map_err(drawing_error)?;
                }
            }

            // Legend entry, independent of how many runs the series has.
            let box_width = chart.legend.box_width as i32;
            plot.draw_series(LineSeries::new(std::iter::empty::<(f64, f64)>(), color))
                .map_err(drawing_error)?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + box_width, y + 5)], color.filled())
                });
        }

        if chart.legend.display {
            let position = match chart.legend.position {
                LegendPosition::Right => SeriesLabelPosition::UpperRight,
                LegendPosition::Left => SeriesLabelPosition::UpperLeft,
                LegendPosition::Top => SeriesLabelPosition::UpperMiddle,
                LegendPosition::Bottom => SeriesLabelPosition::LowerMiddle,
            };
            plot.configure_series_labels()
                .position(position)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(drawing_error)?;
        }

        Ok(())
    }
}
