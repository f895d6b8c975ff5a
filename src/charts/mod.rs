//! Charts module - series building, chart state and rendering

pub mod color;
mod interaction;
mod plotter;
mod renderer;
mod series;
mod state;

pub use interaction::{on_plot_type_activated, ButtonGroup};
pub use plotter::ChartPlotter;
pub use renderer::{value_range, ExportFormat, RenderError, StaticChartRenderer};
pub use series::{
    build_series, build_series_with, line_segments, smooth_segment, SeriesEntry, LINE_TENSION,
};
pub use state::{
    AxisConfig, ChartDefaults, ChartError, ChartState, ChartType, LegendConfig, LegendPosition,
    CATEGORY_AXIS_LABEL, CHART_MOUNT_ID, LEGEND_HEADING, VALUE_AXIS_LABEL,
};
