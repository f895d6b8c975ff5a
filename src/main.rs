//! Weight Compare - members' weight comparison chart viewer
//!
//! Opens the interactive viewer, or with `--export` renders the chart to
//! an image file and exits.

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weight_compare::charts::{ChartDefaults, ChartState, StaticChartRenderer};
use weight_compare::cli::Args;
use weight_compare::config::ViewerConfig;
use weight_compare::gui::WeightCompareApp;

fn init_tracing(cli_level: Option<&str>, config_level: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ViewerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => ViewerConfig::new(),
    };

    init_tracing(args.log_level.as_deref(), &config.logging.level);
    tracing::info!("Starting weight-compare");

    let chart_type = args.chart_type.unwrap_or(config.chart.initial_type);
    let defaults = ChartDefaults {
        span_gaps: config.chart.span_gaps,
    };

    let dataset = args
        .source()
        .map(|source| source.load())
        .transpose()
        .context("Failed to load weight data")?;

    if args.emit_payload {
        let dataset = dataset.context("--emit-payload needs --payload or --entries")?;
        println!("{}", dataset.to_payload());
        return Ok(());
    }

    let chart = dataset
        .as_ref()
        .map(|dataset| ChartState::from_dataset(dataset, chart_type, defaults))
        .transpose()?;

    if let Some(path) = &args.export {
        let chart = chart.context("--export needs --payload or --entries")?;
        let size = (config.export.width, config.export.height);
        StaticChartRenderer::render_to_file(&chart, path, size)
            .with_context(|| format!("Failed to export '{}'", path.display()))?;
        if args.open {
            open::that(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Weight Comparison"),
        ..Default::default()
    };

    eframe::run_native(
        "Weight Comparison",
        options,
        Box::new(move |cc| Ok(Box::new(WeightCompareApp::new(cc, config, chart_type, chart)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
