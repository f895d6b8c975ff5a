//! Configuration for the comparison viewer.

use crate::charts::ChartType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] json5::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Complete viewer configuration. Every section may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub chart: ChartSection,

    #[serde(default)]
    pub window: WindowSection,

    #[serde(default)]
    pub export: ExportSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSection {
    /// Chart type shown when the viewer opens ("line" or "bar").
    #[serde(default)]
    pub initial_type: ChartType,

    /// Connect lines across missing weights.
    #[serde(default = "default_span_gaps")]
    pub span_gaps: bool,
}

fn default_span_gaps() -> bool {
    true
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            initial_type: ChartType::default(),
            span_gaps: default_span_gaps(),
        }
    }
}

/// Viewer window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 700,
        }
    }
}

/// Exported image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    pub width: u32,
    pub height: u32,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            chart: ChartSection::default(),
            window: WindowSection::default(),
            export: ExportSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl ViewerConfig {
    /// Defaults used when no config file is given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON5 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json5(&content)
    }

    pub fn from_json5(content: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = json5::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("window", self.window.width, self.window.height),
            ("export", self.export.width, self.export.height),
        ];
        for (name, width, height) in sizes {
            if width == 0 || height == 0 {
                return Err(ConfigError::Validation(format!(
                    "{}: width and height must be non-zero",
                    name
                )));
            }
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "logging: invalid level '{}' (use trace, debug, info, warn or error)",
                other
            ))),
        }
    }
}
