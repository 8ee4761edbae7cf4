//! Structured logging infrastructure for histgrid

use crate::{HistGridError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "histgrid_graphs=trace")
    pub level: String,
    /// Whether to emit one JSON object per line
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

fn open_log_file(path: &str) -> Result<Mutex<File>> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Mutex::new)
        .map_err(|e| HistGridError::config_with_source(format!("Cannot open log file {path}"), e))
}

fn already_initialised(err: impl std::error::Error + Send + Sync + 'static) -> HistGridError {
    HistGridError::config_with_source("Logging already initialised", err)
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Logs go to stderr unless `file_path` is set, so stdout stays free for
/// command output.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let span_events = config.span_events();

    if config.json_format {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets)
            .json();

        if let Some(file_path) = &config.file_path {
            let file = open_log_file(file_path)?;
            registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()
                .map_err(already_initialised)
        } else {
            registry
                .with(layer.with_writer(std::io::stderr))
                .try_init()
                .map_err(already_initialised)
        }
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        if let Some(file_path) = &config.file_path {
            let file = open_log_file(file_path)?;
            registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()
                .map_err(already_initialised)
        } else {
            registry
                .with(layer.with_writer(std::io::stderr))
                .try_init()
                .map_err(already_initialised)
        }
    } else {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        if let Some(file_path) = &config.file_path {
            let file = open_log_file(file_path)?;
            registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()
                .map_err(already_initialised)
        } else {
            registry
                .with(layer.with_writer(std::io::stderr))
                .try_init()
                .map_err(already_initialised)
        }
    }
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}
