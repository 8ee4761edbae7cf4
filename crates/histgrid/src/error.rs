//! Application-wide error types using thiserror.

use histgrid_common::HistGridError;
use histgrid_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Loading, parsing or rendering failed.
    #[error(transparent)]
    Library(#[from] HistGridError),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Arguments were accepted by the parser but make no sense together.
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// Figure description could not be serialized.
    #[error("Failed to describe figure: {0}")]
    Describe(#[from] serde_yaml::Error),
}

impl AppError {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
