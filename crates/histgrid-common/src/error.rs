//! Error types and utilities for histgrid

use thiserror::Error;

/// Result type alias for histgrid operations
pub type Result<T> = std::result::Result<T, HistGridError>;

/// Main error type for histgrid operations
#[derive(Error, Debug)]
pub enum HistGridError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tabular data could not be read or partitioned
    #[error("Data error: {message}")]
    Data {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A requested column is absent from one of the datasets
    #[error("Column '{column}' not found in {dataset}")]
    MissingColumn {
        /// Requested column name
        column: String,
        /// Display name of the dataset that lacks it
        dataset: String,
    },

    /// The label list does not hold exactly one label per class
    #[error("Expected {expected} labels, got {actual}")]
    LabelCount {
        /// Number of labels required
        expected: usize,
        /// Number of labels supplied
        actual: usize,
    },

    /// A cell in a selected column could not be read as a number
    #[error("Column '{column}' in {dataset} row {row}: '{value}' is not a number")]
    NonNumeric {
        /// Column being coerced
        column: String,
        /// Display name of the dataset holding the cell
        dataset: String,
        /// 0-based data row of the source table (header excluded)
        row: usize,
        /// Offending raw cell
        value: String,
    },

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },
}

impl HistGridError {
    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data error
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new data error with source
    pub fn data_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Data {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            dataset: dataset.into(),
        }
    }

    /// Create a label count mismatch error
    pub const fn label_count(expected: usize, actual: usize) -> Self {
        Self::LabelCount { expected, actual }
    }

    /// Create a non-numeric cell error
    pub fn non_numeric(
        column: impl Into<String>,
        dataset: impl Into<String>,
        row: usize,
        value: impl Into<String>,
    ) -> Self {
        Self::NonNumeric {
            column: column.into(),
            dataset: dataset.into(),
            row,
            value: value.into(),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether the error was raised by a boundary precondition check
    /// rather than by I/O or rendering.
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. }
                | Self::LabelCount { .. }
                | Self::NonNumeric { .. }
                | Self::Validation { .. }
        )
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to HistGridError
impl From<csv::Error> for HistGridError {
    fn from(err: csv::Error) -> Self {
        let message = err.position().map_or_else(
            || "CSV parsing error".to_string(),
            |pos| format!("CSV parsing error at line {}", pos.line()),
        );
        Self::data_with_source(message, err)
    }
}

/// Convert from serde_yaml::Error to HistGridError
impl From<serde_yaml::Error> for HistGridError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to HistGridError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for HistGridError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let data_error = HistGridError::data("class column holds 2");
        assert_eq!(data_error.to_string(), "Data error: class column holds 2");

        let validation_error = HistGridError::validation_field("Invalid input", "alpha");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));

        let graph_error = HistGridError::graph("no panels");
        assert_eq!(graph_error.to_string(), "Graph error: no panels");
    }

    #[test]
    fn test_lookup_errors_display() {
        let missing = HistGridError::missing_column("unif_size", "class 1");
        assert_eq!(missing.to_string(), "Column 'unif_size' not found in class 1");

        let labels = HistGridError::label_count(2, 1);
        assert_eq!(labels.to_string(), "Expected 2 labels, got 1");

        let non_numeric = HistGridError::non_numeric("clump", "data.csv [class 1]", 3, "abc");
        assert_eq!(
            non_numeric.to_string(),
            "Column 'clump' in data.csv [class 1] row 3: 'abc' is not a number"
        );
    }

    #[test]
    fn test_is_precondition() {
        assert!(HistGridError::missing_column("a", "b").is_precondition());
        assert!(HistGridError::label_count(2, 3).is_precondition());
        assert!(HistGridError::validation_field("bins", "bins").is_precondition());
        assert!(HistGridError::non_numeric("a", "b", 0, "x").is_precondition());
        assert!(!HistGridError::graph("draw").is_precondition());
        assert!(!HistGridError::Io(io::Error::new(io::ErrorKind::Other, "x")).is_precondition());
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = HistGridError::data_with_source("Cannot open data.csv", io_error);

        assert!(wrapped_error.to_string().contains("Cannot open data.csv"));
        assert!(wrapped_error.source().is_some());

        let config_source_error = HistGridError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        assert!(config_source_error.to_string().contains("Configuration error"));
        assert!(config_source_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let converted: HistGridError = io_error.into();

        assert!(converted.to_string().contains("I/O error"));
        assert!(converted.source().is_some());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<Vec<u32>>("{ not: [a list").unwrap_err();
        let converted: HistGridError = yaml_error.into();

        assert!(converted.to_string().contains("YAML parsing error"));
        assert!(converted.source().is_some());
    }

    #[test]
    fn test_csv_error_conversion() {
        let data = "a,b\n1,2\n3\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let csv_error = reader
            .records()
            .find_map(std::result::Result::err)
            .expect("ragged row should fail");
        let converted: HistGridError = csv_error.into();

        assert!(matches!(converted, HistGridError::Data { .. }));
        assert!(converted.to_string().contains("CSV parsing error"));
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = HistGridError::config_with_source("Middle layer", root_error);
        let top_error = HistGridError::graph_with_source("Top layer", middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert_eq!(error_count, 2);
    }
}
