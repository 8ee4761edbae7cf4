//! Configuration schema definitions using serde with validation attributes.

use histgrid_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main configuration structure for histgrid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Canvas and output settings.
    #[validate]
    pub figure: FigureConfig,
    /// Per-subplot histogram settings.
    #[validate]
    pub histogram: HistogramConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Canvas and output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FigureConfig {
    /// Figure width in pixels.
    #[validate(range(min = 100, max = 8000, message = "Width must be between 100 and 8000 pixels"))]
    pub width: u32,

    /// Figure height in pixels.
    #[validate(range(min = 100, max = 8000, message = "Height must be between 100 and 8000 pixels"))]
    pub height: u32,

    /// Background color (hex format).
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Background color must be valid hex color"))]
    pub background_color: String,

    /// Font size of the overall figure title.
    #[validate(range(min = 8, max = 96, message = "Title font size must be between 8 and 96"))]
    pub title_font_size: u32,

    /// Font size of subplot captions and axis descriptions.
    #[validate(range(min = 6, max = 72, message = "Subplot font size must be between 6 and 72"))]
    pub subplot_font_size: u32,

    /// Where the rendered PNG is written. Relative paths resolve against
    /// the working directory.
    #[validate(custom = "crate::validation::validate_file_path")]
    pub output_path: String,
}

/// Per-subplot histogram settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HistogramConfig {
    /// Figure number embedded in titles.
    #[validate(length(min = 1, message = "Figure tag cannot be empty"))]
    pub figure_tag: String,

    /// Transparency of each overlaid histogram.
    #[validate(range(min = 0.0, max = 1.0, message = "Alpha must be between 0 and 1"))]
    pub alpha: f64,

    /// Number of equal-width bins per histogram.
    #[validate(range(min = 1, max = 1000, message = "Bins must be between 1 and 1000"))]
    pub bins: usize,

    /// Drawing options applied identically to both classes.
    #[validate]
    pub style: HistogramStyle,
}

/// Recognised histogram drawing options.
///
/// Unknown keys are rejected when the configuration is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct HistogramStyle {
    /// Fill colors for class 0 and class 1, in that order.
    #[validate(custom = "crate::validation::validate_class_colors")]
    pub colors: Vec<String>,

    /// Outline color drawn around each bar.
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Edge color must be valid hex color"))]
    pub edge_color: Option<String>,

    /// Stroke width for outlines and step lines.
    #[validate(range(min = 1, max = 20, message = "Line width must be between 1 and 20"))]
    pub line_width: u32,

    /// How each histogram is drawn.
    pub hist_type: HistType,
}

/// Histogram drawing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistType {
    /// Filled bars.
    Bar,
    /// Unfilled outline.
    Step,
    /// Filled outline without inner bar edges.
    StepFilled,
}

impl std::str::FromStr for HistType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "step" => Ok(Self::Step),
            "stepfilled" => Ok(Self::StepFilled),
            other => Err(format!(
                "unknown histogram type '{other}' (expected bar, step, or stepfilled)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hist_type_parsing() {
        assert_eq!("bar".parse::<HistType>().unwrap(), HistType::Bar);
        assert_eq!("Step".parse::<HistType>().unwrap(), HistType::Step);
        assert_eq!("stepfilled".parse::<HistType>().unwrap(), HistType::StepFilled);
        assert!("barstacked".parse::<HistType>().is_err());
    }

    #[test]
    fn test_hist_type_serde_names() {
        let parsed: HistType = serde_yaml::from_str("stepfilled").unwrap();
        assert_eq!(parsed, HistType::StepFilled);
        assert_eq!(serde_yaml::to_string(&HistType::Bar).unwrap().trim(), "bar");
    }

    #[test]
    fn test_unknown_style_option_rejected() {
        let yaml = "colors: [\"#000000\", \"#FFFFFF\"]\nzorder: 3\n";
        let err = serde_yaml::from_str::<HistogramStyle>(yaml).unwrap_err();
        assert!(err.to_string().contains("zorder"));
    }

    #[test]
    fn test_partial_style_fills_defaults() {
        let style: HistogramStyle = serde_yaml::from_str("line_width: 3\n").unwrap();
        assert_eq!(style.line_width, 3);
        assert_eq!(style.hist_type, HistType::Bar);
        assert_eq!(style.colors.len(), 2);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.histogram.alpha = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.histogram.bins = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.figure.background_color = "white".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.histogram.style.edge_color = Some("#12345".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.histogram.style.colors = vec!["#000000".to_string()];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.figure.output_path = String::new();
        assert!(config.validate().is_err());
    }
}
