//! Default values reproducing the classic figure: 22x22 units at 100 px per
//! unit, five bins, alpha 0.7, written to `../results/histograms.png`.

use crate::schema::*;
use histgrid_common::LoggingConfig;

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "../results/histograms.png";

/// Default figure side length in pixels.
pub const DEFAULT_FIGURE_SIZE_PX: u32 = 2200;

/// Default bin count.
pub const DEFAULT_BINS: usize = 5;

/// Default overlay transparency.
pub const DEFAULT_ALPHA: f64 = 0.7;

/// Default figure tag.
pub const DEFAULT_FIGURE_TAG: &str = "1";

/// Default fill colors for class 0 and class 1.
pub const DEFAULT_CLASS_COLORS: [&str; 2] = ["#1F77B4", "#FF7F0E"];

impl Default for Config {
    fn default() -> Self {
        Self {
            figure: FigureConfig::default(),
            histogram: HistogramConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIGURE_SIZE_PX,
            height: DEFAULT_FIGURE_SIZE_PX,
            background_color: "#FFFFFF".to_string(),
            title_font_size: 40,
            subplot_font_size: 22,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            figure_tag: DEFAULT_FIGURE_TAG.to_string(),
            alpha: DEFAULT_ALPHA,
            bins: DEFAULT_BINS,
            style: HistogramStyle::default(),
        }
    }
}

impl Default for HistogramStyle {
    fn default() -> Self {
        Self {
            colors: DEFAULT_CLASS_COLORS.iter().map(ToString::to_string).collect(),
            edge_color: None,
            line_width: 1,
            hist_type: HistType::Bar,
        }
    }
}

impl Default for HistType {
    fn default() -> Self {
        Self::Bar
    }
}
