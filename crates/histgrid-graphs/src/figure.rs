//! The figure handle returned by a render: everything that was drawn,
//! in a form callers can inspect without decoding the image.

use crate::histogram::Histogram;
use crate::layout::{GridCell, GridLayout};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Y-axis description shared by every subplot.
pub const COUNT_AXIS_LABEL: &str = "Count";

/// Where a legend is anchored inside its subplot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    /// Top-right corner.
    UpperRight,
}

/// One class overlay within a subplot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// Legend label.
    pub label: String,
    /// Fill color (hex).
    pub color: String,
    /// Binned values.
    pub histogram: Histogram,
}

/// One populated grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subplot {
    /// Source column name.
    pub column: String,
    /// Placement in the grid.
    pub cell: GridCell,
    /// Caption above the plot.
    pub title: String,
    /// X-axis description (display form of the column name).
    pub x_label: String,
    /// Y-axis description.
    pub y_label: String,
    /// Legend anchor.
    pub legend_position: LegendPosition,
    /// Class 0 then class 1, in drawing order.
    pub overlays: [Overlay; 2],
}

impl Subplot {
    /// 1-based subplot number used in titles.
    pub const fn number(&self) -> usize {
        self.cell.index + 1
    }

    /// Legend entries in drawing order.
    pub fn legend_labels(&self) -> [&str; 2] {
        [self.overlays[0].label.as_str(), self.overlays[1].label.as_str()]
    }
}

/// A rendered figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Caller supplied tag embedded in the titles.
    pub tag: String,
    /// Overall title.
    pub title: String,
    /// Grid the subplots were placed on.
    pub layout: GridLayout,
    /// Canvas size in pixels.
    pub size: (u32, u32),
    /// Populated subplots in placement order.
    pub subplots: Vec<Subplot>,
    /// Image file the figure was written to.
    pub output_path: PathBuf,
}

impl Figure {
    /// Number of populated subplots.
    pub fn subplot_count(&self) -> usize {
        self.subplots.len()
    }

    /// Find the subplot for a column.
    pub fn subplot(&self, column: &str) -> Option<&Subplot> {
        self.subplots.iter().find(|s| s.column == column)
    }

    /// Where the image was written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Overall figure title for a tag.
pub fn figure_title(tag: &str) -> String {
    format!("Figure {tag}: Distribution of the target class for each numeric feature")
}

/// Caption for the subplot numbered `number` (1-based).
pub fn subplot_title(tag: &str, number: usize, display_name: &str) -> String {
    format!("Figure {tag}.{number}: Histogram of {display_name} for each target class label")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(
            figure_title("1"),
            "Figure 1: Distribution of the target class for each numeric feature"
        );
        assert_eq!(
            subplot_title("2", 3, "Unif Size"),
            "Figure 2.3: Histogram of Unif Size for each target class label"
        );
    }
}
