//! # histgrid Graphs
//!
//! Overlaid two-class histograms for many numeric columns, arranged on a
//! square grid and written to a single PNG.
//!
//! ```no_run
//! use histgrid_graphs::{Dataset, GridHistogramRenderer, RenderOptions};
//!
//! # fn main() -> histgrid_common::Result<()> {
//! let split = Dataset::from_csv_path("data.csv")?.split_by_class("class")?;
//! let renderer = GridHistogramRenderer::new(RenderOptions::default().with_figure_tag("2"));
//! let figure = renderer.render(
//!     &split.negative,
//!     &split.positive,
//!     &["clump_thickness", "unif_size"],
//!     &["0 - benign", "1 - malignant"],
//! )?;
//! println!("{}", figure.output_path().display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod figure;
pub mod histogram;
pub mod layout;
pub mod renderer;

pub use dataset::{ClassSplit, Column, Dataset};
pub use figure::{Figure, LegendPosition, Overlay, Subplot, COUNT_AXIS_LABEL};
pub use histogram::{Bin, Histogram};
pub use layout::{grid_dimension, GridCell, GridLayout};
pub use renderer::{parse_hex_color, render, GridHistogramRenderer, RenderOptions};

pub use histgrid_config::{HistType, HistogramStyle};
