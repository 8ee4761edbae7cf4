//! Grid histogram rendering with plotters.
//!
//! A render runs in two phases. [`GridHistogramRenderer::prepare`] checks
//! every precondition and bins all the data, producing a [`Figure`]
//! description. Only then is the canvas created and drawn, into a staging
//! file that replaces the output once drawing has finished. A bad column,
//! label or drawing failure never touches the output file.

use crate::dataset::Dataset;
use crate::figure::{
    figure_title, subplot_title, Figure, LegendPosition, Overlay, Subplot, COUNT_AXIS_LABEL,
};
use crate::histogram::Histogram;
use crate::layout::GridLayout;
use histgrid_common::{column_display_name, HistGridError, Result};
use histgrid_config::{Config, FigureConfig, HistType, HistogramStyle};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

const FONT_FAMILY: &str = "sans-serif";

/// Everything that controls one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Tag embedded in the figure and subplot titles.
    pub figure_tag: String,
    /// Overlay transparency in `[0, 1]`.
    pub alpha: f64,
    /// Bins per histogram.
    pub bins: usize,
    /// Drawing options applied to both classes.
    pub style: HistogramStyle,
    /// Canvas and output settings.
    pub figure: FigureConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RenderOptions {
    /// Build options from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            figure_tag: config.histogram.figure_tag.clone(),
            alpha: config.histogram.alpha,
            bins: config.histogram.bins,
            style: config.histogram.style.clone(),
            figure: config.figure.clone(),
        }
    }

    /// Set the figure tag.
    #[must_use]
    pub fn with_figure_tag(mut self, tag: impl Into<String>) -> Self {
        self.figure_tag = tag.into();
        self
    }

    /// Set the overlay transparency.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the bin count.
    #[must_use]
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Set the drawing style.
    #[must_use]
    pub fn with_style(mut self, style: HistogramStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the canvas size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.figure.width = width;
        self.figure.height = height;
        self
    }

    /// Set where the image is written.
    #[must_use]
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.figure.output_path = path.as_ref().to_string_lossy().into_owned();
        self
    }

    /// Output location as a path.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.figure.output_path)
    }

    /// Check numeric ranges and colors.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(HistGridError::validation_field(
                format!("Alpha must be between 0 and 1, got {}", self.alpha),
                "alpha",
            ));
        }
        if self.bins == 0 {
            return Err(HistGridError::validation_field(
                "Bin count must be at least 1",
                "bins",
            ));
        }
        if self.figure.width == 0 || self.figure.height == 0 {
            return Err(HistGridError::validation_field(
                "Figure size must be non-zero",
                "figure",
            ));
        }
        if self.figure.output_path.trim().is_empty() {
            return Err(HistGridError::validation_field(
                "Output path cannot be empty",
                "output_path",
            ));
        }
        if self.style.colors.len() != 2 {
            return Err(HistGridError::validation_field(
                format!("Expected 2 class colors, got {}", self.style.colors.len()),
                "colors",
            ));
        }
        for color in &self.style.colors {
            parse_hex_color(color)?;
        }
        if let Some(edge) = &self.style.edge_color {
            parse_hex_color(edge)?;
        }
        parse_hex_color(&self.figure.background_color)?;
        Ok(())
    }
}

/// Parse a `#RRGGBB` color.
pub fn parse_hex_color(color_str: &str) -> Result<RGBColor> {
    let invalid =
        || HistGridError::validation_field(format!("Invalid hex color '{color_str}'"), "color");
    let hex = color_str.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Renders one histogram subplot per column on a square grid.
#[derive(Debug, Clone, Default)]
pub struct GridHistogramRenderer {
    options: RenderOptions,
}

impl GridHistogramRenderer {
    /// Create a renderer.
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Active options.
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `columns` of `class_zero` and `class_one` into one figure and
    /// write it to the configured output path.
    ///
    /// `labels` must hold exactly two legend entries, for class 0 and class 1.
    pub fn render<C, L>(
        &self,
        class_zero: &Dataset,
        class_one: &Dataset,
        columns: &[C],
        labels: &[L],
    ) -> Result<Figure>
    where
        C: AsRef<str>,
        L: AsRef<str>,
    {
        let span = info_span!(
            "render",
            tag = %self.options.figure_tag,
            columns = columns.len(),
            bins = self.options.bins
        );
        let _guard = span.enter();

        let figure = self.prepare(class_zero, class_one, columns, labels)?;
        self.draw(&figure)?;

        info!(
            path = %figure.output_path.display(),
            subplots = figure.subplot_count(),
            grid = figure.layout.dimension(),
            "Rendered histogram grid"
        );
        Ok(figure)
    }

    /// Validate inputs and bin all data without drawing anything.
    pub fn prepare<C, L>(
        &self,
        class_zero: &Dataset,
        class_one: &Dataset,
        columns: &[C],
        labels: &[L],
    ) -> Result<Figure>
    where
        C: AsRef<str>,
        L: AsRef<str>,
    {
        self.options.validate()?;
        let layout = GridLayout::for_count(columns.len())?;

        if labels.len() != 2 {
            return Err(HistGridError::label_count(2, labels.len()));
        }
        let labels = [labels[0].as_ref(), labels[1].as_ref()];

        for column in columns {
            class_zero.require_column(column.as_ref())?;
            class_one.require_column(column.as_ref())?;
        }

        let tag = self.options.figure_tag.as_str();
        let mut subplots = Vec::with_capacity(columns.len());
        for (cell, column) in layout.cells().zip(columns) {
            let column = column.as_ref();
            let zero = class_zero.numeric_column(column)?;
            let one = class_one.numeric_column(column)?;

            let display_name = column_display_name(column);
            let subplot = Subplot {
                column: column.to_string(),
                cell,
                title: subplot_title(tag, cell.index + 1, &display_name),
                x_label: display_name,
                y_label: COUNT_AXIS_LABEL.to_string(),
                legend_position: LegendPosition::UpperRight,
                overlays: [
                    Overlay {
                        label: labels[0].to_string(),
                        color: self.options.style.colors[0].clone(),
                        histogram: Histogram::compute(&zero, self.options.bins),
                    },
                    Overlay {
                        label: labels[1].to_string(),
                        color: self.options.style.colors[1].clone(),
                        histogram: Histogram::compute(&one, self.options.bins),
                    },
                ],
            };
            debug!(
                column,
                position = cell.position_code,
                class_zero = subplot.overlays[0].histogram.total(),
                class_one = subplot.overlays[1].histogram.total(),
                "Prepared subplot"
            );
            subplots.push(subplot);
        }

        Ok(Figure {
            tag: tag.to_string(),
            title: figure_title(tag),
            layout,
            size: (self.options.figure.width, self.options.figure.height),
            subplots,
            output_path: self.options.output_path(),
        })
    }

    /// Draw a prepared figure and move it over the output path.
    ///
    /// The canvas is drawn into a staging file next to the target. The
    /// bitmap backend flushes on drop, so a drawing error leaves only the
    /// staging file, which is removed, and the previous output is kept.
    fn draw(&self, figure: &Figure) -> Result<()> {
        let path = figure.output_path();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        // The encoder is chosen from the file extension.
        let suffix = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let staged = tempfile::Builder::new()
            .prefix(".histgrid-")
            .suffix(&suffix)
            .tempfile_in(dir)?;

        self.draw_canvas(staged.path(), figure)?;

        staged.persist(path).map_err(|e| HistGridError::Io(e.error))?;
        debug!(path = %path.display(), "Moved staged image into place");
        Ok(())
    }

    fn draw_canvas(&self, target: &Path, figure: &Figure) -> Result<()> {
        let root = BitMapBackend::new(target, figure.size).into_drawing_area();
        let background = parse_hex_color(&self.options.figure.background_color)?;
        root.fill(&background)?;

        let root = root.titled(
            &figure.title,
            (FONT_FAMILY, f64::from(self.options.figure.title_font_size)),
        )?;

        let d = figure.layout.dimension();
        let panels = root.split_evenly((d, d));
        for subplot in &figure.subplots {
            let panel = panels.get(subplot.cell.index).ok_or_else(|| {
                HistGridError::graph(format!("No grid panel for subplot {}", subplot.number()))
            })?;
            self.draw_subplot(panel, subplot)?;
        }

        root.present()?;
        Ok(())
    }

    fn draw_subplot<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        subplot: &Subplot,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        let font_px = self.options.figure.subplot_font_size;
        let font_size = f64::from(font_px);
        let (x_min, x_max) = x_range(subplot);
        let y_max = y_ceiling(subplot);

        let mut chart = ChartBuilder::on(area)
            .caption(&subplot.title, (FONT_FAMILY, font_size))
            .margin(15)
            .x_label_area_size(font_px * 3)
            .y_label_area_size(font_px * 4)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(subplot.x_label.as_str())
            .y_desc(subplot.y_label.as_str())
            .axis_desc_style((FONT_FAMILY, font_size))
            .draw()?;

        let style = &self.options.style;
        let edge = match &style.edge_color {
            Some(color) => Some(parse_hex_color(color)?.stroke_width(style.line_width)),
            None => None,
        };

        for overlay in &subplot.overlays {
            let color = parse_hex_color(&overlay.color)?.mix(self.options.alpha);
            let fill = color.filled();
            let bars = || {
                overlay.histogram.bins().map(|bin| {
                    #[allow(clippy::cast_precision_loss)]
                    let height = bin.count as f64;
                    [(bin.start, 0.0), (bin.end, height)]
                })
            };

            match style.hist_type {
                HistType::Bar => {
                    chart
                        .draw_series(bars().map(|corners| Rectangle::new(corners, fill)))?
                        .label(overlay.label.as_str())
                        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], fill));
                    if let Some(edge) = edge {
                        chart.draw_series(bars().map(|corners| Rectangle::new(corners, edge)))?;
                    }
                }
                HistType::Step => {
                    let line = color.stroke_width(style.line_width);
                    chart
                        .draw_series(std::iter::once(PathElement::new(
                            overlay.histogram.step_outline(),
                            line,
                        )))?
                        .label(overlay.label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], line));
                }
                HistType::StepFilled => {
                    let outline = overlay.histogram.step_outline();
                    chart
                        .draw_series(std::iter::once(Polygon::new(outline.clone(), fill)))?
                        .label(overlay.label.as_str())
                        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], fill));
                    if let Some(edge) = edge {
                        chart.draw_series(std::iter::once(PathElement::new(outline, edge)))?;
                    }
                }
            }
        }

        chart
            .configure_series_labels()
            .position(match subplot.legend_position {
                LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            })
            .label_font((FONT_FAMILY, font_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        Ok(())
    }
}

/// Render with the given options; see [`GridHistogramRenderer::render`].
pub fn render<C, L>(
    class_zero: &Dataset,
    class_one: &Dataset,
    columns: &[C],
    labels: &[L],
    options: &RenderOptions,
) -> Result<Figure>
where
    C: AsRef<str>,
    L: AsRef<str>,
{
    GridHistogramRenderer::new(options.clone()).render(class_zero, class_one, columns, labels)
}

/// Horizontal extent covering both overlays.
fn x_range(subplot: &Subplot) -> (f64, f64) {
    let (a_lo, a_hi) = subplot.overlays[0].histogram.range();
    let (b_lo, b_hi) = subplot.overlays[1].histogram.range();
    (a_lo.min(b_lo), a_hi.max(b_hi))
}

/// Vertical extent with headroom for the legend.
fn y_ceiling(subplot: &Subplot) -> f64 {
    let max = subplot
        .overlays
        .iter()
        .map(|o| o.histogram.max_count())
        .max()
        .unwrap_or(0);
    #[allow(clippy::cast_precision_loss)]
    let max = max as f64;
    (max * 1.15).max(1.0)
}
