//! Ties the command line, configuration and renderer together.

use crate::cli::{Cli, Command, RenderArgs};
use crate::error::{AppError, AppResult};
use histgrid_common::{init_logging, split_list, validate_non_empty};
use histgrid_config::{Config, ConfigLoader};
use histgrid_graphs::{Dataset, Figure, GridHistogramRenderer, RenderOptions};
use tracing::{debug, info};
use validator::Validate;

/// A configured run of the renderer.
#[derive(Debug)]
pub struct App {
    config: Config,
    command: Command,
}

impl App {
    /// Resolve configuration from file, environment and command line.
    ///
    /// Command line values win over environment variables, which win over
    /// the configuration file.
    pub fn from_cli(cli: Cli) -> AppResult<Self> {
        let mut config = match &cli.config {
            Some(path) => ConfigLoader::load_config(path)?,
            None => ConfigLoader::load()?,
        };
        apply_cli_overrides(&mut config, cli.command.render_args(), cli.log_level.as_deref());
        config.validate().map_err(histgrid_config::ConfigError::from)?;
        config.histogram.figure_tag =
            validate_non_empty(&config.histogram.figure_tag, "figure_tag")?;

        Ok(Self {
            config,
            command: cli.command,
        })
    }

    /// Effective configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Install the tracing subscriber described by the configuration.
    pub fn init_logging(&self) -> AppResult<()> {
        init_logging(&self.config.logging)?;
        Ok(())
    }

    /// Load the datasets, render the figure and return it.
    pub fn run(&self) -> AppResult<Figure> {
        let (class_zero, class_one, class_column) = self.load_classes()?;
        let args = self.command.render_args();

        let columns = if args.columns.is_empty() {
            default_columns(&class_zero, &class_one, class_column)
        } else {
            args.columns.iter().flat_map(|c| split_list(c)).collect()
        };
        if columns.is_empty() {
            return Err(AppError::usage("no numeric columns found to plot"));
        }
        debug!(?columns, "Selected columns");

        let renderer = GridHistogramRenderer::new(RenderOptions::from_config(&self.config));
        let figure = renderer.render(&class_zero, &class_one, &columns, &args.labels)?;
        info!(path = %figure.output_path().display(), "Figure written");
        Ok(figure)
    }

    /// YAML description of a rendered figure, when `--describe` was given.
    pub fn describe(&self, figure: &Figure) -> AppResult<Option<String>> {
        if !self.command.render_args().describe {
            return Ok(None);
        }
        Ok(Some(serde_yaml::to_string(figure)?))
    }

    fn load_classes(&self) -> AppResult<(Dataset, Dataset, Option<&str>)> {
        match &self.command {
            Command::Split {
                input, class_column, ..
            } => {
                let split = Dataset::from_csv_path(input)?.split_by_class(class_column)?;
                Ok((split.negative, split.positive, Some(class_column.as_str())))
            }
            Command::Pair {
                negative, positive, ..
            } => {
                let zero = Dataset::from_csv_path(negative)?;
                let one = Dataset::from_csv_path(positive)?;
                Ok((zero, one, None))
            }
        }
    }
}

/// Apply command line values on top of the loaded configuration.
pub fn apply_cli_overrides(config: &mut Config, args: &RenderArgs, log_level: Option<&str>) {
    if let Some(tag) = &args.figure_tag {
        config.histogram.figure_tag.clone_from(tag);
    }
    if let Some(alpha) = args.alpha {
        config.histogram.alpha = alpha;
    }
    if let Some(bins) = args.bins {
        config.histogram.bins = bins;
    }
    if let Some(output) = &args.output {
        config.figure.output_path = output.to_string_lossy().into_owned();
    }
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
}

/// Numeric columns present in both datasets, in class 0 order, without the
/// class column.
pub fn default_columns(
    class_zero: &Dataset,
    class_one: &Dataset,
    class_column: Option<&str>,
) -> Vec<String> {
    let in_one = class_one.numeric_column_names();
    class_zero
        .numeric_column_names()
        .into_iter()
        .filter(|name| Some(name.as_str()) != class_column)
        .filter(|name| in_one.contains(name))
        .collect()
}

/// One-line summary printed after a successful render.
pub fn summary(figure: &Figure) -> String {
    let d = figure.layout.dimension();
    format!(
        "Rendered {} histogram subplot(s) on a {d}x{d} grid as figure {}",
        figure.subplot_count(),
        figure.tag
    )
}
