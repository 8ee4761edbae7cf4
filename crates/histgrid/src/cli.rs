//! Command line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Render overlaid two-class histograms for numeric columns on a square grid.
#[derive(Parser, Debug)]
#[command(name = "histgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to HISTGRID_CONFIG_PATH, then histgrid.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter, overriding the configuration
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the two classes come from.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split one CSV file on a binary class column
    Split {
        /// CSV file with a header row
        #[arg(short, long)]
        input: PathBuf,

        /// Column holding 0 / 1 class values
        #[arg(long, default_value = "class")]
        class_column: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Read each class from its own CSV file
    Pair {
        /// CSV file with the class 0 rows
        #[arg(long)]
        negative: PathBuf,

        /// CSV file with the class 1 rows
        #[arg(long)]
        positive: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },
}

impl Command {
    /// Render arguments shared by both subcommands.
    pub fn render_args(&self) -> &RenderArgs {
        match self {
            Self::Split { render, .. } | Self::Pair { render, .. } => render,
        }
    }
}

/// Options controlling the figure.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Columns to plot, comma separated (default: every numeric column)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Legend labels for class 0 and class 1, in that order
    #[arg(short, long, required = true)]
    pub labels: Vec<String>,

    /// Tag used in the figure and subplot titles
    #[arg(short = 't', long)]
    pub figure_tag: Option<String>,

    /// Overlay transparency between 0 and 1
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Bins per histogram
    #[arg(long)]
    pub bins: Option<usize>,

    /// Output image path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the rendered figure layout as YAML
    #[arg(long)]
    pub describe: bool,
}
