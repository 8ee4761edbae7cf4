//! histgrid - main entry point

use anyhow::{Context, Result};
use clap::Parser;
use histgrid::{app, App, Cli};
use histgrid_common::init_default_logging;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app = match App::from_cli(cli) {
        Ok(app) => app,
        Err(err) => {
            init_default_logging()?;
            error!(error = %err, "Failed to resolve configuration");
            return Err(err).context("failed to resolve configuration");
        }
    };
    app.init_logging().context("failed to initialise logging")?;
    info!("Starting histgrid");

    let figure = app.run()?;
    if let Some(description) = app.describe(&figure)? {
        print!("{description}");
    }

    println!("{}", figure.output_path().display());
    println!("{}", app::summary(&figure));
    Ok(())
}
