//! # histgrid
//!
//! Command line front end for `histgrid-graphs`: reads class data from CSV,
//! resolves configuration and renders the histogram grid.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::App;
pub use cli::{Cli, Command, RenderArgs};
pub use error::{AppError, AppResult};
