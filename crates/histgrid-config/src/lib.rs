//! # histgrid Config
//!
//! Configuration schema, defaults, validation, and loading for histgrid.
//!
//! Settings are read from YAML, overridden by `HISTGRID_*` environment
//! variables, and validated before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use defaults::*;
pub use loader::{ConfigError, ConfigLoader};
pub use schema::*;
