//! # histgrid Common
//!
//! Shared error types, logging bootstrap, and small text utilities used
//! across the histgrid workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{HistGridError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use utils::*;
