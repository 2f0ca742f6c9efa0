//! paratok CLI library
//!
//! Command-line interface for the paratok segmentation pipeline: input
//! pattern resolution, configuration files, progress reporting, and the
//! subcommand implementations.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod progress;

pub use error::{CliError, CliResult};
