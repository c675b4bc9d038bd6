//! katas CLI library
//!
//! This library provides the command-line harness that runs every variant of
//! the factorial, maximum-subarray and word-count algorithms side by side.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
