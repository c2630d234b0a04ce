//! wordbreak CLI library
//!
//! This library provides the command-line interface for Unicode word
//! boundary segmentation built on `wordbreak-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
