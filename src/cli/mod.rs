//! CLI support for cutparse
//!
//! Provides programmatic access to the `cutparse` command so other tools can
//! validate and encode cut strings the same way.

mod check;

pub use check::{CheckOptions, CheckResult, execute_check};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// The cut string was rejected
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// Reading the cut from stdin failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No cut given and nothing piped to stdin
    #[error("No cut provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
}
