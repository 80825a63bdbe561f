//! Validate, encode or decompile a cut string

use super::CliError;
use crate::{Encoder, ParseOptions};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The cut (or expression) to parse
    pub cut: String,
    /// Grammar and presentation settings
    pub options: ParseOptions,
    /// Only validate syntax, don't encode
    pub syntax_only: bool,
    /// Print the normalized cut instead of its encoding
    pub decompile: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Tuple encoding of the tree
    Encoded(serde_json::Value),
    /// Normalized cut text
    Decompiled(String),
}

/// Execute a cutparse check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let ParseOptions { mode, presentation } = options.options;
    let tree = crate::parse_with(&options.cut, mode)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }
    if options.decompile {
        return Ok(CheckResult::Decompiled(tree.to_string()));
    }
    Ok(CheckResult::Encoded(Encoder::new(presentation).encode(&tree)))
}
