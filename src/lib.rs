pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod decompile;
pub mod encoding;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{
    ArithmeticOperator, BooleanOperator, ComparisonOperator, Node, NodeKind, Spanned, Token,
};
pub use encoding::{Encoder, Presentation, to_json, to_json_pretty};
pub use error::{CutResult, ParseError};
pub use lexer::Lexer;
pub use parser::{MAX_DEPTH, MAX_NESTING, Mode, Parser};

/// Parser and encoder settings for one cut string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: Mode,
    pub presentation: Presentation,
}

/// Compiles a cut string into its syntax tree.
///
/// Every call builds a fresh lexer and parser, so concurrent calls share
/// nothing.
///
/// # Examples
///
/// ```
/// use cutparse::{ComparisonOperator, Node};
///
/// let tree = cutparse::parse("1==1").unwrap();
/// assert_eq!(
///     tree,
///     Node::BinaryRelational {
///         left: Box::new(Node::IntegerLiteral(1)),
///         right: Box::new(Node::IntegerLiteral(1)),
///         op: ComparisonOperator::Equal,
///     }
/// );
///
/// // an empty cut accepts everything
/// assert_eq!(cutparse::parse("  ").unwrap(), Node::accept_all());
/// ```
pub fn parse(cut: &str) -> CutResult<Node> {
    parse_with(cut, Mode::Cut)
}

/// Compiles an arithmetic expression without the boolean layer.
///
/// ```
/// assert!(cutparse::parse_expression("px**2 + py**2").is_ok());
/// assert!(cutparse::parse_expression("px > 0").is_err());
/// ```
pub fn parse_expression(text: &str) -> CutResult<Node> {
    parse_with(text, Mode::Expression)
}

/// Compiles `text` with the given start symbol.
pub fn parse_with(text: &str, mode: Mode) -> CutResult<Node> {
    tracing::trace!(?mode, text, "parsing");
    let result = Parser::new(Lexer::new(text)).and_then(|mut parser| match mode {
        Mode::Cut => parser.parse(),
        Mode::Expression => parser.parse_expression(),
    });
    if let Err(e) = &result {
        tracing::debug!(?mode, text, "rejected: {}", e);
    }
    result
}
