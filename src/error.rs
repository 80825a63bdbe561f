use thiserror::Error;

/// Result alias used throughout the lexer and parser.
pub type CutResult<T> = Result<T, ParseError>;

/// Every way a cut string can be rejected.
///
/// All variants are fatal: a cut that fails to parse is invalid as a whole and
/// there is no partial tree to recover.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// An opening `[` or `(` that is never closed.
    #[error("Unmatched '{symbol}' in cut.")]
    UnmatchedOpen { symbol: char, position: usize },

    /// A closing `]` or `)` with nothing open.
    #[error("Unmatched '{symbol}' in cut.")]
    UnmatchedClose { symbol: char, position: usize },

    /// A closer of the wrong kind, e.g. `)` while a `[` is open.
    #[error("Illegal '{found}', expected '{expected}'.")]
    MismatchedClose {
        found: char,
        expected: char,
        position: usize,
    },

    /// A character that does not start any token.
    #[error("Illegal character '{character}' at position {position}.")]
    IllegalCharacter { character: char, position: usize },

    /// A numeric literal that cannot be represented.
    #[error("Invalid literal '{text}' at position {position}.")]
    InvalidLiteral { text: String, position: usize },

    /// Nesting beyond [`MAX_NESTING`](crate::parser::MAX_NESTING) recursive
    /// constructs, or a tree taller than [`MAX_DEPTH`](crate::parser::MAX_DEPTH).
    #[error("Cut nested too deeply at position {position}.")]
    TooDeep { position: usize },

    /// The token sequence does not reduce under the grammar.
    #[error("Error in cutstring. detected at:\n{cut}\n{}^\n{detail}", caret(.position))]
    Syntax {
        cut: String,
        position: usize,
        detail: String,
    },
}

fn caret(position: &usize) -> String {
    " ".repeat(*position)
}

impl ParseError {
    /// Byte offset into the cut string where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnmatchedOpen { position, .. }
            | ParseError::UnmatchedClose { position, .. }
            | ParseError::MismatchedClose { position, .. }
            | ParseError::IllegalCharacter { position, .. }
            | ParseError::InvalidLiteral { position, .. }
            | ParseError::TooDeep { position }
            | ParseError::Syntax { position, .. } => *position,
        }
    }
}
