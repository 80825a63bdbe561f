use crate::ast::{ArithmeticOperator, ComparisonOperator};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Delimiters
    /// Opening bracket of a boolean grouping
    ///
    /// # Examples
    /// ```text
    /// [a > 1 or b < 2] and c
    /// ```
    LBracket,

    /// Closing bracket
    RBracket,

    /// Left parenthesis for arithmetic grouping or function calls
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma separating function arguments
    Comma,

    // Literals
    /// Floating point number
    ///
    /// # Examples
    /// ```text
    /// 0.1
    /// 1.
    /// .5
    /// 1.0E4
    /// 2e-3
    /// nan
    /// infinity
    /// ```
    Double(f64),

    /// Integer, decimal or hexadecimal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 0x1F
    /// ```
    Integer(i64),

    /// Boolean literal
    ///
    /// # Examples
    /// ```text
    /// True
    /// false
    /// ```
    Boolean(bool),

    /// Variable or function name
    ///
    /// Starts with a letter and may contain letters, digits, `_`, `:`, `&`
    /// and the pairs `+:`, `-:`, `':` so particle list names stay whole.
    ///
    /// # Examples
    /// ```text
    /// p
    /// daughter
    /// pi+:good
    /// K_S0:all
    /// ```
    Identifier(String),

    // Boolean operators
    /// Logical AND (word, not symbol)
    And,

    /// Logical OR (word, not symbol)
    Or,

    /// Logical negation (word, not symbol)
    Not,

    /// `==`, `>=`, `<=`, `>`, `<`, `!=`
    Comparison(ComparisonOperator),

    /// `+`, `-`, `*`, `/`, `**`, `^`
    Arithmetic(ArithmeticOperator),
}

impl Token {
    /// Source-like rendering used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::LBracket => "[".to_string(),
            Token::RBracket => "]".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Comma => ",".to_string(),
            Token::Double(n) => n.to_string(),
            Token::Integer(n) => n.to_string(),
            Token::Boolean(b) => b.to_string(),
            Token::Identifier(name) => name.clone(),
            Token::And => "and".to_string(),
            Token::Or => "or".to_string(),
            Token::Not => "not".to_string(),
            Token::Comparison(op) => op.symbol().to_string(),
            Token::Arithmetic(op) => op.symbol().to_string(),
        }
    }
}

/// A token together with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}
