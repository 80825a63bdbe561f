use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::{ArithmeticOperator, ComparisonOperator, Spanned, Token},
    error::{CutResult, ParseError},
};

// Decimal with a fractional part and/or an exponent: 0.1, 1., .1, 1.0E4, 1e-4
static DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:[0-9]+\.[0-9]*|[0-9]*\.[0-9]+)(?:[eE][-+]?[0-9]+)?|[0-9]+[eE][-+]?[0-9]+)")
        .expect("double literal pattern is valid")
});

static INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0[xX][0-9A-Fa-f]+|[0-9]+)").expect("integer literal pattern is valid")
});

/// Kind of grouping symbol waiting for its closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Bracket,
    Paren,
}

impl Group {
    fn opener(self) -> char {
        match self {
            Group::Bracket => '[',
            Group::Paren => '(',
        }
    }

    fn closer(self) -> char {
        match self {
            Group::Bracket => ']',
            Group::Paren => ')',
        }
    }
}

/// Splits a cut string into tokens.
///
/// Grouping symbols are checked while scanning: every `]` and `)` must close
/// the most recent open `[` or `(` of the same kind, and nothing may remain
/// open at the end of input.
pub struct Lexer {
    input: String,
    position: usize,
    groups: Vec<(Group, usize)>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.to_string(),
            position: 0,
            groups: Vec::new(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input[self.position..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n') = self.current_char() {
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || matches!(ch, '_' | ':' | '&') {
                result.push(ch);
                self.advance();
            } else if matches!(ch, '+' | '-' | '\'') && self.peek_char(1) == Some(':') {
                // particle list suffixes such as pi+:good
                result.push(ch);
                result.push(':');
                self.advance();
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_number(&mut self) -> CutResult<Token> {
        let start = self.position;
        let rest = &self.input[start..];

        if let Some(m) = DOUBLE.find(rest) {
            let text = m.as_str();
            let value = text
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidLiteral {
                    text: text.to_string(),
                    position: start,
                })?;
            self.position += text.len();
            return Ok(Token::Double(value));
        }

        let text = INTEGER
            .find(rest)
            .map(|m| m.as_str())
            .ok_or(ParseError::IllegalCharacter {
                character: rest.chars().next().unwrap_or('.'),
                position: start,
            })?;
        let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(digits) => i64::from_str_radix(digits, 16),
            None => text.parse::<i64>(),
        };
        let value = parsed.map_err(|_| ParseError::InvalidLiteral {
            text: text.to_string(),
            position: start,
        })?;
        self.position += text.len();
        Ok(Token::Integer(value))
    }

    fn open(&mut self, group: Group) -> Token {
        self.groups.push((group, self.position));
        self.advance();
        match group {
            Group::Bracket => Token::LBracket,
            Group::Paren => Token::LParen,
        }
    }

    fn close(&mut self, group: Group) -> CutResult<Token> {
        let position = self.position;
        match self.groups.pop() {
            None => Err(ParseError::UnmatchedClose {
                symbol: group.closer(),
                position,
            }),
            Some((open, _)) if open != group => Err(ParseError::MismatchedClose {
                found: group.closer(),
                expected: open.closer(),
                position,
            }),
            Some(_) => {
                self.advance();
                Ok(match group {
                    Group::Bracket => Token::RBracket,
                    Group::Paren => Token::RParen,
                })
            }
        }
    }

    /// Consumes one character and yields `token`.
    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Consumes `first` and, if it follows, `second`.
    fn one_or_two(&mut self, second: char, paired: Token, alone: Token) -> Token {
        if self.peek_char(1) == Some(second) {
            self.advance();
            self.advance();
            paired
        } else {
            self.advance();
            alone
        }
    }

    /// Returns the next token, or `None` at the end of input.
    ///
    /// Reaching the end of input with a grouping symbol still open is an error.
    pub fn next_token(&mut self) -> CutResult<Option<Spanned>> {
        self.skip_whitespace();
        let position = self.position;

        let token = match self.current_char() {
            None => {
                if let Some(&(group, position)) = self.groups.first() {
                    return Err(ParseError::UnmatchedOpen {
                        symbol: group.opener(),
                        position,
                    });
                }
                return Ok(None);
            }
            Some('[') => self.open(Group::Bracket),
            Some(']') => self.close(Group::Bracket)?,
            Some('(') => self.open(Group::Paren),
            Some(')') => self.close(Group::Paren)?,
            Some(',') => self.single(Token::Comma),
            Some('+') => self.single(Token::Arithmetic(ArithmeticOperator::Add)),
            Some('-') => self.single(Token::Arithmetic(ArithmeticOperator::Subtract)),
            Some('/') => self.single(Token::Arithmetic(ArithmeticOperator::Divide)),
            Some('^') => self.single(Token::Arithmetic(ArithmeticOperator::Caret)),
            Some('*') => self.one_or_two(
                '*',
                Token::Arithmetic(ArithmeticOperator::Power),
                Token::Arithmetic(ArithmeticOperator::Multiply),
            ),
            Some('>') => self.one_or_two(
                '=',
                Token::Comparison(ComparisonOperator::GreaterEqual),
                Token::Comparison(ComparisonOperator::GreaterThan),
            ),
            Some('<') => self.one_or_two(
                '=',
                Token::Comparison(ComparisonOperator::LessEqual),
                Token::Comparison(ComparisonOperator::LessThan),
            ),
            Some(ch @ ('=' | '!')) => {
                if self.peek_char(1) != Some('=') {
                    return Err(ParseError::IllegalCharacter {
                        character: ch,
                        position,
                    });
                }
                self.advance();
                self.advance();
                if ch == '=' {
                    Token::Comparison(ComparisonOperator::Equal)
                } else {
                    Token::Comparison(ComparisonOperator::NotEqual)
                }
            }
            Some(ch) if ch.is_ascii_alphabetic() => {
                let ident = self.read_identifier();

                match ident.as_str() {
                    "and" => Token::And,
                    "or" => Token::Or,
                    "not" => Token::Not,
                    "True" | "true" => Token::Boolean(true),
                    "False" | "false" => Token::Boolean(false),
                    "nan" => Token::Double(f64::NAN),
                    "infinity" | "inf" => Token::Double(f64::INFINITY),
                    _ => Token::Identifier(ident),
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number()?,
            Some('.') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.read_number()?
            }
            Some(ch) => {
                return Err(ParseError::IllegalCharacter {
                    character: ch,
                    position,
                });
            }
        };

        tracing::trace!(?token, position, "scanned token");
        Ok(Some(Spanned { token, position }))
    }

    /// Scans the whole input.
    ///
    /// Grouping errors anywhere in the input are reported before the parser
    /// sees a single token.
    pub fn tokenize(mut self) -> CutResult<Vec<Spanned>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// The text being scanned.
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
fn kinds(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

#[test]
fn test_keywords() {
    assert_eq!(
        kinds("and or not True false"),
        vec![
            Token::And,
            Token::Or,
            Token::Not,
            Token::Boolean(true),
            Token::Boolean(false),
        ]
    );
}

#[test]
fn test_particle_list_identifier() {
    assert_eq!(
        kinds("pi+:good > 0"),
        vec![
            Token::Identifier("pi+:good".to_string()),
            Token::Comparison(ComparisonOperator::GreaterThan),
            Token::Integer(0),
        ]
    );
}

#[test]
fn test_positions() {
    let tokens = Lexer::new("  a  ==\t12").tokenize().unwrap();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![2, 5, 8]);
}
