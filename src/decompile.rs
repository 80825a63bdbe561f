//! Turns a syntax tree back into cut text.
//!
//! The output is normalized (single spaces around binary operators) and
//! parses back into the same tree.

use std::fmt;

use crate::ast::Node;

fn write_double(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        write!(f, "{}infinity", if value < 0.0 { "-" } else { "" })
    } else {
        // Debug keeps a fractional part or exponent, so the text stays a double
        write!(f, "{:?}", value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::UnaryBoolean {
                child,
                negate,
                bracketed,
            } => {
                if *negate {
                    write!(f, "not ")?;
                }
                if *bracketed {
                    write!(f, "[{}]", child)
                } else {
                    write!(f, "{}", child)
                }
            }
            Node::BinaryBoolean { left, right, op } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            Node::UnaryRelational { expr } => write!(f, "{}", expr),
            Node::BinaryRelational { left, right, op } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            Node::TernaryRelational {
                left,
                center,
                right,
                left_op,
                right_op,
            } => write!(
                f,
                "{} {} {} {} {}",
                left,
                left_op.symbol(),
                center,
                right_op.symbol(),
                right
            ),
            Node::UnaryExpression {
                expr,
                negate,
                bracketed,
            } => {
                if *negate {
                    write!(f, "-")?;
                } else if !*bracketed {
                    write!(f, "+")?;
                }
                if *bracketed {
                    write!(f, "({})", expr)
                } else {
                    write!(f, "{}", expr)
                }
            }
            Node::BinaryExpression { left, right, op } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
            Node::Function { name, args, .. } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Node::Identifier { name, .. } => write!(f, "{}", name),
            Node::DoubleLiteral(value) => write_double(f, *value),
            Node::IntegerLiteral(value) => write!(f, "{}", value),
            Node::BooleanLiteral(value) => write!(f, "{}", value),
        }
    }
}

/// Renders `node` as a cut string.
pub fn decompile(node: &Node) -> String {
    node.to_string()
}
