//! Tuple encoding of syntax trees for the native evaluator.
//!
//! Every node becomes a JSON array whose first element is the node tag,
//! followed by the node's fields in a fixed order. Tags and operators are
//! written as integer codes, or as their names when the encoder runs in
//! verbose mode. The presentation never changes the shape of the output.
//!
//! # Layout
//!
//! | Node                | Array                                         |
//! |---------------------|-----------------------------------------------|
//! | `UnaryBoolean`      | `[tag, child, negate, bracketed]`             |
//! | `BinaryBoolean`     | `[tag, left, right, op]`                      |
//! | `UnaryRelational`   | `[tag, expr]`                                 |
//! | `BinaryRelational`  | `[tag, left, right, op]`                      |
//! | `TernaryRelational` | `[tag, left, center, right, left_op, right_op]` |
//! | `UnaryExpression`   | `[tag, expr, negate, bracketed]`              |
//! | `BinaryExpression`  | `[tag, left, right, op]`                      |
//! | `Function`          | `[tag, name, arg_count, [args...], is_top_level]` |
//! | `Identifier`        | `[tag, name, is_top_level]`                   |
//! | literals            | `[tag, value]`                                |
//!
//! JSON has no representation for non-finite numbers, so NaN and the
//! infinities are written as the strings `"nan"`, `"inf"` and `"-inf"`.
//!
//! # Examples
//!
//! ```
//! use cutparse::encoding::{Presentation, to_json};
//!
//! let tree = cutparse::parse("1 == 1").unwrap();
//! assert_eq!(to_json(&tree, Presentation::Compact), "[3,[10,1],[10,1],0]");
//! ```

use serde_json::{Value, json};

use crate::ast::{Node, NodeKind};

/// How tags and operators are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presentation {
    /// Integer codes, as consumed by the evaluator.
    #[default]
    Compact,
    /// Node names and operator symbols, for debugging.
    Verbose,
}

pub struct Encoder {
    presentation: Presentation,
}

impl Encoder {
    pub fn new(presentation: Presentation) -> Self {
        Encoder { presentation }
    }

    fn verbose(&self) -> bool {
        self.presentation == Presentation::Verbose
    }

    fn tag(&self, kind: NodeKind) -> Value {
        if self.verbose() {
            json!(kind.name())
        } else {
            json!(kind.code())
        }
    }

    fn operator(&self, code: i32, symbol: &str) -> Value {
        if self.verbose() {
            json!(symbol)
        } else {
            json!(code)
        }
    }

    fn double(value: f64) -> Value {
        if value.is_nan() {
            json!("nan")
        } else if value.is_infinite() {
            json!(if value > 0.0 { "inf" } else { "-inf" })
        } else {
            json!(value)
        }
    }

    pub fn encode(&self, node: &Node) -> Value {
        let tag = self.tag(node.kind());
        match node {
            Node::UnaryBoolean {
                child,
                negate,
                bracketed,
            } => json!([tag, self.encode(child), negate, bracketed]),
            Node::BinaryBoolean { left, right, op } => json!([
                tag,
                self.encode(left),
                self.encode(right),
                self.operator(op.code(), op.symbol()),
            ]),
            Node::UnaryRelational { expr } => json!([tag, self.encode(expr)]),
            Node::BinaryRelational { left, right, op } => json!([
                tag,
                self.encode(left),
                self.encode(right),
                self.operator(op.code(), op.symbol()),
            ]),
            Node::TernaryRelational {
                left,
                center,
                right,
                left_op,
                right_op,
            } => json!([
                tag,
                self.encode(left),
                self.encode(center),
                self.encode(right),
                self.operator(left_op.code(), left_op.symbol()),
                self.operator(right_op.code(), right_op.symbol()),
            ]),
            Node::UnaryExpression {
                expr,
                negate,
                bracketed,
            } => json!([tag, self.encode(expr), negate, bracketed]),
            Node::BinaryExpression { left, right, op } => json!([
                tag,
                self.encode(left),
                self.encode(right),
                self.operator(op.code(), op.symbol()),
            ]),
            Node::Function {
                name,
                args,
                is_top_level,
            } => {
                let args: Vec<Value> = args.iter().map(|arg| self.encode(arg)).collect();
                json!([tag, name, args.len(), args, is_top_level])
            }
            Node::Identifier { name, is_top_level } => json!([tag, name, is_top_level]),
            Node::DoubleLiteral(value) => json!([tag, Self::double(*value)]),
            Node::IntegerLiteral(value) => json!([tag, value]),
            Node::BooleanLiteral(value) => json!([tag, value]),
        }
    }
}

// Convenience functions

/// Encodes a tree as compact JSON text.
pub fn to_json(node: &Node, presentation: Presentation) -> String {
    Encoder::new(presentation).encode(node).to_string()
}

/// Encodes a tree as indented JSON text.
pub fn to_json_pretty(node: &Node, presentation: Presentation) -> String {
    let value = Encoder::new(presentation).encode(node);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
