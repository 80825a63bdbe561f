//! # Cut Strings - Abstract Syntax Tree
//!
//! A cut string is a selection predicate over named variables and function
//! calls. It is compiled into the tree defined here and handed to an external
//! evaluator.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[nodes]** - Tree nodes and their external tags
//! - **[operators]** - Boolean, comparison and arithmetic operators
//!
//! ## Quick Start
//!
//! ```text
//! [M > 5.2 and abs(dM) < 0.1] or not isBackground
//! ```
//!
//! ## Layers
//!
//! From loosest to tightest binding:
//!
//! - **Boolean** - `or`, `and`, `not`, and `[...]` grouping
//! - **Relational** - a bare expression, one comparison, or two chained comparisons
//! - **Arithmetic** - `+ -`, `* /`, unary sign, `**`/`^` (right associative), `(...)` grouping
//! - **Primaries** - identifiers, function calls and literals
//!
//! ## Scope
//!
//! Identifiers and functions remember whether they appeared outside every
//! function argument list (`is_top_level`):
//!
//! ```text
//! foo(bar, 1) > baz
//! ```
//!
//! Here `foo` and `baz` are top level, `bar` is not.
pub mod nodes;
pub mod operators;
pub mod tokens;

pub use nodes::{Node, NodeKind};
pub use operators::{ArithmeticOperator, BooleanOperator, ComparisonOperator};
pub use tokens::{Spanned, Token};
