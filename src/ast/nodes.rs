use crate::ast::{ArithmeticOperator, BooleanOperator, ComparisonOperator};

/// Abstract Syntax Tree node produced by the parser.
///
/// Boolean nodes (`UnaryBoolean`, `BinaryBoolean`) sit above relational nodes,
/// which sit above arithmetic expression nodes and leaves. The grammar enforces
/// this layering; the type does not.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Boolean layer
    /// Negated or bracketed boolean sub-expression
    ///
    /// # Examples
    /// ```text
    /// not a
    /// [a and b]
    /// ```
    UnaryBoolean {
        child: Box<Node>,
        negate: bool,
        bracketed: bool,
    },

    /// `and` / `or` of two boolean sub-expressions
    BinaryBoolean {
        left: Box<Node>,
        right: Box<Node>,
        op: BooleanOperator,
    },

    // Relational layer
    /// A bare expression used as a condition
    ///
    /// # Example
    /// ```text
    /// isSignal
    /// ```
    UnaryRelational { expr: Box<Node> },

    /// A single comparison
    ///
    /// # Example
    /// ```text
    /// M > 5.2
    /// ```
    BinaryRelational {
        left: Box<Node>,
        right: Box<Node>,
        op: ComparisonOperator,
    },

    /// Two chained comparisons
    ///
    /// # Example
    /// ```text
    /// 5.2 < M < 5.3
    /// ```
    TernaryRelational {
        left: Box<Node>,
        center: Box<Node>,
        right: Box<Node>,
        left_op: ComparisonOperator,
        right_op: ComparisonOperator,
    },

    // Arithmetic layer
    /// Unary sign or parenthesized expression
    ///
    /// # Examples
    /// ```text
    /// -p
    /// (px + py)
    /// ```
    UnaryExpression {
        expr: Box<Node>,
        negate: bool,
        bracketed: bool,
    },

    /// Arithmetic on two sub-expressions
    BinaryExpression {
        left: Box<Node>,
        right: Box<Node>,
        op: ArithmeticOperator,
    },

    // Leaves
    /// Function call with parsed arguments
    ///
    /// # Example
    /// ```text
    /// daughter(0, p)
    /// ```
    Function {
        name: String,
        args: Vec<Node>,
        is_top_level: bool,
    },

    /// Variable reference
    Identifier { name: String, is_top_level: bool },

    DoubleLiteral(f64),

    IntegerLiteral(i64),

    BooleanLiteral(bool),
}

impl Node {
    /// The cut that accepts everything.
    pub fn accept_all() -> Self {
        Node::UnaryRelational {
            expr: Box::new(Node::BooleanLiteral(true)),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::UnaryBoolean { .. } => NodeKind::UnaryBoolean,
            Node::BinaryBoolean { .. } => NodeKind::BinaryBoolean,
            Node::UnaryRelational { .. } => NodeKind::UnaryRelational,
            Node::BinaryRelational { .. } => NodeKind::BinaryRelational,
            Node::TernaryRelational { .. } => NodeKind::TernaryRelational,
            Node::UnaryExpression { .. } => NodeKind::UnaryExpression,
            Node::BinaryExpression { .. } => NodeKind::BinaryExpression,
            Node::Function { .. } => NodeKind::Function,
            Node::Identifier { .. } => NodeKind::Identifier,
            Node::DoubleLiteral(_) => NodeKind::DoubleLiteral,
            Node::IntegerLiteral(_) => NodeKind::IntegerLiteral,
            Node::BooleanLiteral(_) => NodeKind::BooleanLiteral,
        }
    }

    /// Number of arguments of a function node, `None` for every other node.
    pub fn arg_count(&self) -> Option<usize> {
        match self {
            Node::Function { args, .. } => Some(args.len()),
            _ => None,
        }
    }

    /// Direct children in field order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::UnaryBoolean { child, .. } => vec![child.as_ref()],
            Node::UnaryRelational { expr } | Node::UnaryExpression { expr, .. } => vec![expr.as_ref()],
            Node::BinaryBoolean { left, right, .. }
            | Node::BinaryRelational { left, right, .. }
            | Node::BinaryExpression { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Node::TernaryRelational {
                left,
                center,
                right,
                ..
            } => vec![left.as_ref(), center.as_ref(), right.as_ref()],
            Node::Function { args, .. } => args.iter().collect(),
            Node::Identifier { .. }
            | Node::DoubleLiteral(_)
            | Node::IntegerLiteral(_)
            | Node::BooleanLiteral(_) => vec![],
        }
    }

    /// Total number of nodes in this tree.
    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Node::size).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Node tags of the external tree encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    UnaryBoolean,
    BinaryBoolean,
    UnaryRelational,
    BinaryRelational,
    TernaryRelational,
    UnaryExpression,
    BinaryExpression,
    Function,
    Identifier,
    DoubleLiteral,
    IntegerLiteral,
    BooleanLiteral,
}

impl NodeKind {
    /// Integer code understood by the native evaluator.
    pub const fn code(self) -> i32 {
        match self {
            NodeKind::UnaryBoolean => 0,
            NodeKind::BinaryBoolean => 1,
            NodeKind::UnaryRelational => 2,
            NodeKind::BinaryRelational => 3,
            NodeKind::TernaryRelational => 4,
            NodeKind::UnaryExpression => 5,
            NodeKind::BinaryExpression => 6,
            NodeKind::Function => 7,
            NodeKind::Identifier => 8,
            NodeKind::DoubleLiteral => 9,
            NodeKind::IntegerLiteral => 10,
            NodeKind::BooleanLiteral => 11,
        }
    }

    /// Name written in place of the code in verbose output.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::UnaryBoolean => "UnaryBooleanNode",
            NodeKind::BinaryBoolean => "BinaryBooleanNode",
            NodeKind::UnaryRelational => "UnaryRelationalNode",
            NodeKind::BinaryRelational => "BinaryRelationalNode",
            NodeKind::TernaryRelational => "TernaryRelationalNode",
            NodeKind::UnaryExpression => "UnaryExpressionNode",
            NodeKind::BinaryExpression => "BinaryExpressionNode",
            NodeKind::Function => "FunctionNode",
            NodeKind::Identifier => "IdentifierNode",
            NodeKind::DoubleLiteral => "DoubleNode",
            NodeKind::IntegerLiteral => "IntegerNode",
            NodeKind::BooleanLiteral => "BooleanNode",
        }
    }
}
