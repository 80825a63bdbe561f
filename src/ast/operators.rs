/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOperator {
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

impl BooleanOperator {
    /// Integer code understood by the native evaluator.
    pub const fn code(self) -> i32 {
        match self {
            BooleanOperator::And => 0,
            BooleanOperator::Or => 1,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BooleanOperator::And => "and",
            BooleanOperator::Or => "or",
        }
    }
}

/// Comparison operators.
///
/// The code order is fixed by the evaluator and is not alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Equal (`==`)
    Equal,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
    /// Not equal (`!=`)
    NotEqual,
}

impl ComparisonOperator {
    /// Integer code understood by the native evaluator.
    pub const fn code(self) -> i32 {
        match self {
            ComparisonOperator::Equal => 0,
            ComparisonOperator::GreaterEqual => 1,
            ComparisonOperator::LessEqual => 2,
            ComparisonOperator::GreaterThan => 3,
            ComparisonOperator::LessThan => 4,
            ComparisonOperator::NotEqual => 5,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "==",
            ComparisonOperator::GreaterEqual => ">=",
            ComparisonOperator::LessEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::NotEqual => "!=",
        }
    }
}

/// Arithmetic operators.
///
/// `**` and `^` are two spellings of exponentiation. They share a code but
/// are kept apart so verbose output and decompilation reproduce the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`**`)
    Power,
    /// Exponentiation (`^`)
    Caret,
}

impl ArithmeticOperator {
    /// Integer code understood by the native evaluator.
    pub const fn code(self) -> i32 {
        match self {
            ArithmeticOperator::Add => 0,
            ArithmeticOperator::Subtract => 1,
            ArithmeticOperator::Multiply => 2,
            ArithmeticOperator::Divide => 3,
            ArithmeticOperator::Power | ArithmeticOperator::Caret => 4,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
            ArithmeticOperator::Power => "**",
            ArithmeticOperator::Caret => "^",
        }
    }

    pub const fn is_power(self) -> bool {
        matches!(self, ArithmeticOperator::Power | ArithmeticOperator::Caret)
    }
}
