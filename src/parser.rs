use crate::{
    ast::{ArithmeticOperator, BooleanOperator, ComparisonOperator, Node, Spanned, Token},
    error::{CutResult, ParseError},
    lexer::Lexer,
};

/// Grammar start symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Full cut grammar: boolean operators, comparisons and `[...]` groupings.
    #[default]
    Cut,
    /// Arithmetic expressions only.
    Expression,
}

/// Tallest syntax tree the parser builds. Taller trees are rejected with
/// [`ParseError::TooDeep`].
pub const MAX_DEPTH: usize = 256;

/// Most recursive constructs (`not`, `[`, `(`, signs, exponents and function
/// arguments) that may enclose one another.
pub const MAX_NESTING: usize = 100;

/// A subtree together with its height, so limits are checked without walking it.
struct Subtree {
    node: Node,
    height: usize,
}

impl Subtree {
    fn leaf(node: Node) -> Self {
        Subtree { node, height: 1 }
    }
}

/// Recursive descent parser for cut strings.
///
/// A parser owns the token stream of exactly one input and is consumed by a
/// single call to [`Parser::parse`] or [`Parser::parse_expression`].
pub struct Parser {
    cut: String,
    tokens: Vec<Spanned>,
    index: usize,
    /// Number of enclosing function argument lists.
    scope: usize,
    /// Number of enclosing recursive constructs.
    nesting: usize,
    mode: Mode,
}

impl Parser {
    /// Scans the whole input up front, so grouping errors surface here.
    pub fn new(lexer: Lexer) -> CutResult<Self> {
        let cut = lexer.input().to_string();
        let tokens = lexer.tokenize()?;
        Ok(Parser {
            cut,
            tokens,
            index: 0,
            scope: 0,
            nesting: 0,
            mode: Mode::Cut,
        })
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|spanned| &spanned.token)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn check(&self, token: &Token) -> bool {
        self.current()
            .is_some_and(|current| std::mem::discriminant(current) == std::mem::discriminant(token))
    }

    fn expect(&mut self, expected: Token) -> CutResult<()> {
        if !self.check(&expected) {
            return Err(self.unexpected());
        }
        self.advance();
        Ok(())
    }

    /// Syntax error pointing at the current token, or at the last character
    /// when the input ended early.
    fn unexpected(&self) -> ParseError {
        match self.tokens.get(self.index) {
            Some(spanned) => ParseError::Syntax {
                cut: self.cut.clone(),
                position: spanned.position,
                detail: format!("Unexpected token '{}'", spanned.token.describe()),
            },
            None => ParseError::Syntax {
                cut: self.cut.clone(),
                position: self.cut.trim_end().len().saturating_sub(1),
                detail: "Unexpected end of input".to_string(),
            },
        }
    }

    fn too_deep(&self) -> ParseError {
        let position = self
            .tokens
            .get(self.index)
            .map_or(self.cut.len(), |spanned| spanned.position);
        ParseError::TooDeep { position }
    }

    /// Runs `parse` one recursive construct deeper.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> CutResult<T>) -> CutResult<T> {
        if self.nesting >= MAX_NESTING {
            return Err(self.too_deep());
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    /// Places `node` above children of height `below`.
    fn branch(&self, node: Node, below: usize) -> CutResult<Subtree> {
        let height = below + 1;
        if height > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok(Subtree { node, height })
    }

    fn wrap(&self, child: Subtree, build: impl FnOnce(Box<Node>) -> Node) -> CutResult<Subtree> {
        self.branch(build(Box::new(child.node)), child.height)
    }

    fn join(
        &self,
        left: Subtree,
        right: Subtree,
        build: impl FnOnce(Box<Node>, Box<Node>) -> Node,
    ) -> CutResult<Subtree> {
        let below = left.height.max(right.height);
        self.branch(build(Box::new(left.node), Box::new(right.node)), below)
    }

    fn is_top_level(&self) -> bool {
        self.scope == 0
    }

    /// Parse a complete cut. Empty input accepts everything.
    pub fn parse(&mut self) -> CutResult<Node> {
        self.mode = Mode::Cut;
        if self.tokens.is_empty() {
            return Ok(Node::accept_all());
        }
        let tree = self.parse_boolean_expression()?;
        self.finish(tree)
    }

    /// Parse a bare arithmetic expression.
    pub fn parse_expression(&mut self) -> CutResult<Node> {
        self.mode = Mode::Expression;
        let tree = self.parse_sum()?;
        self.finish(tree)
    }

    fn finish(&self, tree: Subtree) -> CutResult<Node> {
        if self.index < self.tokens.len() {
            return Err(self.unexpected());
        }
        tracing::debug!(
            nodes = tree.node.size(),
            depth = tree.height,
            "parsed {:?} '{}'",
            self.mode,
            self.cut
        );
        Ok(tree.node)
    }

    fn parse_boolean_expression(&mut self) -> CutResult<Subtree> {
        self.parse_disjunction()
    }

    fn parse_disjunction(&mut self) -> CutResult<Subtree> {
        let mut left = self.parse_conjunction()?;

        while self.check(&Token::Or) {
            self.advance();
            let right = self.parse_conjunction()?;

            left = self.join(left, right, |left, right| Node::BinaryBoolean {
                left,
                right,
                op: BooleanOperator::Or,
            })?;
        }
        Ok(left)
    }

    fn parse_conjunction(&mut self) -> CutResult<Subtree> {
        let mut left = self.parse_negation()?;

        while self.check(&Token::And) {
            self.advance();
            let right = self.parse_negation()?;

            left = self.join(left, right, |left, right| Node::BinaryBoolean {
                left,
                right,
                op: BooleanOperator::And,
            })?;
        }
        Ok(left)
    }

    fn parse_negation(&mut self) -> CutResult<Subtree> {
        if self.check(&Token::Not) {
            self.advance();
            let child = self.nested(Self::parse_negation)?;
            return self.wrap(child, |child| Node::UnaryBoolean {
                child,
                negate: true,
                bracketed: false,
            });
        }
        self.parse_bracket_expression()
    }

    fn parse_bracket_expression(&mut self) -> CutResult<Subtree> {
        if self.check(&Token::LBracket) {
            self.advance();
            let child = self.nested(Self::parse_boolean_expression)?;
            self.expect(Token::RBracket)?;
            return self.wrap(child, |child| Node::UnaryBoolean {
                child,
                negate: false,
                bracketed: true,
            });
        }
        self.parse_relational()
    }

    fn comparison(&mut self) -> Option<ComparisonOperator> {
        match self.current() {
            Some(Token::Comparison(op)) => {
                let op = *op;
                self.advance();
                Some(op)
            }
            _ => None,
        }
    }

    /// At most two comparisons chain; a third one is left for the caller to reject.
    fn parse_relational(&mut self) -> CutResult<Subtree> {
        let left = self.parse_sum()?;

        let Some(left_op) = self.comparison() else {
            return self.wrap(left, |expr| Node::UnaryRelational { expr });
        };
        let center = self.parse_sum()?;

        let Some(right_op) = self.comparison() else {
            return self.join(left, center, |left, right| Node::BinaryRelational {
                left,
                right,
                op: left_op,
            });
        };
        let right = self.parse_sum()?;

        let below = left.height.max(center.height).max(right.height);
        self.branch(
            Node::TernaryRelational {
                left: Box::new(left.node),
                center: Box::new(center.node),
                right: Box::new(right.node),
                left_op,
                right_op,
            },
            below,
        )
    }

    fn parse_sum(&mut self) -> CutResult<Subtree> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current() {
                Some(Token::Arithmetic(
                    op @ (ArithmeticOperator::Add | ArithmeticOperator::Subtract),
                )) => *op,
                _ => break,
            };

            self.advance();
            let right = self.parse_term()?;

            left = self.join(left, right, |left, right| Node::BinaryExpression {
                left,
                right,
                op,
            })?;
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> CutResult<Subtree> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.current() {
                Some(Token::Arithmetic(
                    op @ (ArithmeticOperator::Multiply | ArithmeticOperator::Divide),
                )) => *op,
                _ => break,
            };

            self.advance();
            let right = self.parse_factor()?;

            left = self.join(left, right, |left, right| Node::BinaryExpression {
                left,
                right,
                op,
            })?;
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> CutResult<Subtree> {
        let negate = match self.current() {
            Some(Token::Arithmetic(ArithmeticOperator::Add)) => false,
            Some(Token::Arithmetic(ArithmeticOperator::Subtract)) => true,
            _ => return self.parse_power(),
        };

        self.advance();
        let operand = self.nested(Self::parse_factor)?;
        self.wrap(operand, |expr| Node::UnaryExpression {
            expr,
            negate,
            bracketed: false,
        })
    }

    /// The exponent is a factor, not a power, which makes `**` right associative.
    fn parse_power(&mut self) -> CutResult<Subtree> {
        let base = self.parse_primary()?;

        match self.current() {
            Some(Token::Arithmetic(op)) if op.is_power() => {
                let op = *op;
                self.advance();
                let exponent = self.nested(Self::parse_factor)?;
                self.join(base, exponent, |left, right| Node::BinaryExpression {
                    left,
                    right,
                    op,
                })
            }
            _ => Ok(base),
        }
    }

    fn parse_primary(&mut self) -> CutResult<Subtree> {
        let node = match self.current().cloned() {
            Some(Token::LParen) => {
                self.advance();
                let expr = self.nested(Self::parse_sum)?;
                self.expect(Token::RParen)?;
                return self.wrap(expr, |expr| Node::UnaryExpression {
                    expr,
                    negate: false,
                    bracketed: true,
                });
            }
            Some(Token::Identifier(name)) => {
                self.advance();
                if self.check(&Token::LParen) {
                    return self.parse_function(name);
                }
                return Ok(Subtree::leaf(Node::Identifier {
                    name,
                    is_top_level: self.is_top_level(),
                }));
            }
            Some(Token::Integer(n)) => Node::IntegerLiteral(n),
            Some(Token::Double(n)) => Node::DoubleLiteral(n),
            Some(Token::Boolean(b)) => Node::BooleanLiteral(b),
            _ => return Err(self.unexpected()),
        };
        self.advance();
        Ok(Subtree::leaf(node))
    }

    fn parse_function(&mut self, name: String) -> CutResult<Subtree> {
        let is_top_level = self.is_top_level();
        self.expect(Token::LParen)?;

        let mut args = vec![];
        let mut below = 0;
        if !self.check(&Token::RParen) {
            loop {
                let arg = self.nested(Self::parse_parameter)?;
                below = below.max(arg.height);
                args.push(arg.node);
                if !self.check(&Token::Comma) {
                    break;
                }
                self.advance();
            }
        }
        self.expect(Token::RParen)?;

        self.branch(
            Node::Function {
                name,
                args,
                is_top_level,
            },
            below,
        )
    }

    fn parse_parameter(&mut self) -> CutResult<Subtree> {
        self.scope += 1;
        let parameter = match self.mode {
            Mode::Cut => self.parse_boolean_expression(),
            Mode::Expression => self.parse_sum(),
        };
        self.scope -= 1;
        parameter
    }
}
