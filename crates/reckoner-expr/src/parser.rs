//! Expression parser
//!
//! A recursive descent parser over the lexer's token stream, one function per
//! precedence level.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{ExprError, ExprResult};
use crate::functions::registry;
use crate::lexer::{tokenize, Charset, Operator, SpannedToken, Token};

/// Deepest nesting of parentheses, calls and unary signs accepted
pub const MAX_NESTING: usize = 256;

/// Most operator and call nodes a single tree may hold
///
/// Bounds the height of operator chains such as `1+1+...+1`, which the
/// nesting limit does not see.
pub const MAX_OPERATIONS: usize = 2048;

/// Options controlling how text is parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Character whitelist checked before tokenizing
    pub charset: Charset,
    /// Name of the free variable, if any
    pub variable: Option<String>,
}

impl ParseOptions {
    /// Basic calculator grammar: no letters, so no functions or variable
    pub fn basic() -> Self {
        Self {
            charset: Charset::Basic,
            variable: None,
        }
    }

    /// Scientific grammar with `name` bound as the free variable
    pub fn with_variable(name: impl Into<String>) -> Self {
        Self {
            charset: Charset::Scientific,
            variable: Some(name.into()),
        }
    }
}

/// Parse an expression string into a tree
///
/// Empty input parses to `0`.
///
/// # Example
/// ```rust
/// use reckoner_expr::{parse_expression, Expr, ParseOptions};
///
/// let tree = parse_expression("1+2*3", &ParseOptions::default()).unwrap();
/// let tree = parse_expression("sin(x)^2", &ParseOptions::with_variable("x")).unwrap();
/// assert_eq!(parse_expression("", &ParseOptions::default()).unwrap(), Expr::Literal(0.0));
/// ```
pub fn parse_expression(input: &str, options: &ParseOptions) -> ExprResult<Expr> {
    let tokens = tokenize(input, options.charset)?;
    if tokens.is_empty() {
        return Ok(Expr::Literal(0.0));
    }

    let mut parser = ExpressionParser::new(&tokens, options.variable.as_deref());
    let expr = parser.parse_additive()?;

    // Make sure we consumed all input
    if let Some(next) = parser.peek() {
        if next.token == Token::RightParen {
            return Err(ExprError::UnbalancedParentheses {
                offset: next.offset,
            });
        }
        return Err(ExprError::TrailingInput {
            found: next.token.to_string(),
            offset: next.offset,
        });
    }

    log::trace!("parsed {:?} as {}", input, expr);
    Ok(expr)
}

struct ExpressionParser<'a> {
    tokens: &'a [SpannedToken],
    pos: usize,
    variable: Option<&'a str>,
    depth: usize,
    operations: usize,
}

impl<'a> ExpressionParser<'a> {
    fn new(tokens: &'a [SpannedToken], variable: Option<&'a str>) -> Self {
        Self {
            tokens,
            pos: 0,
            variable,
            depth: 0,
            operations: 0,
        }
    }

    // === Token helpers ===

    fn peek(&self) -> Option<&'a SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn peek_operator(&self) -> Option<Operator> {
        match self.peek() {
            Some(SpannedToken {
                token: Token::Operator(op),
                ..
            }) => Some(*op),
            _ => None,
        }
    }

    fn consume(&mut self) -> Option<&'a SpannedToken> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn unexpected(token: &SpannedToken) -> ExprError {
        ExprError::UnexpectedToken {
            found: token.token.to_string(),
            offset: token.offset,
        }
    }

    /// Whether the token after the current one can begin an operand
    fn operand_follows(&self) -> bool {
        matches!(
            self.tokens.get(self.pos + 1).map(|t| &t.token),
            Some(Token::Number(_) | Token::Identifier(_) | Token::LeftParen)
        )
    }

    /// Record one more operator or call node
    fn count_operation(&mut self) -> ExprResult<()> {
        self.operations += 1;
        if self.operations > MAX_OPERATIONS {
            return Err(ExprError::TooManyOperations {
                limit: MAX_OPERATIONS,
            });
        }
        Ok(())
    }

    /// Consume the `)` closing the `(` at `open_offset`
    fn expect_close(&mut self, open_offset: usize) -> ExprResult<()> {
        match self.consume() {
            Some(SpannedToken {
                token: Token::RightParen,
                ..
            }) => Ok(()),
            Some(other) => Err(Self::unexpected(other)),
            None => Err(ExprError::UnbalancedParentheses {
                offset: open_offset,
            }),
        }
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division/Remainder: *, /, %
    // 3. Unary: -, +
    // 4. Exponentiation: ^ (right associative)
    // 5. Postfix: % when no operand follows it
    // 6. Primary: numbers, names, calls, parentheses

    fn parse_additive(&mut self) -> ExprResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.peek_operator() {
                Some(Operator::Plus) => BinaryOperator::Add,
                Some(Operator::Minus) => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume();
            self.count_operation()?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> ExprResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.peek_operator() {
                Some(Operator::Star) => BinaryOperator::Multiply,
                Some(Operator::Slash) => BinaryOperator::Divide,
                Some(Operator::Percent) => BinaryOperator::Remainder,
                _ => break,
            };

            self.consume();
            self.count_operation()?;
            let right = self.parse_unary()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    // Every nested construct passes through here, so this is where depth is bounded.
    fn parse_unary(&mut self) -> ExprResult<Expr> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ExprError::NestingTooDeep { limit: MAX_NESTING });
        }
        let result = self.parse_signed();
        self.depth -= 1;
        result
    }

    fn parse_signed(&mut self) -> ExprResult<Expr> {
        let op = match self.peek_operator() {
            Some(Operator::Minus) => UnaryOperator::Negate,
            Some(Operator::Plus) => UnaryOperator::Plus,
            _ => return self.parse_power(),
        };

        self.consume();
        self.count_operation()?;
        let operand = self.parse_unary()?;
        Ok(Expr::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_power(&mut self) -> ExprResult<Expr> {
        let base = self.parse_postfix()?;

        if self.peek_operator() == Some(Operator::Caret) {
            self.consume();
            self.count_operation()?;
            // Right associative, and the exponent may carry its own sign
            let exponent = self.parse_unary()?;
            return Ok(Expr::BinaryOp {
                op: BinaryOperator::Power,
                left: Box::new(base),
                right: Box::new(exponent),
            });
        }

        Ok(base)
    }

    fn parse_postfix(&mut self) -> ExprResult<Expr> {
        let mut expr = self.parse_primary()?;

        // `50%` and `200*10%`; a `%` followed by an operand is left for the remainder
        while self.peek_operator() == Some(Operator::Percent) && !self.operand_follows() {
            self.consume();
            self.count_operation()?;
            expr = Expr::UnaryOp {
                op: UnaryOperator::Percent,
                operand: Box::new(expr),
            };
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> ExprResult<Expr> {
        let token = self.consume().ok_or(ExprError::UnexpectedEnd)?;

        match &token.token {
            Token::Number(n) => Ok(Expr::Literal(*n)),

            Token::LeftParen => {
                let expr = self.parse_additive()?;
                self.expect_close(token.offset)?;
                Ok(expr)
            }

            Token::Identifier(name) => self.parse_identifier(name),

            _ => Err(Self::unexpected(token)),
        }
    }

    fn parse_identifier(&mut self, name: &str) -> ExprResult<Expr> {
        if self.variable == Some(name) {
            return Ok(Expr::Variable(name.to_string()));
        }

        let registry = registry();

        if let Some(value) = registry.constant(name) {
            return Ok(Expr::Literal(value));
        }

        match registry.function(name) {
            Some(def) => self.parse_call(name, def.arity),
            None => Err(ExprError::UnknownIdentifier(name.to_string())),
        }
    }

    fn parse_call(&mut self, name: &str, arity: usize) -> ExprResult<Expr> {
        let open_offset = match self.peek() {
            Some(token) if token.token == Token::LeftParen => token.offset,
            _ => {
                return Err(ExprError::MissingArguments {
                    function: name.to_string(),
                })
            }
        };
        self.consume();
        self.count_operation()?;

        let mut args = Vec::with_capacity(arity);

        if !matches!(self.peek().map(|t| &t.token), Some(Token::RightParen)) {
            args.push(self.parse_additive()?);

            while matches!(self.peek().map(|t| &t.token), Some(Token::Comma)) {
                self.consume();
                args.push(self.parse_additive()?);
            }
        }

        self.expect_close(open_offset)?;

        if args.len() != arity {
            return Err(ExprError::ArgumentCount {
                function: name.to_string(),
                expected: arity,
                actual: args.len(),
            });
        }

        Ok(Expr::Call {
            name: name.to_string(),
            args,
        })
    }
}
