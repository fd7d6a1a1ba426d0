//! Expression tree types

use std::fmt;

/// Expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal (named constants are folded into literals)
    Literal(f64),
    /// The bound free variable
    Variable(String),
    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Call to a registered function
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    /// Whether the tree references a variable anywhere
    pub fn has_variable(&self) -> bool {
        match self {
            Expr::Literal(_) => false,
            Expr::Variable(_) => true,
            Expr::UnaryOp { operand, .. } => operand.has_variable(),
            Expr::BinaryOp { left, right, .. } => left.has_variable() || right.has_variable(),
            Expr::Call { args, .. } => args.iter().any(Expr::has_variable),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Floating-point remainder
    Remainder,
    /// Right-associative exponentiation
    Power,
}

impl BinaryOperator {
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Remainder => '%',
            BinaryOperator::Power => '^',
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Plus,
    /// Postfix `%`, divides by 100
    Percent,
}

impl fmt::Display for Expr {
    /// Fully parenthesized rendering, mostly useful in logs and test failures
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(n) => write!(f, "{}", n),
            Expr::Variable(name) => f.write_str(name),
            Expr::UnaryOp { op, operand } => match op {
                UnaryOperator::Negate => write!(f, "(-{})", operand),
                UnaryOperator::Plus => write!(f, "(+{})", operand),
                UnaryOperator::Percent => write!(f, "({}%)", operand),
            },
            Expr::BinaryOp { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            Expr::Call { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}
