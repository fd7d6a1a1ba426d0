//! Expression evaluator
//!
//! Reduces an expression tree to a single `f64`. Numeric domain problems
//! follow IEEE-754 and never raise; errors only come from trees the parser
//! would not have produced.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{ExprError, ExprResult};
use crate::functions::{math, registry};
use crate::parser::{parse_expression, ParseOptions};

/// Context for expression evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationContext<'a> {
    /// Bound variable name and its value
    pub variable: Option<(&'a str, f64)>,
}

impl<'a> EvaluationContext<'a> {
    /// Context with no bound variable
    pub fn simple() -> Self {
        Self { variable: None }
    }

    /// Context binding `name` to `value`
    pub fn with_variable(name: &'a str, value: f64) -> Self {
        Self {
            variable: Some((name, value)),
        }
    }

    fn lookup(&self, name: &str) -> Option<f64> {
        match self.variable {
            Some((bound, value)) if bound == name => Some(value),
            _ => None,
        }
    }
}

/// Evaluate an expression tree
///
/// # Example
/// ```rust
/// use reckoner_expr::{evaluate, parse_expression, EvaluationContext, ParseOptions};
///
/// let tree = parse_expression("x^2 + 1", &ParseOptions::with_variable("x")).unwrap();
/// let value = evaluate(&tree, &EvaluationContext::with_variable("x", 3.0)).unwrap();
/// assert_eq!(value, 10.0);
/// ```
pub fn evaluate(expr: &Expr, ctx: &EvaluationContext) -> ExprResult<f64> {
    match expr {
        Expr::Literal(n) => Ok(*n),

        Expr::Variable(name) => ctx
            .lookup(name)
            .ok_or_else(|| ExprError::UnboundVariable(name.clone())),

        Expr::UnaryOp { op, operand } => {
            let value = evaluate(operand, ctx)?;
            Ok(match op {
                UnaryOperator::Negate => -value,
                UnaryOperator::Plus => value,
                UnaryOperator::Percent => value / 100.0,
            })
        }

        Expr::BinaryOp { op, left, right } => {
            let l = evaluate(left, ctx)?;
            let r = evaluate(right, ctx)?;
            Ok(evaluate_binary_op(*op, l, r))
        }

        Expr::Call { name, args } => evaluate_call(name, args, ctx),
    }
}

fn evaluate_binary_op(op: BinaryOperator, l: f64, r: f64) -> f64 {
    match op {
        BinaryOperator::Add => l + r,
        BinaryOperator::Subtract => l - r,
        BinaryOperator::Multiply => l * r,
        // Division by zero yields an infinity or NaN
        BinaryOperator::Divide => l / r,
        BinaryOperator::Remainder => l % r,
        BinaryOperator::Power => math::power(l, r),
    }
}

fn evaluate_call(name: &str, args: &[Expr], ctx: &EvaluationContext) -> ExprResult<f64> {
    let func = registry()
        .function(name)
        .ok_or_else(|| ExprError::UnknownIdentifier(name.to_string()))?;

    // Hand-built trees can skip the parser's arity check
    if args.len() != func.arity {
        return Err(ExprError::ArgumentCount {
            function: name.to_string(),
            expected: func.arity,
            actual: args.len(),
        });
    }

    let mut evaluated_args = Vec::with_capacity(args.len());
    for arg in args {
        evaluated_args.push(evaluate(arg, ctx)?);
    }

    Ok((func.implementation)(&evaluated_args))
}

/// Parse and evaluate an expression with no free variable
///
/// The result may be non-finite; callers decide how to present that.
pub fn parse_and_evaluate(expression: &str) -> ExprResult<f64> {
    let tree = parse_expression(expression, &ParseOptions::default())?;
    evaluate(&tree, &EvaluationContext::simple())
}

/// Parse and evaluate an expression with the variable `x` set to `x`
pub fn parse_and_evaluate_at(expression: &str, x: f64) -> ExprResult<f64> {
    let tree = parse_expression(expression, &ParseOptions::with_variable("x"))?;
    evaluate(&tree, &EvaluationContext::with_variable("x", x))
}
