//! Parsed expressions
//!
//! [`Expression`] keeps a tree together with the text it came from and the
//! variable it was parsed against, so it can be evaluated repeatedly without
//! re-parsing.

use crate::ast::Expr;
use crate::error::ExprResult;
use crate::evaluator::{evaluate, EvaluationContext};
use crate::parser::{parse_expression, ParseOptions};

/// A parsed expression
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    tree: Expr,
    variable: Option<String>,
}

impl Expression {
    /// Parse `source` with the given options
    pub fn parse(source: &str, options: &ParseOptions) -> ExprResult<Self> {
        let tree = parse_expression(source, options)?;
        Ok(Self {
            source: source.to_string(),
            tree,
            variable: options.variable.clone(),
        })
    }

    /// Parse `source` as a function of `x`
    pub fn parse_in_x(source: &str) -> ExprResult<Self> {
        Self::parse(source, &ParseOptions::with_variable("x"))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Expr {
        &self.tree
    }

    /// Name of the variable this expression was parsed against
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    /// Evaluate with no variable bound
    pub fn evaluate(&self) -> ExprResult<f64> {
        evaluate(&self.tree, &EvaluationContext::simple())
    }

    /// Evaluate with the variable (if any) bound to `value`
    pub fn evaluate_at(&self, value: f64) -> ExprResult<f64> {
        let ctx = match self.variable.as_deref() {
            Some(name) => EvaluationContext::with_variable(name, value),
            None => EvaluationContext::simple(),
        };
        evaluate(&self.tree, &ctx)
    }
}
