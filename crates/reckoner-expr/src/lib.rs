//! # reckoner-expr
//!
//! Arithmetic expression engine for reckoner.
//!
//! This crate provides:
//! - Character whitelisting and tokenizing (text → tokens)
//! - Expression parsing (tokens → tree)
//! - Evaluation against a fixed function/constant registry (tree → `f64`)
//! - Curve sampling over a domain (tree → `(x, y)` series)
//!
//! No user text is ever executed; names resolve only through the built-in
//! registry.
//!
//! ## Example
//!
//! ```rust
//! use reckoner_expr::{parse_and_evaluate, sample_curve};
//!
//! assert_eq!(parse_and_evaluate("2+2*3").unwrap(), 8.0);
//!
//! let curve = sample_curve("sin(x)", -10.0, 10.0, 250).unwrap();
//! assert_eq!(curve.len(), 250);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod sampler;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use error::{ErrorKind, ExprError, ExprResult, SampleError};
pub use evaluator::{evaluate, parse_and_evaluate, parse_and_evaluate_at, EvaluationContext};
pub use expression::Expression;
pub use lexer::Charset;
pub use parser::{parse_expression, ParseOptions};
pub use sampler::{
    sample, sample_curve, Sample, SampleOptions, DEFAULT_SAMPLE_POINTS, MAX_SAMPLE_POINTS,
};
