//! # reckoner
//!
//! Safe interpretation of short textual formulas.
//!
//! Reckoner never executes input as code. Every entry point tokenizes and
//! parses its text against a fixed grammar and evaluates only what that
//! grammar allows.
//!
//! ## Features
//!
//! - Basic arithmetic for keypad input, with calculator-style display text
//! - Scientific expressions with a fixed function and constant set
//! - Curve sampling of expressions in `x` over a domain, with gaps
//! - Chemical formula parsing and molar mass with a per-element breakdown
//!
//! ## Example
//!
//! ```rust
//! use reckoner::prelude::*;
//!
//! assert_eq!(evaluate_arithmetic("2+2*3"), "8");
//!
//! let value = parse_and_evaluate("sqrt(16) + 2^3").unwrap();
//! assert_eq!(value, 12.0);
//!
//! let curve = sample_curve("sin(x)", -3.0, 3.0, 5).unwrap();
//! assert_eq!(curve.len(), 5);
//!
//! let water = molar_mass("H2O").unwrap();
//! assert!((water.total - 18.015).abs() < 1e-9);
//! ```

pub mod calculator;
pub mod prelude;

pub use calculator::{evaluate_arithmetic, format_result, INVALID_INPUT, MATH_ERROR};

// Re-export expression types
pub use reckoner_expr::{
    evaluate,
    parse_and_evaluate,
    parse_and_evaluate_at,
    parse_expression,
    sample,
    sample_curve,
    BinaryOperator,
    Charset,
    ErrorKind,
    EvaluationContext,
    Expr,
    ExprError,
    ExprResult,
    Expression,
    ParseOptions,
    Sample,
    SampleError,
    SampleOptions,
    UnaryOperator,
    DEFAULT_SAMPLE_POINTS,
    MAX_SAMPLE_POINTS,
};

// Re-export chemistry types
pub use reckoner_chem::{
    element,
    elements,
    molar_mass,
    molar_mass_with,
    parse_formula,
    resolve,
    BreakdownEntry,
    Element,
    ElementCounts,
    FormulaError,
    FormulaOptions,
    FormulaResult,
    MolarMass,
    ParseMode,
};

/// Function and constant tables used by the evaluator
pub mod functions {
    pub use reckoner_expr::functions::{registry, FunctionDef, FunctionRegistry};
}
