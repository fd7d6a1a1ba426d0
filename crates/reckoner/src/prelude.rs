//! Prelude module - common imports for reckoner users
//!
//! ```rust
//! use reckoner::prelude::*;
//! ```

pub use crate::{
    // Calculator display
    evaluate_arithmetic,
    // Chemistry
    molar_mass,
    molar_mass_with,
    // Expressions
    parse_and_evaluate,
    parse_and_evaluate_at,
    sample_curve,
    ExprError,
    Expression,
    FormulaError,
    FormulaOptions,
    MolarMass,
    ParseMode,
    Sample,
    SampleError,
    SampleOptions,
    INVALID_INPUT,
    MATH_ERROR,
};
