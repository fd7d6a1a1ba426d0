//! Basic calculator display adapter
//!
//! Turns free-form keypad input into the text a calculator display shows.
//! Failures collapse to two fixed messages here and only here; programmatic
//! callers should use [`crate::parse_and_evaluate`] and match on the error.
//!
//! # Example
//!
//! ```rust
//! use reckoner::calculator::{evaluate_arithmetic, MATH_ERROR};
//!
//! assert_eq!(evaluate_arithmetic("2+2*3"), "8");
//! assert_eq!(evaluate_arithmetic("10/0"), MATH_ERROR);
//! ```

use reckoner_expr::{evaluate, parse_expression, EvaluationContext, ExprError, ParseOptions};

/// Shown when the input contains characters outside the keypad set
pub const INVALID_INPUT: &str = "Invalid input";

/// Shown when the input does not parse or has no finite value
pub const MATH_ERROR: &str = "Math Error";

/// Decimal places kept in a displayed result
pub const RESULT_DECIMALS: usize = 10;

/// Evaluate keypad input for display
///
/// Blank input shows `"0"`. Only digits, `+ - * / ( ) . %` and whitespace are
/// accepted. A trailing `%` takes a percentage (`200*10%` is `20`); between
/// two operands it is the remainder.
pub fn evaluate_arithmetic(expression: &str) -> String {
    if expression.trim().is_empty() {
        return "0".to_string();
    }

    let result = parse_expression(expression, &ParseOptions::basic())
        .and_then(|tree| evaluate(&tree, &EvaluationContext::simple()));

    match result {
        Ok(value) => format_result(value).unwrap_or_else(|| {
            log::debug!("{:?} evaluated to non-finite {}", expression, value);
            MATH_ERROR.to_string()
        }),
        Err(ExprError::UnsupportedCharacters) => INVALID_INPUT.to_string(),
        Err(err) => {
            log::debug!("{:?} failed: {}", expression, err);
            MATH_ERROR.to_string()
        }
    }
}

/// Render a value the way the calculator displays it
///
/// Rounds to [`RESULT_DECIMALS`] places and drops trailing zeros; never uses
/// exponent notation, so the output can be fed back in as input. Returns
/// `None` for `NaN` and infinities.
pub fn format_result(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let fixed = format!("{:.*}", RESULT_DECIMALS, value);
    let rounded: f64 = fixed.parse().ok()?;

    // Also folds -0 into 0
    if rounded == 0.0 {
        return Some("0".to_string());
    }
    Some(rounded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(evaluate_arithmetic("2+2*3"), "8");
        assert_eq!(evaluate_arithmetic("(1 + 2) * 3"), "9");
        assert_eq!(evaluate_arithmetic("7/2"), "3.5");
        assert_eq!(evaluate_arithmetic("10 % 4"), "2");
        assert_eq!(evaluate_arithmetic("-5+2"), "-3");
    }

    #[test]
    fn test_percent_key() {
        assert_eq!(evaluate_arithmetic("50%"), "0.5");
        assert_eq!(evaluate_arithmetic("200*10%"), "20");
        assert_eq!(evaluate_arithmetic("80 - 25%"), "79.75");
        assert_eq!(evaluate_arithmetic("10 % 4"), "2");
    }

    #[test]
    fn test_long_operator_chain() {
        let chain = vec!["1"; 200_000].join("+");
        assert_eq!(evaluate_arithmetic(&chain), MATH_ERROR);

        let chain = vec!["1"; 1000].join("+");
        assert_eq!(evaluate_arithmetic(&chain), "1000");
    }

    #[test]
    fn test_blank_shows_zero() {
        assert_eq!(evaluate_arithmetic(""), "0");
        assert_eq!(evaluate_arithmetic("   "), "0");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(evaluate_arithmetic("2^3"), INVALID_INPUT);
        assert_eq!(evaluate_arithmetic("sqrt(4)"), INVALID_INPUT);
        assert_eq!(evaluate_arithmetic("1;2"), INVALID_INPUT);
    }

    #[test]
    fn test_math_error() {
        assert_eq!(evaluate_arithmetic("10/0"), MATH_ERROR);
        assert_eq!(evaluate_arithmetic("0/0"), MATH_ERROR);
        assert_eq!(evaluate_arithmetic("2+"), MATH_ERROR);
        assert_eq!(evaluate_arithmetic("(2+3"), MATH_ERROR);
        assert_eq!(evaluate_arithmetic("."), MATH_ERROR);
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(8.0).as_deref(), Some("8"));
        assert_eq!(format_result(0.1 + 0.2).as_deref(), Some("0.3"));
        assert_eq!(format_result(1.0 / 3.0).as_deref(), Some("0.3333333333"));
        assert_eq!(format_result(-0.0).as_deref(), Some("0"));
        assert_eq!(format_result(-1e-12).as_deref(), Some("0"));
        assert_eq!(format_result(1e21).as_deref(), Some("1000000000000000000000"));
        assert_eq!(format_result(f64::INFINITY), None);
        assert_eq!(format_result(f64::NAN), None);
    }
}
