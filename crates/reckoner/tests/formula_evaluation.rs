//! End-to-end scenarios across the four public operations

use pretty_assertions::assert_eq;
use reckoner::prelude::*;
use reckoner::{evaluate, parse_expression, ErrorKind, EvaluationContext, ParseOptions};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

/// Keypad input rendered for display
#[test]
fn test_basic_calculator_display() {
    assert_eq!(evaluate_arithmetic("2+2*3"), "8");
    assert_eq!(evaluate_arithmetic("10/0"), MATH_ERROR);
    assert_eq!(evaluate_arithmetic("0.1+0.2"), "0.3");
    assert_eq!(evaluate_arithmetic("50%"), "0.5");
    assert_eq!(evaluate_arithmetic("200*10%"), "20");
    assert_eq!(evaluate_arithmetic("2^3"), INVALID_INPUT);
    assert_eq!(evaluate_arithmetic(""), "0");
}

/// Scientific expressions with functions and constants
#[test]
fn test_scientific_evaluation() {
    assert_eq!(parse_and_evaluate("sin(0)").unwrap(), 0.0);
    assert_eq!(parse_and_evaluate("sqrt(16) + 2^3").unwrap(), 12.0);
    assert_eq!(parse_and_evaluate("-2^2").unwrap(), -4.0);
    assert_eq!(parse_and_evaluate("2^3^2").unwrap(), 512.0);
    assert_eq!(parse_and_evaluate("max(3, min(8, 5))").unwrap(), 5.0);
    assert_close(parse_and_evaluate("cos(PI)").unwrap(), -1.0, 1e-12);
    assert_close(parse_and_evaluate("log(E)").unwrap(), 1.0, 1e-12);
}

/// Domain problems are values, not errors
#[test]
fn test_non_finite_results() {
    assert_eq!(parse_and_evaluate("1/0").unwrap(), f64::INFINITY);
    assert!(parse_and_evaluate("sqrt(-1)").unwrap().is_nan());
    assert_eq!(parse_and_evaluate("log(0)").unwrap(), f64::NEG_INFINITY);
}

/// Structured errors keep their category
#[test]
fn test_expression_errors() {
    let err = parse_and_evaluate("x + 1").unwrap_err();
    assert_eq!(err, ExprError::UnknownIdentifier("x".into()));
    assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);

    assert_eq!(parse_and_evaluate("2 +").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(parse_and_evaluate("(2 + 3").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(parse_and_evaluate("2 $ 3").unwrap_err().kind(), ErrorKind::Lexical);
    assert_eq!(parse_and_evaluate("sin()").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(
        parse_and_evaluate("foo(2)").unwrap_err(),
        ExprError::UnknownIdentifier("foo".into())
    );
}

/// A tree parsed once evaluates at many points
#[test]
fn test_expression_reuse() {
    let parabola = Expression::parse_in_x("x^2 - 1").unwrap();
    assert_eq!(parabola.evaluate_at(0.0).unwrap(), -1.0);
    assert_eq!(parabola.evaluate_at(3.0).unwrap(), 8.0);
    assert_eq!(parse_and_evaluate_at("x^2 - 1", 3.0).unwrap(), 8.0);

    let tree = parse_expression("2 * (3 + 4)", &ParseOptions::default()).unwrap();
    assert_eq!(evaluate(&tree, &EvaluationContext::simple()).unwrap(), 14.0);
}

/// `sin(x)` over [-10, 10] at the default resolution
#[test]
fn test_sample_sine() {
    let curve = sample_curve("sin(x)", -10.0, 10.0, reckoner::DEFAULT_SAMPLE_POINTS).unwrap();
    assert_eq!(curve.len(), 250);
    assert_eq!(curve.first().map(|s| s.x), Some(-10.0));
    assert_eq!(curve.last().map(|s| s.x), Some(10.0));
    assert!(curve.iter().all(|s| s.y.is_finite() && s.y.abs() <= 1.0));
}

/// Undefined points become gaps without failing the series
#[test]
fn test_sample_gaps() {
    let curve = sample_curve("1/x", -1.0, 1.0, 3).unwrap();
    assert_eq!(curve.iter().map(Sample::is_gap).collect::<Vec<_>>(), vec![false, true, false]);

    let curve = sample_curve("sqrt(x)", -1.0, 1.0, 5).unwrap();
    assert_eq!(curve.iter().filter(|s| s.is_gap()).count(), 2);
}

/// Bad domains and expressions fail before any point is evaluated
#[test]
fn test_sample_errors() {
    assert!(matches!(
        sample_curve("x", 1.0, 1.0, 10),
        Err(SampleError::InvalidDomain { .. })
    ));
    assert!(matches!(
        sample_curve("x", f64::NAN, 1.0, 10),
        Err(SampleError::InvalidDomain { .. })
    ));
    assert_eq!(sample_curve("x", 0.0, 1.0, 1), Err(SampleError::TooFewPoints(1)));
    assert_eq!(
        sample_curve("y + 1", 0.0, 1.0, 10),
        Err(SampleError::Expression(ExprError::UnknownIdentifier("y".into())))
    );
}

/// Molar masses of common compounds
#[test]
fn test_molar_mass() {
    assert_close(molar_mass("H2O").unwrap().total, 18.015, 1e-9);
    assert_close(molar_mass("Al2(SO4)3").unwrap().total, 342.17, 0.05);
    assert_close(molar_mass("C6H12O6").unwrap().total, 180.156, 0.01);
    assert_close(molar_mass("Ca(OH)2").unwrap().total, 74.092, 0.01);
}

/// Formula failures split into syntax and lookup
#[test]
fn test_molar_mass_errors() {
    assert_eq!(
        molar_mass("Xx2").unwrap_err(),
        FormulaError::UnknownElement("Xx".into())
    );
    assert!(molar_mass("Ca(OH2").unwrap_err().is_syntax());
    assert!(molar_mass("CaOH)2").unwrap_err().is_syntax());

    let strict = FormulaOptions::strict();
    assert_eq!(molar_mass_with("2H2O", &strict), Err(FormulaError::StrayCount { offset: 0 }));
    assert_close(molar_mass("2H2O").unwrap().total, 18.015, 1e-9);
}
