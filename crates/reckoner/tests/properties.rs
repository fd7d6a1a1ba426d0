//! Property-based tests for the public operations

use proptest::prelude::*;
use reckoner::prelude::*;
use reckoner::{parse_formula, FormulaError};

// Strategy for generating keypad arithmetic
fn arithmetic() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!['+', '-', '*', '/', '%']),
                inner.clone()
            )
                .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.prop_map(|e| format!("-{e}")),
        ]
    })
}

// Strategy for generating well-formed chemical formulas
fn formula() -> impl Strategy<Value = String> {
    let symbol = prop::sample::select(vec!["H", "C", "N", "O", "Na", "Cl", "S", "Fe", "Ca", "K"]);
    let count = prop_oneof![Just(String::new()), (1u32..20).prop_map(|n| n.to_string())];
    let term = (symbol, count).prop_map(|(s, c)| format!("{s}{c}"));
    let flat = prop::collection::vec(term, 1..5).prop_map(|terms| terms.concat());
    flat.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..3).prop_map(|parts| parts.concat()),
            (inner, 1u32..5).prop_map(|(group, n)| format!("({group}){n}")),
        ]
    })
}

fn expression() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["sin(x)", "x^2 - 3*x", "1/x", "sqrt(x)", "log(abs(x)) + PI"])
        .prop_map(String::from)
}

proptest! {
    // Determinism

    #[test]
    fn arithmetic_is_deterministic(input in arithmetic()) {
        prop_assert_eq!(evaluate_arithmetic(&input), evaluate_arithmetic(&input));
    }

    #[test]
    fn molar_mass_is_deterministic(input in formula()) {
        prop_assert_eq!(molar_mass(&input), molar_mass(&input));
    }

    // Displayed results evaluate back to themselves

    #[test]
    fn arithmetic_round_trip(input in arithmetic()) {
        let first = evaluate_arithmetic(&input);
        if first != MATH_ERROR {
            let second = evaluate_arithmetic(&first);
            let a: f64 = first.parse().unwrap();
            let b: f64 = second.parse().unwrap();
            prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{} -> {}", first, second);
        }
    }

    // Formula grouping

    #[test]
    fn extra_close_paren_is_syntax_error(input in formula()) {
        let err = molar_mass(&format!("{input})")).unwrap_err();
        prop_assert!(err.is_syntax());
    }

    #[test]
    fn unclosed_paren_is_syntax_error(input in formula()) {
        prop_assert_eq!(
            molar_mass(&format!("({input}")).unwrap_err(),
            FormulaError::UnclosedParen { depth: 1 }
        );
    }

    #[test]
    fn breakdown_conserves_atoms(input in formula()) {
        let counts = parse_formula(&input, &FormulaOptions::default()).unwrap();
        let mass = molar_mass(&input).unwrap();
        prop_assert_eq!(mass.atom_count(), counts.total_atoms());
        for entry in &mass.breakdown {
            prop_assert_eq!(counts.get(&entry.element), Some(entry.count));
        }
        let sum: f64 = mass.breakdown.iter().map(|e| e.contribution).sum();
        prop_assert!((mass.total - sum).abs() < 1e-9);
    }

    // Sampler cardinality and endpoints

    #[test]
    fn sample_covers_domain(
        input in expression(),
        x_min in -1000.0f64..1000.0,
        width in 0.001f64..1000.0,
        points in 2usize..500,
    ) {
        let x_max = x_min + width;
        let curve = sample_curve(&input, x_min, x_max, points).unwrap();
        prop_assert_eq!(curve.len(), points);
        prop_assert_eq!(curve[0].x, x_min);
        prop_assert_eq!(curve[points - 1].x, x_max);
        prop_assert!(curve.windows(2).all(|pair| pair[0].x <= pair[1].x));
        prop_assert!(curve.iter().all(|s| s.y.is_finite() || s.is_gap()));
    }
}
