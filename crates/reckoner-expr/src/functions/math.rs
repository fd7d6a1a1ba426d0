//! Math functions
//!
//! Every function follows IEEE-754 for out-of-domain input: `sqrt(-1)` is
//! `NaN`, `log(0)` is `-inf`. Nothing here returns an error.

/// SIN(radians)
pub fn fn_sin(args: &[f64]) -> f64 {
    args[0].sin()
}

/// COS(radians)
pub fn fn_cos(args: &[f64]) -> f64 {
    args[0].cos()
}

/// TAN(radians)
pub fn fn_tan(args: &[f64]) -> f64 {
    args[0].tan()
}

pub fn fn_asin(args: &[f64]) -> f64 {
    args[0].asin()
}

pub fn fn_acos(args: &[f64]) -> f64 {
    args[0].acos()
}

pub fn fn_atan(args: &[f64]) -> f64 {
    args[0].atan()
}

/// LOG(number) - natural logarithm
pub fn fn_log(args: &[f64]) -> f64 {
    args[0].ln()
}

/// LOG10(number) - base-10 logarithm
pub fn fn_log10(args: &[f64]) -> f64 {
    args[0].log10()
}

pub fn fn_sqrt(args: &[f64]) -> f64 {
    args[0].sqrt()
}

pub fn fn_exp(args: &[f64]) -> f64 {
    args[0].exp()
}

/// POW(base, exponent) - same as `base ^ exponent`
pub fn fn_pow(args: &[f64]) -> f64 {
    power(args[0], args[1])
}

pub fn fn_abs(args: &[f64]) -> f64 {
    args[0].abs()
}

pub fn fn_floor(args: &[f64]) -> f64 {
    args[0].floor()
}

pub fn fn_ceil(args: &[f64]) -> f64 {
    args[0].ceil()
}

/// ROUND(number) - nearest integer, halves round toward positive infinity
///
/// `round(2.5) = 3`, `round(-2.5) = -2`.
pub fn fn_round(args: &[f64]) -> f64 {
    let n = args[0];
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// MAX(a, b) - NaN if either argument is NaN
pub fn fn_max(args: &[f64]) -> f64 {
    let (a, b) = (args[0], args[1]);
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// MIN(a, b) - NaN if either argument is NaN
pub fn fn_min(args: &[f64]) -> f64 {
    let (a, b) = (args[0], args[1]);
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Exponentiation shared by `^` and `pow`
///
/// A NaN exponent always yields NaN, including `1 ^ NaN`.
pub fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_halves_toward_positive_infinity() {
        assert_eq!(fn_round(&[2.5]), 3.0);
        assert_eq!(fn_round(&[2.4]), 2.0);
        assert_eq!(fn_round(&[-2.5]), -2.0);
        assert_eq!(fn_round(&[-2.6]), -3.0);
        assert!(fn_round(&[f64::NAN]).is_nan());
    }

    #[test]
    fn test_max_min_propagate_nan() {
        assert_eq!(fn_max(&[1.0, 2.0]), 2.0);
        assert_eq!(fn_min(&[1.0, 2.0]), 1.0);
        assert!(fn_max(&[f64::NAN, 2.0]).is_nan());
        assert!(fn_min(&[1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn test_out_of_domain_is_not_an_error() {
        assert!(fn_sqrt(&[-1.0]).is_nan());
        assert_eq!(fn_log(&[0.0]), f64::NEG_INFINITY);
        assert!(fn_asin(&[2.0]).is_nan());
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert!(power(-8.0, 1.0 / 3.0).is_nan());
        assert!(power(1.0, f64::NAN).is_nan());
    }
}
