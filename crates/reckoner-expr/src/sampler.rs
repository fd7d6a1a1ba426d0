//! Domain sampler
//!
//! Evaluates an expression at evenly spaced points across a closed interval,
//! producing the (x, y) series a grapher plots.

use crate::error::SampleError;
use crate::expression::Expression;

/// Number of points sampled when no count is given
pub const DEFAULT_SAMPLE_POINTS: usize = 250;

/// Largest point count a single call will allocate
pub const MAX_SAMPLE_POINTS: usize = 1_000_000;

/// Options for sampling
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleOptions {
    /// Number of points, including both endpoints (2 to [`MAX_SAMPLE_POINTS`])
    pub points: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            points: DEFAULT_SAMPLE_POINTS,
        }
    }
}

/// One sampled point
///
/// `y` is `NaN` wherever the expression had no finite value; renderers
/// should draw a gap there rather than connect the neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    /// Whether this point is a gap in the curve
    pub fn is_gap(&self) -> bool {
        self.y.is_nan()
    }
}

/// Sample a parsed expression over `[x_min, x_max]`
///
/// The domain is validated before anything is evaluated. Points are
/// independent: one bad point becomes a `NaN` and never fails the series.
pub fn sample(
    expression: &Expression,
    x_min: f64,
    x_max: f64,
    options: &SampleOptions,
) -> Result<Vec<Sample>, SampleError> {
    validate_domain(x_min, x_max, options.points)?;

    let last = options.points - 1;
    let step = (x_max - x_min) / last as f64;

    let samples: Vec<Sample> = (0..options.points)
        .map(|i| {
            let x = point_at(x_min, x_max, step, i, last);
            let y = match expression.evaluate_at(x) {
                Ok(y) if y.is_finite() => y,
                _ => f64::NAN,
            };
            Sample { x, y }
        })
        .collect();

    log::debug!(
        "sampled {:?} at {} points over [{}, {}], {} gaps",
        expression.source(),
        samples.len(),
        x_min,
        x_max,
        samples.iter().filter(|s| s.is_gap()).count()
    );

    Ok(samples)
}

/// Parse `expression` as a function of `x` and sample it at `count` points
///
/// # Example
/// ```rust
/// use reckoner_expr::sample_curve;
///
/// let curve = sample_curve("x^2", -1.0, 1.0, 3).unwrap();
/// assert_eq!(curve[1].x, 0.0);
/// assert_eq!(curve[2].y, 1.0);
/// ```
pub fn sample_curve(
    expression: &str,
    x_min: f64,
    x_max: f64,
    count: usize,
) -> Result<Vec<Sample>, SampleError> {
    validate_domain(x_min, x_max, count)?;
    let expression = Expression::parse_in_x(expression)?;
    sample(&expression, x_min, x_max, &SampleOptions { points: count })
}

/// The `i`th of `last + 1` evenly spaced points
///
/// Both endpoints are exact. When the width of the domain overflows `f64`,
/// `step` is infinite and the point is interpolated from the bounds instead.
fn point_at(x_min: f64, x_max: f64, step: f64, i: usize, last: usize) -> f64 {
    if i == 0 {
        x_min
    } else if i == last {
        x_max
    } else if step.is_finite() {
        x_min + step * i as f64
    } else {
        let t = i as f64 / last as f64;
        x_min * (1.0 - t) + x_max * t
    }
}

fn validate_domain(x_min: f64, x_max: f64, points: usize) -> Result<(), SampleError> {
    if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
        return Err(SampleError::InvalidDomain { x_min, x_max });
    }
    if points < 2 {
        return Err(SampleError::TooFewPoints(points));
    }
    if points > MAX_SAMPLE_POINTS {
        return Err(SampleError::TooManyPoints {
            requested: points,
            limit: MAX_SAMPLE_POINTS,
        });
    }
    Ok(())
}
