//! Left-endpoint Riemann sum.

use crate::math::interval::{
    Interval,
    RealBound
};
use crate::math::quadrature::quadratureerror::QuadratureError;

/// Approximates `∫_a^b func(x) dx` with `n` left-endpoint rectangles.
///
/// Requires finite bounds with `b > a` and `n >= 1`. Sample point `i` is
/// computed as `a + i·h` rather than by repeated addition of `h`, so
/// `func` is evaluated exactly `n` times.
///
/// # Example
///
/// ```
/// use quadrature::math::quadrature::rectangularrule::rectangular_rule;
///
/// let area = rectangular_rule(|x| x * x, 0, 1, 1000).unwrap();
/// assert!((area - 0.3328335).abs() < 1e-12);
/// ```
///
/// Bounds must be numbers:
///
/// ```compile_fail
/// use quadrature::math::quadrature::rectangularrule::rectangular_rule;
///
/// let _ = rectangular_rule(|x| x, "a", 1, 10);
/// ```
pub fn rectangular_rule<F, A, B>(func: F, a: A, b: B, n: usize) -> Result<f64, QuadratureError> where
    F: Fn(f64) -> f64,
    A: RealBound,
    B: RealBound {
    let interval = Interval::ordered(a, b)?;
    let step = interval.step(n)?;

    let sum: f64 = (0..n)
        .map(|i| func(interval.sample_point(i, step)))
        .sum();

    Ok(sum * step)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_left_endpoint_underestimates_increasing_function() {
        let result = rectangular_rule(|x| x * x, 0, 1, 1000).unwrap();
        assert_relative_eq!(result, 0.3328335, epsilon = 1e-12);
        assert!(result < 1.0 / 3.0);
    }

    #[test]
    fn test_constant_is_exact() {
        let result = rectangular_rule(|_| 4.0, -1.0, 2.0, 7).unwrap();
        assert_relative_eq!(result, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluation_count_matches_n() {
        // 0.1 does not divide 1.0 exactly in binary
        for n in [3, 10, 49, 1000] {
            let calls = Cell::new(0usize);
            let _ = rectangular_rule(|x| { calls.set(calls.get() + 1); x }, 0.0, 1.0, n).unwrap();
            assert_eq!(calls.get(), n);
        }
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            rectangular_rule(|x| x, 1.0, 1.0, 10),
            Err(QuadratureError::UnorderedBounds { a: 1.0, b: 1.0 })
        );
        assert_eq!(
            rectangular_rule(|x| x, 2, 1, 10),
            Err(QuadratureError::UnorderedBounds { a: 2.0, b: 1.0 })
        );
        assert_eq!(
            rectangular_rule(|x| x, 0, 1, 0),
            Err(QuadratureError::InvalidResolution { parameter: "n", value: 0 })
        );
        assert!(matches!(
            rectangular_rule(|x| x, f64::NAN, 1.0, 10),
            Err(QuadratureError::NonFiniteBound { .. })
        ));
    }
}
