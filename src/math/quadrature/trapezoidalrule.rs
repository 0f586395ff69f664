//! Composite trapezoidal rule.

use crate::math::interval::{
    Interval,
    RealBound
};
use crate::math::quadrature::quadratureerror::QuadratureError;

/// Approximates `∫_a^b func(x) dx` with `n` trapezoids.
///
/// Validation matches `rectangular_rule`. Each subinterval contributes
/// `(f(x_i) + f(x_i + h)) · h / 2` and the areas are summed directly, so
/// interior points are evaluated twice.
///
/// ```
/// use quadrature::math::quadrature::trapezoidalrule::trapezoidal_rule;
///
/// let area = trapezoidal_rule(|x| x * x, 0, 1, 1000).unwrap();
/// assert!((area - 1.0 / 3.0).abs() < 1e-6);
/// ```
///
/// Bounds must be numbers:
///
/// ```compile_fail
/// use quadrature::math::quadrature::trapezoidalrule::trapezoidal_rule;
///
/// let _ = trapezoidal_rule(|x| x, 0.0, "b", 10);
/// ```
pub fn trapezoidal_rule<F, A, B>(func: F, a: A, b: B, n: usize) -> Result<f64, QuadratureError> where
    F: Fn(f64) -> f64,
    A: RealBound,
    B: RealBound {
    let interval = Interval::ordered(a, b)?;
    let step = interval.step(n)?;

    let result = (0..n)
        .map(|i| {
            let left = interval.sample_point(i, step);
            (func(left) + func(left + step)) * step / 2.0
        })
        .sum();

    Ok(result)
}
