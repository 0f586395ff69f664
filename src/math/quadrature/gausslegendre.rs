//! Gauss-Legendre quadrature.
//!
//! An `order`-point rule integrates polynomials of degree `2·order - 1`
//! exactly. Accuracy is governed by the order alone; there is no
//! subdivision of the interval.

use nalgebra::{
    DMatrix,
    DVector,
    SymmetricEigen
};

use crate::math::integrand::VectorizedIntegrand;
use crate::math::interval::{
    Interval,
    RealBound
};
use crate::math::quadrature::quadratureerror::QuadratureError;

// ─────────────────────────────────────────────────────────────────────────────
// GaussLegendreRule
// ─────────────────────────────────────────────────────────────────────────────

/// Nodes and weights on [-1, 1], computed once and reusable for any
/// interval.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendreRule {
    nodes: DVector<f64>,
    weights: DVector<f64>
}

impl GaussLegendreRule {
    pub fn new(order: usize) -> Result<GaussLegendreRule, QuadratureError> {
        if order == 0 {
            return Err(QuadratureError::InvalidResolution { parameter: "order", value: order });
        }
        let (nodes, weights) = compute_nodes_weights(order);
        Ok(GaussLegendreRule { nodes, weights })
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Ascending, symmetric about 0.
    pub fn nodes(&self) -> &DVector<f64> {
        &self.nodes
    }

    /// Sum to 2, the length of [-1, 1].
    pub fn weights(&self) -> &DVector<f64> {
        &self.weights
    }

    /// Maps the rule onto `interval`:
    ///
    ///   x' = 0.5(b-a)·x + 0.5(b+a),  w' = 0.5(b-a)·w
    ///
    /// A reversed interval yields negative weights.
    pub fn rescaled(&self, interval: &Interval) -> (DVector<f64>, DVector<f64>) {
        let half_width = interval.half_width();
        let midpoint = interval.midpoint();
        let nodes = self.nodes.map(|x| f64::mul_add(half_width, x, midpoint));
        let weights = &self.weights * half_width;
        (nodes, weights)
    }

    /// Integrates over `[a, b]`. Either orientation is accepted; `b < a`
    /// gives the negated integral over `[b, a]`. `a == b` is rejected.
    pub fn integrate<F, A, B>(&self, func: F, a: A, b: B) -> Result<f64, QuadratureError> where
        F: VectorizedIntegrand,
        A: RealBound,
        B: RealBound {
        let interval = Interval::non_degenerate(a, b)?;
        self.integrate_over(func, &interval)
    }

    pub fn integrate_over<F>(&self, func: F, interval: &Interval) -> Result<f64, QuadratureError> where
        F: VectorizedIntegrand {
        let (nodes, weights) = self.rescaled(interval);
        let values = func.evaluate(&nodes);
        if values.len() != nodes.len() {
            return Err(QuadratureError::EvaluationLengthMismatch {
                expected: nodes.len(),
                actual: values.len()
            });
        }
        Ok(weights.dot(&values))
    }
}

/// Approximates `∫_a^b func(x) dx` with an `order`-point Gauss-Legendre
/// rule. `func` receives all rescaled nodes at once; wrap a scalar
/// closure in `Vectorized` to use it here.
///
/// # Example
///
/// ```
/// use quadrature::math::integrand::Vectorized;
/// use quadrature::math::quadrature::gausslegendre::custom_integration;
///
/// let area = custom_integration(Vectorized(|x: f64| x * x), 0, 1, 5).unwrap();
/// assert!((area - 1.0 / 3.0).abs() < 1e-14);
/// ```
pub fn custom_integration<F, A, B>(func: F, a: A, b: B, order: usize) -> Result<f64, QuadratureError> where
    F: VectorizedIntegrand,
    A: RealBound,
    B: RealBound {
    let interval = Interval::non_degenerate(a, b)?;
    GaussLegendreRule::new(order)?.integrate_over(func, &interval)
}

// ─────────────────────────────────────────────────────────────────────────────
// Node and weight computation
// ─────────────────────────────────────────────────────────────────────────────
//
// Golub-Welsch: the nodes are the eigenvalues of the symmetric tridiagonal
// Jacobi matrix of the Legendre three-term recurrence
//
//   J[k-1, k] = J[k, k-1] = k / sqrt(4k² - 1),  k = 1..n-1
//
// Each eigenvalue is polished with one Newton step on P_n, weights come from
//
//   w_i = 2 / ((1 - x_i²) · P_n'(x_i)²)
//
// and the rule is symmetrized and renormalized so Σ w_i = 2.

fn compute_nodes_weights(order: usize) -> (DVector<f64>, DVector<f64>) {
    let mut jacobi = DMatrix::<f64>::zeros(order, order);
    for k in 1..order {
        let kf = k as f64;
        let beta = kf / (4.0 * kf * kf - 1.0).sqrt();
        jacobi[(k - 1, k)] = beta;
        jacobi[(k, k - 1)] = beta;
    }

    let mut roots: Vec<f64> = SymmetricEigen::new(jacobi).eigenvalues.iter().copied().collect();
    roots.sort_by(|lhs, rhs| lhs.total_cmp(rhs));

    for x in roots.iter_mut() {
        let (p, dp) = legendre_with_derivative(order, *x);
        *x -= p / dp;
    }

    let raw_weights: Vec<f64> = roots
        .iter()
        .map(|&x| {
            let (_, dp) = legendre_with_derivative(order, x);
            2.0 / ((1.0 - x * x) * dp * dp)
        })
        .collect();

    let nodes = DVector::from_fn(order, |i, _| 0.5 * (roots[i] - roots[order - 1 - i]));
    let mut weights = DVector::from_fn(order, |i, _| 0.5 * (raw_weights[i] + raw_weights[order - 1 - i]));
    let total = weights.sum();
    weights *= 2.0 / total;

    (nodes, weights)
}

/// `(P_n(x), P_n'(x))` by the Bonnet recurrence. Valid for |x| < 1.
fn legendre_with_derivative(order: usize, x: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 1..order {
        let kf = k as f64;
        let p_next = ((2.0 * kf + 1.0) * x * p - kf * p_prev) / (kf + 1.0);
        p_prev = p;
        p = p_next;
    }
    let dp = order as f64 * (x * p - p_prev) / (x * x - 1.0);
    (p, dp)
}
