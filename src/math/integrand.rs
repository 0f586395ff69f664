use nalgebra::DVector;

// ─────────────────────────────────────────────────────────────────────────────
// Calling conventions
// ─────────────────────────────────────────────────────────────────────────────
//
// Rectangular and trapezoidal rules take a plain `Fn(f64) -> f64` and call it
// once per sample point. Gauss-Legendre evaluates every node in one call and
// therefore needs a `VectorizedIntegrand`. Any closure over `&DVector<f64>`
// qualifies directly; a scalar closure is lifted with `Vectorized`.

pub trait VectorizedIntegrand {
    /// Must return one value per entry of `xs`, in the same order.
    fn evaluate(&self, xs: &DVector<f64>) -> DVector<f64>;
}

impl<F> VectorizedIntegrand for F where
    F: Fn(&DVector<f64>) -> DVector<f64> {
    fn evaluate(&self, xs: &DVector<f64>) -> DVector<f64> {
        self(xs)
    }
}

/// Lifts a scalar integrand into the vectorized convention by mapping it
/// over the nodes.
#[derive(Debug, Clone, Copy)]
pub struct Vectorized<F>(pub F);

impl<F> VectorizedIntegrand for Vectorized<F> where
    F: Fn(f64) -> f64 {
    fn evaluate(&self, xs: &DVector<f64>) -> DVector<f64> {
        xs.map(|x| (self.0)(x))
    }
}
