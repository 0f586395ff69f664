use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureError
// ─────────────────────────────────────────────────────────────────────────────

/// Reasons a quadrature call refuses to produce a value.
///
/// Integrand failures are not represented here: a panicking integrand
/// unwinds straight through the rule to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("bounds [{a}, {b}] are not finite real numbers")]
    NonFiniteBound { a: f64, b: f64 },

    #[error("bounds [{a}, {b}] are not ordered: upper bound must exceed lower bound")]
    UnorderedBounds { a: f64, b: f64 },

    #[error("interval [{a}, {a}] has zero width")]
    DegenerateInterval { a: f64 },

    #[error("invalid resolution '{parameter}' = {value}: must be at least 1")]
    InvalidResolution { parameter: &'static str, value: usize },

    #[error("integrand returned {actual} values for {expected} nodes")]
    EvaluationLengthMismatch { expected: usize, actual: usize },
}
