use serde::{
    Deserialize,
    Serialize
};

// ─────────────────────────────────────────────────────────────────────────────
// BuiltinIntegrand
// ─────────────────────────────────────────────────────────────────────────────
//
// Named integrands with closed-form antiderivatives, so a configured study
// always has an exact reference value. In JSON the unit variants are plain
// strings ("square") and the polynomial is
//   { "polynomial": { "coefficients": [a_0, a_1, ...] } }
// meaning a_0 + a_1·x + a_2·x² + ...

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinIntegrand {
    Square,
    Cube,
    Sine,
    Exponential,
    Reciprocal,
    Polynomial { coefficients: Vec<f64> }
}

impl BuiltinIntegrand {
    pub fn value(&self, x: f64) -> f64 {
        match self {
            BuiltinIntegrand::Square => x * x,
            BuiltinIntegrand::Cube => x * x * x,
            BuiltinIntegrand::Sine => x.sin(),
            BuiltinIntegrand::Exponential => x.exp(),
            BuiltinIntegrand::Reciprocal => 1.0 / x,
            BuiltinIntegrand::Polynomial { coefficients } => {
                coefficients
                    .iter()
                    .rev()
                    .fold(0.0, |acc, &beta| f64::mul_add(acc, x, beta))
            }
        }
    }

    /// Exact `∫_a^b`, `None` when the integrand is not integrable there
    /// (the reciprocal across zero).
    pub fn integral(&self, a: f64, b: f64) -> Option<f64> {
        match self {
            BuiltinIntegrand::Reciprocal if a * b <= 0.0 => None,
            BuiltinIntegrand::Reciprocal => Some((b / a).abs().ln()),
            _ => Some(self.antiderivative(b) - self.antiderivative(a))
        }
    }

    fn antiderivative(&self, x: f64) -> f64 {
        match self {
            BuiltinIntegrand::Square => x * x * x / 3.0,
            BuiltinIntegrand::Cube => x * x * x * x / 4.0,
            BuiltinIntegrand::Sine => -x.cos(),
            BuiltinIntegrand::Exponential => x.exp(),
            BuiltinIntegrand::Reciprocal => x.abs().ln(),
            BuiltinIntegrand::Polynomial { coefficients } => {
                // Σ c_k·x^(k+1)/(k+1)
                coefficients
                    .iter()
                    .enumerate()
                    .rev()
                    .fold(0.0, |acc, (k, &beta)| f64::mul_add(acc, x, beta / (k + 1) as f64))
                    * x
            }
        }
    }

    /// Highest power of `x` for polynomial integrands.
    pub fn degree(&self) -> Option<usize> {
        match self {
            BuiltinIntegrand::Square => Some(2),
            BuiltinIntegrand::Cube => Some(3),
            BuiltinIntegrand::Polynomial { coefficients } => Some(coefficients.len().saturating_sub(1)),
            _ => None
        }
    }
}
