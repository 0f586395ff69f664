use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::integrand::Vectorized;
use crate::math::quadrature::gausslegendre::custom_integration;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::rectangularrule::rectangular_rule;
use crate::math::quadrature::trapezoidalrule::trapezoidal_rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadratureMethod {
    Rectangular,
    Trapezoidal,
    GaussLegendre
}

impl QuadratureMethod {
    pub const ALL: [QuadratureMethod; 3] = [
        QuadratureMethod::Rectangular,
        QuadratureMethod::Trapezoidal,
        QuadratureMethod::GaussLegendre
    ];

    /// `resolution` is the subdivision count for the rectangular and
    /// trapezoidal rules and the node count for Gauss-Legendre.
    pub fn integrate<F>(&self, func: F, a: f64, b: f64, resolution: usize) -> Result<f64, QuadratureError> where
        F: Fn(f64) -> f64 {
        match self {
            QuadratureMethod::Rectangular => rectangular_rule(func, a, b, resolution),
            QuadratureMethod::Trapezoidal => trapezoidal_rule(func, a, b, resolution),
            QuadratureMethod::GaussLegendre => custom_integration(Vectorized(func), a, b, resolution)
        }
    }

    pub fn resolution_name(&self) -> &'static str {
        match self {
            QuadratureMethod::GaussLegendre => "order",
            _ => "n"
        }
    }
}

impl fmt::Display for QuadratureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadratureMethod::Rectangular => write!(f, "rectangular"),
            QuadratureMethod::Trapezoidal => write!(f, "trapezoidal"),
            QuadratureMethod::GaussLegendre => write!(f, "gauss-legendre")
        }
    }
}
