use serde::{
    Deserialize,
    Serialize
};

use crate::math::quadrature::quadraturemethod::QuadratureMethod;
use crate::math::quadrature::quadratureerror::QuadratureError;

/// One estimate of a convergence sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePoint {
    resolution: usize,
    estimate: f64,
    absolute_error: f64
}

impl ConvergencePoint {
    pub fn new(resolution: usize, estimate: f64, exact: f64) -> ConvergencePoint {
        ConvergencePoint {
            resolution,
            estimate,
            absolute_error: (estimate - exact).abs()
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn absolute_error(&self) -> f64 {
        self.absolute_error
    }
}

/// Absolute error of one method against a known integral, swept over a
/// list of resolutions.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceStudy {
    method: QuadratureMethod,
    lower: f64,
    upper: f64,
    exact: f64,
    resolutions: Vec<usize>
}

impl ConvergenceStudy {
    pub fn new(method: QuadratureMethod,
               lower: f64,
               upper: f64,
               exact: f64,
               resolutions: Vec<usize>) -> ConvergenceStudy {
        ConvergenceStudy { method, lower, upper, exact, resolutions }
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn exact(&self) -> f64 {
        self.exact
    }

    pub fn resolutions(&self) -> &Vec<usize> {
        &self.resolutions
    }

    /// Stops at the first resolution the method rejects.
    pub fn run<F>(&self, func: F) -> Result<Vec<ConvergencePoint>, QuadratureError> where
        F: Fn(f64) -> f64 {
        self.resolutions
            .iter()
            .map(|&resolution| {
                self.method
                    .integrate(&func, self.lower, self.upper, resolution)
                    .map(|estimate| ConvergencePoint::new(resolution, estimate, self.exact))
            })
            .collect()
    }
}

/// Empirical order `p` in `error ~ C · resolution^(-p)` from the last two
/// points. `None` with fewer than two points, equal resolutions, or a zero
/// error.
pub fn observed_order(points: &[ConvergencePoint]) -> Option<f64> {
    let [.., coarse, fine] = points else {
        return None;
    };
    if coarse.absolute_error <= 0.0 || fine.absolute_error <= 0.0 || coarse.resolution == fine.resolution {
        return None;
    }
    let error_ratio = (coarse.absolute_error / fine.absolute_error).ln();
    let resolution_ratio = (fine.resolution as f64 / coarse.resolution as f64).ln();
    Some(error_ratio / resolution_ratio)
}
