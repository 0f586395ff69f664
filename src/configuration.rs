use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::configurationerror::ConfigurationError;
use crate::math::builtinintegrand::BuiltinIntegrand;
use crate::math::quadrature::convergence::{
    observed_order,
    ConvergencePoint,
    ConvergenceStudy
};
use crate::math::quadrature::quadraturemethod::QuadratureMethod;

// ─────────────────────────────────────────────────────────────────────────────
// StudyConfig
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    name: String,
    integrand: BuiltinIntegrand,
    lower: f64,
    upper: f64,
    method: QuadratureMethod,
    resolutions: Vec<usize>
}

impl StudyConfig {
    pub fn new(name: String,
               integrand: BuiltinIntegrand,
               lower: f64,
               upper: f64,
               method: QuadratureMethod,
               resolutions: Vec<usize>) -> StudyConfig {
        StudyConfig { name, integrand, lower, upper, method, resolutions }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn integrand(&self) -> &BuiltinIntegrand {
        &self.integrand
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn to_study(&self) -> Result<ConvergenceStudy, ConfigurationError> {
        let exact = self.integrand
            .integral(self.lower, self.upper)
            .ok_or_else(|| ConfigurationError::NoReferenceIntegral(self.name.to_owned()))?;
        Ok(ConvergenceStudy::new(self.method, self.lower, self.upper, exact, self.resolutions.clone()))
    }

    pub fn run(&self) -> Result<StudyReport, ConfigurationError> {
        let study = self.to_study()?;
        let points = study
            .run(|x| self.integrand.value(x))
            .map_err(|error| ConfigurationError::quadrature(&self.name, error))?;
        Ok(StudyReport {
            name: self.name.to_owned(),
            method: self.method,
            exact: study.exact(),
            observed_order: observed_order(&points),
            points
        })
    }
}

/// Outcome of one configured study, ready for an external plotter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    name: String,
    method: QuadratureMethod,
    exact: f64,
    observed_order: Option<f64>,
    points: Vec<ConvergencePoint>
}

impl StudyReport {
    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn exact(&self) -> f64 {
        self.exact
    }

    pub fn observed_order(&self) -> Option<f64> {
        self.observed_order
    }

    pub fn points(&self) -> &Vec<ConvergencePoint> {
        &self.points
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    studies: Vec<StudyConfig>
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Configuration {
    studies: Vec<StudyConfig>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration { studies: Vec::new() }
    }

    pub fn studies(&self) -> &Vec<StudyConfig> {
        &self.studies
    }

    pub fn push(&mut self, study: StudyConfig) {
        self.studies.push(study);
    }

    pub fn from_reader(file_path: String) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Ok(Configuration { studies: json_prop.studies })
    }

    /// Runs every study in order, stopping at the first failure.
    pub fn run(&self) -> Result<Vec<StudyReport>, ConfigurationError> {
        self.studies.iter().map(|study| study.run()).collect()
    }
}

impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Ok(Configuration { studies: json_prop.studies })
    }
}
