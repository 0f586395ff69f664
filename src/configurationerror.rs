use thiserror::Error;

use crate::math::quadrature::quadratureerror::QuadratureError;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("study '{0}' has no closed-form reference integral over its bounds")]
    NoReferenceIntegral(String),

    #[error("study '{name}': {source}")]
    Quadrature {
        name: String,
        #[source]
        source: QuadratureError
    }
}

impl ConfigurationError {
    pub fn quadrature(name: &String, source: QuadratureError) -> ConfigurationError {
        ConfigurationError::Quadrature { name: name.to_owned(), source }
    }
}
