pub mod configuration;
pub mod configurationerror;

pub mod math {
    pub mod builtinintegrand;
    pub mod integrand;
    pub mod interval;

    pub mod quadrature {
        pub mod quadratureerror;
        pub mod rectangularrule;
        pub mod trapezoidalrule;
        pub mod gausslegendre;
        pub mod quadraturemethod;
        pub mod convergence;
    }
}

pub use math::integrand::Vectorized;
pub use math::quadrature::gausslegendre::custom_integration;
pub use math::quadrature::quadratureerror::QuadratureError;
pub use math::quadrature::rectangularrule::rectangular_rule;
pub use math::quadrature::trapezoidalrule::trapezoidal_rule;
