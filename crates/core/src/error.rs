use thiserror::Error;

/// Errors raised while constructing a [`WheelSimulation`].
///
/// These are startup-time contract violations. Once a simulation exists, none
/// of its operations can fail.
///
/// [`WheelSimulation`]: crate::WheelSimulation
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    #[error("a wheel needs at least {minimum} buckets, got {requested}")]
    TooFewBuckets { requested: usize, minimum: usize },

    #[error("parameter `{name}` must be finite and strictly positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("initial `{name}` must be finite, got {value}")]
    InvalidInitialCondition { name: &'static str, value: f64 },
}
