use thiserror::Error;

/// Errors raised by the sampling primitives in [`crate::random`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplingError {
    #[error("cannot sample from an empty sequence")]
    EmptySequence,
    #[error("weight {weight} at index {index} is negative")]
    NegativeWeight { index: usize, weight: f64 },
    #[error("weight {weight} at index {index} is not finite")]
    NonFiniteWeight { index: usize, weight: f64 },
    #[error("total weight {0} must be strictly positive and finite")]
    NonPositiveTotal(f64),
    #[error("temperature {0} must be finite and strictly positive")]
    InvalidTemperature(f64),
}

/// Errors raised by cursor arithmetic in [`crate::action_space`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error("enumeration ends at {end} before it begins at {begin}")]
    ReversedBounds { begin: usize, end: usize },
    #[error("cannot move cursor at {index} back by {steps}")]
    BeforeStart { index: usize, steps: usize },
}

/// Errors raised while building or running a policy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("a policy needs at least one action")]
    EmptyActionSpace,
    #[error("epsilon {0} is outside [0, 1]")]
    InvalidEpsilon(f64),
    #[error("temperature {0} must be finite and strictly positive")]
    InvalidTemperature(f64),
    #[error("sampling failed: {0}")]
    Sampling(#[from] SamplingError),
}
