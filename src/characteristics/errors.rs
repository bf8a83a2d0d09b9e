use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CharacteristicsError {
    /// The initial condition returned a non-finite value at a sampled origin.
    #[error("initial condition is not defined at x = {x} (evaluated to {value})")]
    IllDefinedInitialCondition { x: f64, value: f64 },
    #[error("origin {index} is not a finite coordinate: {origin}")]
    NonFiniteOrigin { index: usize, origin: f64 },
    #[error("invalid domain [{left}, {right}]: left bound must be finite and below the right bound")]
    InvalidDomain { left: f64, right: f64 },
    #[error("at least {minimum} samples are required, got {requested}")]
    InsufficientSamples { requested: usize, minimum: usize },
    #[error("target time must be finite and non-negative, got {0}")]
    InvalidTime(f64),
}
