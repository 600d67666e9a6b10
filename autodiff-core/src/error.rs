use thiserror::Error;

/// Custom error type for the autodiff engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutodiffError {
    #[error("Division by zero in {operation} (numerator {numerator})")]
    DivisionByZero { operation: String, numerator: f64 },

    #[error("Domain error in {operation} for value {value}: {message}")]
    DomainError {
        operation: String,
        value: f64,
        message: String,
    },

    #[error("Operation requires a node that tracks gradients, but it doesn't.")]
    RequiresGradNotMet,

    #[error("Seed gradient must be finite, got {0}")]
    NonFiniteSeed(f64),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AutodiffError {
    pub(crate) fn division_by_zero(operation: &str, numerator: f64) -> Self {
        AutodiffError::DivisionByZero {
            operation: operation.to_string(),
            numerator,
        }
    }

    pub(crate) fn domain(operation: &str, value: f64, message: &str) -> Self {
        AutodiffError::DomainError {
            operation: operation.to_string(),
            value,
            message: message.to_string(),
        }
    }
}
