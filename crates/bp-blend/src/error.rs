//! Blending errors.

use bp_core::CoreError;
use thiserror::Error;

/// Result type for blend operations.
pub type BlendResult<T> = Result<T, BlendError>;

/// Errors that can occur while blending a component set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlendError {
    /// Malformed component data (lengths, emptiness, non-finite or non-positive entries).
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// A denominator evaluated to zero.
    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    /// A value lies outside the real-valued domain of a power or logarithm.
    #[error("Domain error for {what}: {value}")]
    DomainError { what: &'static str, value: f64 },
}

impl BlendError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidInput { what: what.into() }
    }
}

impl From<CoreError> for BlendError {
    fn from(err: CoreError) -> Self {
        // Every core check guards caller-supplied data
        BlendError::InvalidInput {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BlendError::DomainError {
            what: "flash point (°F)",
            value: -3.0,
        };
        assert!(err.to_string().contains("flash point"));
        assert!(err.to_string().contains("-3"));

        let err = BlendError::DivisionByZero {
            what: "total flow rate",
        };
        assert!(err.to_string().contains("total flow rate"));
    }

    #[test]
    fn core_error_becomes_invalid_input() {
        let core = CoreError::NonFinite {
            what: "flow rate",
            value: f64::NAN,
        };
        let err: BlendError = core.into();
        match err {
            BlendError::InvalidInput { what } => assert!(what.contains("flow rate")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
