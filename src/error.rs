//! Error taxonomy for the estimation core.

use thiserror::Error;

/// Errors produced by the estimation core.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The request failed validation. User-correctable; the message names
    /// the failing condition.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A precision name missed the data-type catalog. Unreachable once a
    /// request has been validated; observing it indicates a defect.
    #[error("unknown precision type: {0}")]
    UnknownPrecision(String),

    /// A formatted memory string failed to parse back into bytes. Indicates
    /// a formatter/parser mismatch, not a user input problem.
    #[error("malformed memory string: {0:?}")]
    MalformedMemoryString(String),
}

impl EstimateError {
    /// Whether the error was caused by user input rather than a defect.
    pub fn is_user_error(&self) -> bool {
        matches!(self, EstimateError::InvalidRequest(_))
    }
}

/// Result type for estimation operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display() {
        let err = EstimateError::InvalidRequest("batch size must be positive".to_string());
        assert_eq!(err.to_string(), "invalid request: batch size must be positive");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_internal_errors_are_not_user_errors() {
        assert!(!EstimateError::UnknownPrecision("fp99".to_string()).is_user_error());
        assert!(!EstimateError::MalformedMemoryString("13.04".to_string()).is_user_error());
    }
}
