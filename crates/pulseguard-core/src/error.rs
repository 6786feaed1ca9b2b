use thiserror::Error;

/// Result type alias for toolbox operations
pub type Result<T> = std::result::Result<T, PulseError>;

/// Errors that can occur when using the diagnostics toolbox
#[derive(Error, Debug)]
pub enum PulseError {
    /// Malformed or missing required input; detected locally, never sent upstream
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The scan target could not be resolved or reached at the network level.
    /// Distinct from individual ports being filtered.
    #[error("target unreachable: {0}")]
    TargetUnreachable(String),

    /// The public IP-echo step of a self-IP lookup failed
    #[error("could not determine own public IP: {0}")]
    SelfIpUnavailable(String),

    /// Authentication failed - invalid or missing bearer token
    #[error("authentication failed: invalid or expired token")]
    Unauthorized,

    /// The backend returned an error response
    #[error("upstream error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the backend
        message: String,
    },

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The operation was cancelled by the caller; the result must not be delivered
    #[error("operation cancelled")]
    Cancelled,
}

impl PulseError {
    /// Returns true if the error is worth retrying at the transport layer
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Timeout(_) | Self::Api { code: 500..=599, .. }
        )
    }

    /// Returns true if the error was caused by caller-side cancellation
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns true if the input was rejected before any network call
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns the HTTP status code if this error came from the backend
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        let err = PulseError::Api { code: 503, message: "unavailable".into() };
        assert!(err.is_retryable());
    }

    #[test]
    fn input_errors_are_not_retryable() {
        let err = PulseError::InvalidInput("empty target".into());
        assert!(!err.is_retryable());
        assert!(err.is_input_error());
    }

    #[test]
    fn cancellation_is_not_an_upstream_failure() {
        let err = PulseError::Cancelled;
        assert!(err.is_cancelled());
        assert_eq!(err.status_code(), None);
    }
}
