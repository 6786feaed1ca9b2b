use thiserror::Error;

/// Result type alias for probing operations
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Errors from local network probing
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Port specification could not be parsed or resolved to a usable set
    #[error("invalid port specification: {0}")]
    InvalidPorts(String),

    /// The scan target could not be resolved to an address
    #[error("could not resolve target: {0}")]
    Resolve(String),

    /// The scan was cancelled by the caller
    #[error("scan cancelled")]
    Cancelled,

    /// Network I/O error at the scan level
    #[error("network error: {0}")]
    Network(#[from] std::io::Error),
}

impl From<ProbeError> for pulseguard_core::PulseError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::InvalidPorts(msg) => Self::InvalidInput(msg),
            ProbeError::Resolve(msg) => Self::TargetUnreachable(msg),
            ProbeError::Cancelled => Self::Cancelled,
            ProbeError::Network(e) => Self::TargetUnreachable(e.to_string()),
        }
    }
}
