//! Input normalization applied before anything is sent upstream.

use crate::error::{PulseError, Result};

/// Normalize a user-supplied domain for upstream dispatch.
///
/// Lowercases the input, strips a leading `http://` or `https://`, and drops
/// everything after the first `/`. The result is what gets sent to the
/// backend, not just what gets displayed.
pub fn normalize_domain(input: &str) -> Result<String> {
    let mut domain = input.trim().to_lowercase();

    for scheme in ["https://", "http://"] {
        if let Some(rest) = domain.strip_prefix(scheme) {
            domain = rest.to_string();
            break;
        }
    }

    if let Some(idx) = domain.find('/') {
        domain.truncate(idx);
    }

    if domain.is_empty() {
        return Err(PulseError::InvalidInput("domain must not be empty".into()));
    }

    Ok(domain)
}

/// Normalize a scan target (hostname or literal IP).
///
/// Targets get the same scheme/path stripping as domains so pasting a URL
/// into the target field does what the user meant.
pub fn normalize_target(input: &str) -> Result<String> {
    normalize_domain(input)
        .map_err(|_| PulseError::InvalidInput("scan target must not be empty".into()))
}
