//! Command implementations.

pub mod dns;
pub mod ip;
pub mod myip;
pub mod scan;

use crate::output::OutputFormat;
use pulseguard::{PulseClient, Toolbox};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// PulseGuard API token
    pub token: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Get the API token, returning an error if not set.
    pub fn require_token(&self) -> anyhow::Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "API token required.\n\n\
                 Set it with one of:\n  \
                 1. --token <TOKEN>\n  \
                 2. PULSEGUARD_TOKEN environment variable\n\n\
                 Tokens are issued in the PulseGuard dashboard under Settings > API."
            )
        })
    }

    /// Create a toolbox with the configured token.
    pub fn toolbox(&self) -> anyhow::Result<Toolbox> {
        let token = self.require_token()?;
        Ok(Toolbox::new(PulseClient::new(token)))
    }
}
