//! pulseguard - Network diagnostics CLI for the PulseGuard monitoring service.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    pulseguard_cli::run().await
}
