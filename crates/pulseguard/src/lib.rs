//! Network diagnostics toolbox for the PulseGuard uptime-monitoring client.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pulseguard::{PulseClient, ScanRequest, ScanType, Toolbox};
//!
//! #[tokio::main]
//! async fn main() -> pulseguard::Result<()> {
//!     let toolbox = Toolbox::new(PulseClient::new("your-bearer-token"));
//!
//!     // Probe the most common service ports
//!     let summary = toolbox
//!         .scan_ports(&ScanRequest::new("198.51.100.7", ScanType::Quick, 3))
//!         .await?;
//!     println!("{} open, {} closed, {} filtered",
//!         summary.open_ports, summary.closed_ports, summary.filtered_ports);
//!
//!     // Look up DNS records (the domain is normalized before dispatch)
//!     let dns = toolbox.dns_lookup("HTTPS://Example.COM/path").await?;
//!     println!("{} records for {}", dns.records.len(), dns.domain);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

mod toolbox;

// Re-export core types
pub use pulseguard_core::*;

// Re-export client
pub use pulseguard_client::{PulseClient, PulseClientBuilder, RetryConfig};

// Re-export local probing
pub use pulseguard_probe as probe;

pub use toolbox::Toolbox;

// Cancellation handle used by the scan entry points
pub use tokio_util::sync::CancellationToken;

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
