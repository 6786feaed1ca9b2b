//! Local network probing for the PulseGuard diagnostics toolbox.
//!
//! This crate runs the client-side half of the toolbox: resolving scan-type
//! presets to port sets, probing each port over TCP with a bounded in-flight
//! window, and classifying every probe as open, closed, or filtered.

mod classify;
mod error;
pub mod ports;
pub mod scanner;

pub use classify::{classify, ProbeOutcome};
pub use error::{ProbeError, ProbeResult};
pub use ports::{resolve_ports, service_name, COMMON_PORTS, QUICK_PORTS};
pub use scanner::{PortScanner, ScanConfig, DEFAULT_MAX_IN_FLIGHT};
