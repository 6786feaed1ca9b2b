//! # pulseguard-cli
//!
//! Command-line interface for the PulseGuard network diagnostics toolbox.
//!
//! ## Features
//!
//! - **Port scans**: quick/common/full presets or custom port lists
//! - **DNS lookups**: records and nameservers for a domain
//! - **IP lookups**: geolocation and reputation, including your own address
//! - **Multiple output formats**: pretty terminal output or JSON

pub mod cli;
pub mod output;

pub use cli::run;
