//! Core types for the PulseGuard diagnostics toolbox.
//!
//! This crate provides the foundational pieces shared across the toolbox:
//!
//! - **Types**: the stable result shapes for port scans, DNS lookups, and
//!   IP lookups that the UI layer renders
//! - **Errors**: the toolbox error taxonomy via [`PulseError`]
//! - **Normalization**: input cleanup applied before anything is sent
//!   upstream
//!
//! # Example
//!
//! ```rust,ignore
//! use pulseguard_core::{Result, ScanSummary};
//!
//! fn report(summary: ScanSummary) -> Result<()> {
//!     println!("{}: {} open ports", summary.target, summary.open_ports);
//!     Ok(())
//! }
//! ```

mod error;
pub mod normalize;
pub mod types;

pub use error::{PulseError, Result};
pub use types::*;
