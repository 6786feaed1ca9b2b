//! HTTP client for the PulseGuard backend.
//!
//! This crate provides the [`PulseClient`] used by the toolbox for the
//! lookups that go through the backend (DNS, IP enrichment) and the public
//! IP-echo call.

mod client;
mod config;
pub mod api;

pub use client::{PulseClient, PulseClientBuilder};
pub use config::*;
pub use pulseguard_core::{PulseError, Result};
