//! The single entry point the UI layer calls.

use pulseguard_client::PulseClient;
use pulseguard_core::normalize::normalize_target;
use pulseguard_core::{DnsScanResult, IpLookupResult, Result, ScanRequest, ScanSummary};
use pulseguard_probe::{resolve_ports, PortScanner, ScanConfig};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Request façade over the diagnostics toolbox.
///
/// Port scans run locally through the probe layer; DNS, IP, and self-IP
/// lookups go through the backend client. Input validation happens here,
/// before anything touches the network.
#[derive(Clone)]
pub struct Toolbox {
    client: PulseClient,
    scan_config: ScanConfig,
}

impl Toolbox {
    /// Create a toolbox with default scan settings
    #[must_use]
    pub fn new(client: PulseClient) -> Self {
        Self {
            client,
            scan_config: ScanConfig::default(),
        }
    }

    /// Override the scanner configuration (in-flight window, overall deadline)
    #[must_use]
    pub fn with_scan_config(mut self, config: ScanConfig) -> Self {
        self.scan_config = config;
        self
    }

    /// Run the port scan described by `request`.
    ///
    /// Each invocation produces an independent [`ScanSummary`]; nothing is
    /// cached or shared between scans.
    pub async fn scan_ports(&self, request: &ScanRequest) -> Result<ScanSummary> {
        self.scan_ports_with_cancel(request, CancellationToken::new()).await
    }

    /// Variant accepting a cancellation token, for callers that may abandon
    /// the scan (navigation away, a newer scan superseding this one).
    pub async fn scan_ports_with_cancel(
        &self,
        request: &ScanRequest,
        cancel: CancellationToken,
    ) -> Result<ScanSummary> {
        request.validate()?;
        let target = normalize_target(&request.target)?;
        let ports = resolve_ports(request.scan_type, request.custom_ports.as_deref())?;

        let scanner = PortScanner::with_config(self.scan_config.clone())
            .timeout(Duration::from_secs(request.timeout_secs));

        let summary = scanner.scan_with_cancel(&target, &ports, cancel).await?;
        Ok(summary)
    }

    /// Look up DNS records for a domain
    pub async fn dns_lookup(&self, domain: &str) -> Result<DnsScanResult> {
        self.client.dns().lookup(domain).await
    }

    /// Look up geolocation and reputation data for an address
    pub async fn ip_lookup(&self, ip: &str) -> Result<IpLookupResult> {
        self.client.ip().lookup(ip).await
    }

    /// Discover the caller's own public address and enrich it
    pub async fn my_ip(&self) -> Result<IpLookupResult> {
        self.client.ip().self_ip().await
    }
}
