//! DNS lookup endpoint.

use crate::PulseClient;
use pulseguard_core::normalize::normalize_domain;
use pulseguard_core::{DnsRecord, DnsScanResult, Result};
use serde::Deserialize;
use std::time::Instant;

/// Wire shape of the backend DNS lookup response.
///
/// Field presence varies by provider; anything optional stays optional and
/// records come through verbatim.
#[derive(Debug, Deserialize)]
struct DnsLookupResponse {
    #[serde(default)]
    records: Vec<DnsRecord>,

    #[serde(default)]
    nameservers: Option<Vec<String>>,
}

/// DNS lookup endpoint
pub struct DnsApi<'a> {
    client: &'a PulseClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) fn new(client: &'a PulseClient) -> Self {
        Self { client }
    }

    /// Look up DNS records for a domain.
    ///
    /// The input is normalized (lowercased, scheme and path stripped) before
    /// it is sent upstream, not just for display.
    pub async fn lookup(&self, domain: &str) -> Result<DnsScanResult> {
        let domain = normalize_domain(domain)?;

        let start = Instant::now();
        let raw: DnsLookupResponse = self.client.get(&format!("/toolbox/dns/{domain}")).await?;

        Ok(DnsScanResult {
            domain,
            records: raw.records,
            nameservers: raw.nameservers,
            scan_time_ms: elapsed_ms(start),
        })
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis())
        .unwrap_or(u64::MAX)
        .max(1)
}
