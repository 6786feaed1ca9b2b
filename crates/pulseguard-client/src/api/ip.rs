//! IP lookup and self-IP endpoints.

use crate::PulseClient;
use pulseguard_core::{IpLookupResult, PublicIp, PulseError, Result};
use std::net::IpAddr;
use tracing::debug;

/// IP lookup endpoint
pub struct IpApi<'a> {
    client: &'a PulseClient,
}

impl<'a> IpApi<'a> {
    pub(crate) fn new(client: &'a PulseClient) -> Self {
        Self { client }
    }

    /// Look up geolocation and reputation data for an address.
    ///
    /// Every enrichment field the upstream omits stays absent in the result;
    /// nothing is defaulted to a value that reads as a verified negative.
    pub async fn lookup(&self, ip: &str) -> Result<IpLookupResult> {
        let ip = ip.trim();
        if ip.is_empty() {
            return Err(PulseError::InvalidInput("ip address must not be empty".into()));
        }
        ip.parse::<IpAddr>()
            .map_err(|_| PulseError::InvalidInput(format!("not an IP address: {ip}")))?;

        let mut result: IpLookupResult = self.client.get(&format!("/toolbox/ip/{ip}")).await?;
        if result.ip.is_empty() {
            result.ip = ip.to_string();
        }

        Ok(result)
    }

    /// Discover the caller's own public address, then enrich it.
    ///
    /// The echo step failing aborts the whole flow; the enrichment lookup is
    /// never called with an empty address.
    pub async fn self_ip(&self) -> Result<IpLookupResult> {
        let echo: PublicIp = self
            .client
            .get_public(self.client.echo_url())
            .await
            .map_err(|e| PulseError::SelfIpUnavailable(e.to_string()))?;

        if echo.ip.trim().is_empty() {
            return Err(PulseError::SelfIpUnavailable(
                "echo service returned an empty address".into(),
            ));
        }

        debug!(ip = %echo.ip, "echo service resolved own address");
        self.lookup(&echo.ip).await
    }
}
