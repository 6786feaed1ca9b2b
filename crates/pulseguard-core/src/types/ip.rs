use serde::{Deserialize, Serialize};

/// IP lookup result with geolocation and reputation enrichment.
///
/// Every enrichment field is optional: a missing field means the upstream
/// provider did not supply it, which is not the same as a negative value.
/// Reputation flags in particular stay `None` when absent so the UI can
/// render "unknown" instead of a false verified-negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpLookupResult {
    /// The address that was looked up
    #[serde(default)]
    pub ip: String,

    /// Reverse-DNS hostname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Organization that owns the address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Autonomous System Number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn: Option<String>,

    /// City name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Region/state name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Full country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Two-letter country code (ISO 3166-1 alpha-2)
    #[serde(default, rename = "countryCode", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// IANA timezone name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// "lat,lon" coordinate pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,

    /// Postal/ZIP code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,

    /// Internet Service Provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,

    /// Address belongs to a known VPN exit
    #[serde(default, rename = "isVPN", skip_serializing_if = "Option::is_none")]
    pub is_vpn: Option<bool>,

    /// Address is a known proxy
    #[serde(default, rename = "isProxy", skip_serializing_if = "Option::is_none")]
    pub is_proxy: Option<bool>,

    /// Address is a Tor exit node
    #[serde(default, rename = "isTor", skip_serializing_if = "Option::is_none")]
    pub is_tor: Option<bool>,

    /// Address belongs to a hosting/datacenter range
    #[serde(default, rename = "isHosting", skip_serializing_if = "Option::is_none")]
    pub is_hosting: Option<bool>,
}

impl IpLookupResult {
    /// Returns a "city, region, country" line from whatever location fields
    /// are present
    #[must_use]
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_deref(), self.region.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Returns true if the upstream provided any reputation verdicts at all
    #[must_use]
    pub const fn has_reputation_data(&self) -> bool {
        self.is_vpn.is_some()
            || self.is_proxy.is_some()
            || self.is_tor.is_some()
            || self.is_hosting.is_some()
    }
}

/// Response shape of the public IP-echo service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicIp {
    /// The caller's public IP address
    pub ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reputation_flags_stay_unknown() {
        let raw = r#"{"ip":"203.0.113.9","city":"Oslo","isProxy":false}"#;
        let result: IpLookupResult = serde_json::from_str(raw).unwrap();

        assert_eq!(result.is_proxy, Some(false));
        // Absent flags must not collapse to false
        assert_eq!(result.is_vpn, None);
        assert_eq!(result.is_tor, None);
        assert_eq!(result.is_hosting, None);
        assert!(result.has_reputation_data());
    }

    #[test]
    fn absent_flags_do_not_serialize() {
        let result: IpLookupResult =
            serde_json::from_str(r#"{"ip":"203.0.113.9"}"#).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("isVPN"));
        assert!(!result.has_reputation_data());
    }

    #[test]
    fn location_joins_available_fields() {
        let result: IpLookupResult =
            serde_json::from_str(r#"{"ip":"203.0.113.9","city":"Oslo","country":"Norway"}"#)
                .unwrap();
        assert_eq!(result.location().unwrap(), "Oslo, Norway");

        let bare: IpLookupResult = serde_json::from_str(r#"{"ip":"203.0.113.9"}"#).unwrap();
        assert_eq!(bare.location(), None);
    }

    #[test]
    fn wire_names_use_backend_casing() {
        let raw = r#"{"ip":"203.0.113.9","countryCode":"NO","isVPN":true}"#;
        let result: IpLookupResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.country_code.as_deref(), Some("NO"));
        assert_eq!(result.is_vpn, Some(true));
    }
}
