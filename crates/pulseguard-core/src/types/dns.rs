use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Individual DNS record as returned by the backend.
///
/// Fields are passed through verbatim; `ttl` and `priority` are absent for
/// record types that do not carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record type (A, AAAA, MX, TXT, NS, SOA, CNAME)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Record owner name
    pub name: String,

    /// Record value
    pub value: String,

    /// Time-to-live in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Priority (MX and SRV records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl DnsRecord {
    /// Try to parse the value as an IP address
    #[must_use]
    pub fn as_ip(&self) -> Option<IpAddr> {
        self.value.parse().ok()
    }

    /// Returns true if this is an A or AAAA record
    #[must_use]
    pub fn is_address_record(&self) -> bool {
        matches!(self.record_type.as_str(), "A" | "AAAA")
    }
}

/// DNS lookup result for a single domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsScanResult {
    /// The normalized domain that was queried (lowercased, no scheme, no path)
    pub domain: String,

    /// Records in the order the backend returned them
    #[serde(default)]
    pub records: Vec<DnsRecord>,

    /// Authoritative nameservers, when the backend provides them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,

    /// Lookup duration in milliseconds
    pub scan_time_ms: u64,
}

impl DnsScanResult {
    /// Get all records of a specific type
    #[must_use]
    pub fn records_by_type(&self, record_type: &str) -> Vec<&DnsRecord> {
        self.records
            .iter()
            .filter(|r| r.record_type == record_type)
            .collect()
    }

    /// Get all A records
    #[must_use]
    pub fn a_records(&self) -> Vec<&DnsRecord> {
        self.records_by_type("A")
    }

    /// Get all AAAA records
    #[must_use]
    pub fn aaaa_records(&self) -> Vec<&DnsRecord> {
        self.records_by_type("AAAA")
    }

    /// Get all MX records
    #[must_use]
    pub fn mx_records(&self) -> Vec<&DnsRecord> {
        self.records_by_type("MX")
    }

    /// Get all TXT records
    #[must_use]
    pub fn txt_records(&self) -> Vec<&DnsRecord> {
        self.records_by_type("TXT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_by_type_filters_without_reordering() {
        let result = DnsScanResult {
            domain: "example.com".into(),
            records: vec![
                DnsRecord {
                    record_type: "MX".into(),
                    name: "example.com".into(),
                    value: "mail2.example.com".into(),
                    ttl: Some(300),
                    priority: Some(20),
                },
                DnsRecord {
                    record_type: "A".into(),
                    name: "example.com".into(),
                    value: "192.0.2.10".into(),
                    ttl: Some(300),
                    priority: None,
                },
                DnsRecord {
                    record_type: "MX".into(),
                    name: "example.com".into(),
                    value: "mail1.example.com".into(),
                    ttl: Some(300),
                    priority: Some(10),
                },
            ],
            nameservers: None,
            scan_time_ms: 12,
        };

        let mx: Vec<&str> = result.mx_records().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(mx, vec!["mail2.example.com", "mail1.example.com"]);
        assert_eq!(result.a_records().len(), 1);
    }

    #[test]
    fn ttl_and_priority_are_optional_on_the_wire() {
        let raw = r#"{"type":"TXT","name":"example.com","value":"v=spf1 -all"}"#;
        let record: DnsRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.ttl, None);
        assert_eq!(record.priority, None);
        assert!(!record.is_address_record());
    }

    #[test]
    fn address_records_parse_as_ips() {
        let record = DnsRecord {
            record_type: "A".into(),
            name: "example.com".into(),
            value: "192.0.2.1".into(),
            ttl: None,
            priority: None,
        };
        assert!(record.is_address_record());
        assert!(record.as_ip().is_some());
    }
}
