use crate::error::{PulseError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named preset selecting which ports a scan probes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    /// A handful of the most common service ports, optimized for fast feedback
    Quick,
    /// A larger fixed set of well-known service ports
    Common,
    /// The entire 1-65535 range; expensive, callers are warned
    Full,
    /// Ports parsed from the request's `custom_ports` field
    Custom,
}

impl std::fmt::Display for ScanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quick => write!(f, "quick"),
            Self::Common => write!(f, "common"),
            Self::Full => write!(f, "full"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for ScanType {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "common" => Ok(Self::Common),
            "full" => Ok(Self::Full),
            "custom" => Ok(Self::Custom),
            other => Err(PulseError::InvalidInput(format!(
                "unknown scan type: {other} (expected quick, common, full, or custom)"
            ))),
        }
    }
}

/// Transport protocol requested for a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// TCP connect probing
    Tcp,
    /// UDP probing (accepted as input, rejected at validation)
    Udp,
    /// Both transports (accepted as input, rejected at validation)
    Both,
}

impl Default for Protocol {
    fn default() -> Self {
        Self::Tcp
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
            Self::Udp => write!(f, "udp"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for Protocol {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            "both" => Ok(Self::Both),
            other => Err(PulseError::InvalidInput(format!(
                "unknown protocol: {other} (expected tcp, udp, or both)"
            ))),
        }
    }
}

/// Terminal classification of a single port probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// The connection was actively accepted within the timeout
    Open,
    /// The connection was actively refused by the peer
    Closed,
    /// Neither accepted nor refused before the timeout expired; typically a
    /// firewall silently dropping packets
    Filtered,
}

impl PortStatus {
    /// Returns true if the port accepted a connection
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl std::fmt::Display for PortStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Filtered => write!(f, "filtered"),
        }
    }
}

/// A port scan request as submitted by the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Hostname or literal IP address to probe
    pub target: String,

    /// Which ports to probe
    pub scan_type: ScanType,

    /// Textual port specification, e.g. "80,443,8000-8010".
    /// Required when `scan_type` is custom, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ports: Option<String>,

    /// Requested transport; only TCP probing is supported
    #[serde(default)]
    pub protocol: Protocol,

    /// Per-port probe timeout in seconds
    pub timeout_secs: u64,
}

impl ScanRequest {
    /// Create a TCP scan request with the given preset and timeout
    #[must_use]
    pub fn new(target: impl Into<String>, scan_type: ScanType, timeout_secs: u64) -> Self {
        Self {
            target: target.into(),
            scan_type,
            custom_ports: None,
            protocol: Protocol::Tcp,
            timeout_secs,
        }
    }

    /// Create a custom-port scan request
    #[must_use]
    pub fn custom(
        target: impl Into<String>,
        ports: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            target: target.into(),
            scan_type: ScanType::Custom,
            custom_ports: Some(ports.into()),
            protocol: Protocol::Tcp,
            timeout_secs,
        }
    }

    /// Validate the request locally, before any network activity.
    ///
    /// Checks the invariants the rest of the toolbox relies on: a non-empty
    /// target, `custom_ports` present iff the scan type is custom, a positive
    /// timeout, and a supported transport.
    pub fn validate(&self) -> Result<()> {
        if self.target.trim().is_empty() {
            return Err(PulseError::InvalidInput("scan target must not be empty".into()));
        }

        match self.scan_type {
            ScanType::Custom => {
                if self.custom_ports.as_deref().map_or(true, |p| p.trim().is_empty()) {
                    return Err(PulseError::InvalidInput(
                        "custom scan requires a port list".into(),
                    ));
                }
            }
            _ => {
                if self.custom_ports.is_some() {
                    return Err(PulseError::InvalidInput(format!(
                        "custom_ports is only valid with scan type custom, not {}",
                        self.scan_type
                    )));
                }
            }
        }

        // Connect/refuse/timeout classification is inherently TCP; a UDP
        // request silently probed over TCP would misreport, so reject it.
        if self.protocol != Protocol::Tcp {
            return Err(PulseError::InvalidInput(format!(
                "{} scanning is not supported; only tcp probing is available",
                self.protocol
            )));
        }

        if self.timeout_secs == 0 {
            return Err(PulseError::InvalidInput("timeout must be positive".into()));
        }

        Ok(())
    }
}

/// Result of probing a single port. Created once per port per scan and never
/// updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortProbeResult {
    /// Port number in [1, 65535]
    pub port: u16,

    /// Transport that was probed
    pub protocol: Protocol,

    /// Terminal classification
    pub status: PortStatus,

    /// Human-readable service name from the well-known-port table
    pub service: String,

    /// Probe round-trip in milliseconds; present when the probe completed
    /// (accepted or refused) within the timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

/// The atomic result of one scan invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// The target as requested
    pub target: String,

    /// Total wall-clock duration of the whole batch in milliseconds
    pub scan_time_ms: u64,

    /// When the scan finished
    pub completed_at: DateTime<Utc>,

    /// Per-port results, in scan order (resolver order, not sorted by number)
    pub ports: Vec<PortProbeResult>,

    /// Number of ports classified open
    pub open_ports: usize,

    /// Number of ports classified closed
    pub closed_ports: usize,

    /// Number of ports classified filtered
    pub filtered_ports: usize,
}

impl ScanSummary {
    /// Build a summary from an ordered result list, deriving the counts.
    ///
    /// The derived tallies always satisfy
    /// `open_ports + closed_ports + filtered_ports == ports.len()`.
    #[must_use]
    pub fn tally(target: impl Into<String>, scan_time_ms: u64, ports: Vec<PortProbeResult>) -> Self {
        let open_ports = ports.iter().filter(|p| p.status == PortStatus::Open).count();
        let closed_ports = ports.iter().filter(|p| p.status == PortStatus::Closed).count();
        let filtered_ports = ports.iter().filter(|p| p.status == PortStatus::Filtered).count();

        Self {
            target: target.into(),
            scan_time_ms,
            completed_at: Utc::now(),
            ports,
            open_ports,
            closed_ports,
            filtered_ports,
        }
    }

    /// Iterate over the ports that accepted a connection
    pub fn open(&self) -> impl Iterator<Item = &PortProbeResult> {
        self.ports.iter().filter(|p| p.status.is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(port: u16, status: PortStatus) -> PortProbeResult {
        PortProbeResult {
            port,
            protocol: Protocol::Tcp,
            status,
            service: "Unknown".to_string(),
            response_time_ms: None,
        }
    }

    #[test]
    fn tally_counts_match_port_list() {
        let summary = ScanSummary::tally(
            "198.51.100.7",
            42,
            vec![
                probe(80, PortStatus::Open),
                probe(81, PortStatus::Closed),
                probe(82, PortStatus::Filtered),
                probe(83, PortStatus::Closed),
            ],
        );
        assert_eq!(summary.open_ports, 1);
        assert_eq!(summary.closed_ports, 2);
        assert_eq!(summary.filtered_ports, 1);
        assert_eq!(
            summary.open_ports + summary.closed_ports + summary.filtered_ports,
            summary.ports.len()
        );
    }

    #[test]
    fn zero_open_ports_is_a_valid_result() {
        let summary = ScanSummary::tally("example.com", 5, vec![probe(81, PortStatus::Closed)]);
        assert_eq!(summary.open_ports, 0);
        assert_eq!(summary.ports.len(), 1);
    }

    #[test]
    fn validate_rejects_empty_target() {
        let req = ScanRequest::new("  ", ScanType::Quick, 3);
        assert!(matches!(req.validate(), Err(PulseError::InvalidInput(_))));
    }

    #[test]
    fn validate_requires_ports_for_custom() {
        let mut req = ScanRequest::new("example.com", ScanType::Custom, 3);
        assert!(matches!(req.validate(), Err(PulseError::InvalidInput(_))));

        req.custom_ports = Some("80,443".into());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn validate_rejects_stray_custom_ports() {
        let mut req = ScanRequest::new("example.com", ScanType::Quick, 3);
        req.custom_ports = Some("80".into());
        assert!(matches!(req.validate(), Err(PulseError::InvalidInput(_))));
    }

    #[test]
    fn validate_rejects_udp() {
        let mut req = ScanRequest::new("example.com", ScanType::Quick, 3);
        req.protocol = Protocol::Udp;
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("udp"));

        req.protocol = Protocol::Both;
        assert!(req.validate().is_err());
    }

    #[test]
    fn scan_type_round_trips_through_strings() {
        for (s, expected) in [
            ("quick", ScanType::Quick),
            ("common", ScanType::Common),
            ("FULL", ScanType::Full),
            ("custom", ScanType::Custom),
        ] {
            assert_eq!(s.parse::<ScanType>().unwrap(), expected);
        }
        assert!("deep".parse::<ScanType>().is_err());
    }

    #[test]
    fn protocol_parses_but_only_tcp_validates() {
        assert_eq!("tcp".parse::<Protocol>().unwrap(), Protocol::Tcp);
        assert_eq!("UDP".parse::<Protocol>().unwrap(), Protocol::Udp);
        assert!("icmp".parse::<Protocol>().is_err());
    }
}
