//! Port-set resolution: scan-type presets, custom port parsing, and the
//! well-known service table.

use crate::error::{ProbeError, ProbeResult};
use pulseguard_core::ScanType;
use std::collections::HashSet;

/// Small fixed set probed by a quick scan, chosen for fast feedback
pub const QUICK_PORTS: [u16; 10] = [21, 22, 23, 25, 53, 80, 110, 143, 443, 3389];

/// Well-known service ports probed by a common scan
pub const COMMON_PORTS: [u16; 26] = [
    21, 22, 23, 25, 53, 80, 110, 111, 135, 139, 143, 443, 445, 465, 587, 993, 995, 1433, 1521,
    3128, 3306, 3389, 5432, 5900, 8080, 8443,
];

/// Resolve a scan type to the ordered, duplicate-free port set to probe.
///
/// `custom` is consulted only for [`ScanType::Custom`]. The returned order is
/// the probe order; repeated calls with the same input return the identical
/// sequence.
pub fn resolve_ports(scan_type: ScanType, custom: Option<&str>) -> ProbeResult<Vec<u16>> {
    let ports = match scan_type {
        ScanType::Quick => QUICK_PORTS.to_vec(),
        ScanType::Common => COMMON_PORTS.to_vec(),
        ScanType::Full => (1..=u16::MAX).collect(),
        ScanType::Custom => {
            let spec = custom.ok_or_else(|| {
                ProbeError::InvalidPorts("custom scan requires a port list".into())
            })?;
            parse_port_spec(spec)?
        }
    };

    if ports.is_empty() {
        return Err(ProbeError::InvalidPorts("resolved port set is empty".into()));
    }

    Ok(ports)
}

/// Parse a textual port specification into a duplicate-free port list.
///
/// Accepts comma-separated single ports (`80`) and inclusive ranges
/// (`8000-8010`). First occurrence wins; input order is preserved.
pub fn parse_port_spec(spec: &str) -> ProbeResult<Vec<u16>> {
    let mut out: Vec<u16> = Vec::new();
    let mut seen = HashSet::new();

    if spec.trim().is_empty() {
        return Err(ProbeError::InvalidPorts("port list is empty".into()));
    }

    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(ProbeError::InvalidPorts("empty port entry in list".into()));
        }

        if let Some((a, b)) = token.split_once('-') {
            let start = parse_port(a.trim())?;
            let end = parse_port(b.trim())?;
            if start > end {
                return Err(ProbeError::InvalidPorts(format!(
                    "invalid range {start}-{end} (start > end)"
                )));
            }
            for p in start..=end {
                if seen.insert(p) {
                    out.push(p);
                }
            }
            continue;
        }

        let p = parse_port(token)?;
        if seen.insert(p) {
            out.push(p);
        }
    }

    Ok(out)
}

fn parse_port(s: &str) -> ProbeResult<u16> {
    let val: u32 = s
        .parse()
        .map_err(|_| ProbeError::InvalidPorts(format!("not a port number: {s}")))?;
    if val == 0 || val > u32::from(u16::MAX) {
        return Err(ProbeError::InvalidPorts(format!("port out of range: {val}")));
    }
    Ok(val as u16)
}

/// Look up the conventional service name for a well-known port
#[must_use]
pub const fn service_name(port: u16) -> Option<&'static str> {
    match port {
        21 => Some("FTP"),
        22 => Some("SSH"),
        23 => Some("Telnet"),
        25 => Some("SMTP"),
        53 => Some("DNS"),
        80 => Some("HTTP"),
        110 => Some("POP3"),
        111 => Some("RPCBind"),
        135 => Some("MS RPC"),
        139 => Some("NetBIOS"),
        143 => Some("IMAP"),
        443 => Some("HTTPS"),
        445 => Some("SMB"),
        465 => Some("SMTPS"),
        587 => Some("SMTP Submission"),
        993 => Some("IMAPS"),
        995 => Some("POP3S"),
        1433 => Some("MSSQL"),
        1521 => Some("Oracle"),
        3000 | 5000 => Some("Dev HTTP"),
        3128 => Some("HTTP Proxy"),
        3306 => Some("MySQL"),
        3389 => Some("RDP"),
        5432 => Some("PostgreSQL"),
        5900 => Some("VNC"),
        6379 => Some("Redis"),
        8080 => Some("HTTP Alt"),
        8443 => Some("HTTPS Alt"),
        9200 => Some("Elasticsearch"),
        11211 => Some("Memcached"),
        27017 => Some("MongoDB"),
        _ => None,
    }
}
