//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use pulseguard::{Protocol, ScanType};

/// Network diagnostics for the PulseGuard monitoring service
///
/// Probe TCP ports, look up DNS records, and check IP geolocation and
/// reputation, all from the terminal.
#[derive(Parser, Debug)]
#[command(name = "pulseguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// PulseGuard API token (or set PULSEGUARD_TOKEN env var)
    #[arg(short = 't', long, env = "PULSEGUARD_TOKEN", global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe TCP ports on a target host
    Scan(ScanArgs),

    /// Look up DNS records for a domain
    Dns(DnsArgs),

    /// Look up geolocation and reputation for an IP address
    Ip(IpArgs),

    /// Show your own public IP address with enrichment
    Myip,
}

// ============================================================================
// Scan command
// ============================================================================

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Hostname or IP address to scan
    pub target: String,

    /// Scan preset: quick, common, full, or custom
    #[arg(short = 's', long = "type", value_name = "TYPE", default_value = "quick")]
    pub scan_type: ScanType,

    /// Ports to probe with --type custom (e.g. "80,443,8000-8010")
    #[arg(short, long)]
    pub ports: Option<String>,

    /// Transport protocol (only tcp is supported)
    #[arg(long, default_value = "tcp")]
    pub protocol: Protocol,

    /// Per-port probe timeout in seconds
    #[arg(long, default_value = "3")]
    pub timeout: u64,

    /// Maximum number of probes in flight at once
    #[arg(long, value_name = "N")]
    pub window: Option<usize>,

    /// Hard deadline for the whole scan, in seconds
    #[arg(long, value_name = "SECS")]
    pub deadline: Option<u64>,
}

// ============================================================================
// DNS command
// ============================================================================

#[derive(Args, Debug)]
pub struct DnsArgs {
    /// Domain name to look up (URLs are normalized to their host)
    pub domain: String,

    /// Show only records of this type (A, AAAA, MX, NS, TXT, SOA, CNAME)
    #[arg(short = 'r', long)]
    pub record_type: Option<String>,
}

// ============================================================================
// IP command
// ============================================================================

#[derive(Args, Debug)]
pub struct IpArgs {
    /// IP address to look up
    pub ip: String,
}
