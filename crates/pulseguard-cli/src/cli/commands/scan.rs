//! `pulseguard scan` - Probe TCP ports on a target host.

use anyhow::Result;
use colored::Colorize;
use std::time::Duration;

use super::Context;
use crate::cli::args::ScanArgs;
use crate::output::OutputFormat;
use pulseguard::probe::ScanConfig;
use pulseguard::{PortProbeResult, PortStatus, ScanRequest, ScanSummary, ScanType};

/// Above this many probed ports the pretty listing shows open ports only.
const FULL_LISTING_LIMIT: usize = 128;

pub async fn execute(ctx: Context, args: ScanArgs) -> Result<()> {
    if args.scan_type == ScanType::Full {
        eprintln!(
            "{}",
            "warning: a full scan probes all 65535 ports and can take several minutes".yellow()
        );
    }

    let mut request = ScanRequest::new(&args.target, args.scan_type, args.timeout);
    request.custom_ports = args.ports;
    request.protocol = args.protocol;

    let mut config = ScanConfig::default();
    if let Some(window) = args.window {
        config.max_in_flight = window;
    }
    if let Some(deadline) = args.deadline {
        config.overall_timeout = Some(Duration::from_secs(deadline));
    }

    let toolbox = ctx.toolbox()?.with_scan_config(config);
    let summary = toolbox.scan_ports(&request).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Pretty => {
            print_summary(&summary);
        }
    }

    Ok(())
}

fn print_summary(summary: &ScanSummary) {
    println!("{} {}", "Target:".bold(), summary.target.cyan().bold());
    println!(
        "  {} open, {} closed, {} filtered ({} ports in {} ms)",
        summary.open_ports.to_string().green().bold(),
        summary.closed_ports.to_string().red(),
        summary.filtered_ports.to_string().yellow(),
        summary.ports.len(),
        summary.scan_time_ms
    );
    println!();

    let elided = summary.ports.len() > FULL_LISTING_LIMIT;
    let rows: Vec<&PortProbeResult> = if elided {
        summary.open().collect()
    } else {
        summary.ports.iter().collect()
    };

    for probe in rows {
        let status = match probe.status {
            PortStatus::Open => "open".green().bold(),
            PortStatus::Closed => "closed".red(),
            PortStatus::Filtered => "filtered".yellow(),
        };
        let rtt = probe
            .response_time_ms
            .map_or_else(String::new, |ms| format!("{ms} ms"));
        println!(
            "  {:>5}/{}  {:<10} {:<18} {}",
            probe.port,
            probe.protocol,
            status,
            probe.service,
            rtt.dimmed()
        );
    }

    if elided {
        println!();
        println!(
            "{}",
            format!(
                "  ({} closed/filtered ports not listed; use --output json for the full list)",
                summary.closed_ports + summary.filtered_ports
            )
            .dimmed()
        );
    }
}
