//! `pulseguard dns` - Look up DNS records for a domain.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::DnsArgs;
use crate::output::OutputFormat;
use pulseguard::{DnsRecord, DnsScanResult};

pub async fn execute(ctx: Context, args: DnsArgs) -> Result<()> {
    let toolbox = ctx.toolbox()?;
    let result = toolbox.dns_lookup(&args.domain).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Pretty => {
            print_records(&result, args.record_type.as_deref());
        }
    }

    Ok(())
}

fn print_records(result: &DnsScanResult, record_type: Option<&str>) {
    println!("{} {}", "Domain:".bold(), result.domain.cyan().bold());
    println!();

    let records: Vec<&DnsRecord> = match record_type {
        Some(rt) => result.records_by_type(&rt.to_uppercase()),
        None => result.records.iter().collect(),
    };

    if records.is_empty() {
        println!("  {}", "no records found".dimmed());
    } else {
        println!("{}", "DNS Records:".bold().underline());
        for record in &records {
            let extras = match (record.ttl, record.priority) {
                (Some(ttl), Some(prio)) => format!("ttl={ttl} prio={prio}"),
                (Some(ttl), None) => format!("ttl={ttl}"),
                (None, Some(prio)) => format!("prio={prio}"),
                (None, None) => String::new(),
            };
            println!(
                "  {:6} {:30} {:40} {}",
                record.record_type.yellow(),
                record.name,
                record.value,
                extras.dimmed()
            );
        }
    }

    if let Some(nameservers) = &result.nameservers {
        if !nameservers.is_empty() {
            println!();
            println!("{}", "Nameservers:".bold().underline());
            for ns in nameservers {
                println!("  {ns}");
            }
        }
    }

    println!();
    println!("{}", format!("Lookup took {} ms", result.scan_time_ms).dimmed());
}
