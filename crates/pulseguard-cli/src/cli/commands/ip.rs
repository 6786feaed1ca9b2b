//! `pulseguard ip` - Look up geolocation and reputation for an address.

use anyhow::Result;
use colored::{ColoredString, Colorize};

use super::Context;
use crate::cli::args::IpArgs;
use crate::output::OutputFormat;
use pulseguard::IpLookupResult;

pub async fn execute(ctx: Context, args: IpArgs) -> Result<()> {
    let toolbox = ctx.toolbox()?;
    let result = toolbox.ip_lookup(&args.ip).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Pretty => {
            print_ip(&result);
        }
    }

    Ok(())
}

pub(crate) fn print_ip(result: &IpLookupResult) {
    println!("{} {}", "IP:".bold(), result.ip.cyan().bold());
    println!();

    if let Some(hostname) = &result.hostname {
        println!("  {} {hostname}", "Hostname:".bold());
    }
    if let Some(org) = &result.organization {
        println!("  {} {org}", "Organization:".bold());
    }
    if let Some(asn) = &result.asn {
        println!("  {} {asn}", "ASN:".bold());
    }
    if let Some(isp) = &result.isp {
        println!("  {} {isp}", "ISP:".bold());
    }
    if let Some(location) = result.location() {
        println!("  {} {location}", "Location:".bold());
    }
    if let Some(tz) = &result.timezone {
        println!("  {} {tz}", "Timezone:".bold());
    }
    if let Some(loc) = &result.loc {
        println!("  {} {loc}", "Coordinates:".bold());
    }
    if let Some(postal) = &result.postal {
        println!("  {} {postal}", "Postal:".bold());
    }

    // A provider that stayed silent on a flag gets "unknown", not "no".
    println!();
    println!("{}", "Reputation:".bold().underline());
    println!("  {} {}", "VPN:".bold(), flag(result.is_vpn));
    println!("  {} {}", "Proxy:".bold(), flag(result.is_proxy));
    println!("  {} {}", "Tor:".bold(), flag(result.is_tor));
    println!("  {} {}", "Hosting:".bold(), flag(result.is_hosting));
}

fn flag(value: Option<bool>) -> ColoredString {
    match value {
        Some(true) => "yes".red().bold(),
        Some(false) => "no".green(),
        None => "unknown".dimmed(),
    }
}
