//! `pulseguard myip` - Show and enrich your own public IP address.

use anyhow::Result;

use super::ip::print_ip;
use super::Context;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context) -> Result<()> {
    let toolbox = ctx.toolbox()?;
    let result = toolbox.my_ip().await?;

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
