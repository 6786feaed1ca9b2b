//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .with_target(false)
            .init();
    }

    let output_format = cli.output.unwrap_or(OutputFormat::Pretty);

    // Create context for commands
    let ctx = commands::Context {
        token: cli.token,
        output_format,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Scan(args) => commands::scan::execute(ctx, args).await,
        Commands::Dns(args) => commands::dns::execute(ctx, args).await,
        Commands::Ip(args) => commands::ip::execute(ctx, args).await,
        Commands::Myip => commands::myip::execute(ctx).await,
    }
}
