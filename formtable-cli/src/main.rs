//! formtable CLI - render the contact form table.
//!
//! Commands:
//! - `formtable render`: print the table markup to stdout
//! - `formtable mount <page>`: mount the table into the `form` element of a page
//! - `formtable check`: validate a catalog and list its fields
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use formtable::commands::{check, load_catalog, mount, render, resolve_config};
use formtable::{Cli, Commands, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new(
            "formtable=debug,formtable_fields=debug,formtable_render=debug,formtable_config=debug",
        )
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let exit_code = result_to_exit(dispatch_command(cli).await);
    std::process::exit(exit_code);
}

/// Dispatch a parsed CLI to the appropriate command handler.
async fn dispatch_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render => {
            let config = resolve_config(cli.catalog, None)?;
            let catalog = load_catalog(&config).await?;
            render::run_render(&catalog, io::stdout().lock())
        }
        Commands::Mount { page, id, output } => {
            let config = resolve_config(cli.catalog, id)?;
            let catalog = load_catalog(&config).await?;
            let target =
                mount::run_mount(&page, output.as_deref(), &config.mount_id, &catalog).await?;
            eprintln!(
                "Mounted {} fields into #{} of {}",
                catalog.len(),
                config.mount_id,
                target.display()
            );
            Ok(())
        }
        Commands::Check => {
            let config = resolve_config(cli.catalog, None)?;
            let catalog = load_catalog(&config).await?;
            check::run_check(&catalog, io::stdout().lock())
        }
    }
}

/// Convert a `Result<(), E: Display>` to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: std::result::Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
