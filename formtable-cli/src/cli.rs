//! CLI definition for the formtable command-line interface.
//!
//! This module only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// formtable - render the contact form table
///
/// Renders a catalog of form fields into an HTML table and mounts it into
/// the element with id `form` (or `--id`) of a page.
#[derive(Parser, Debug)]
#[command(name = "formtable")]
#[command(version)]
#[command(about = "Render a contact form table into an HTML page")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Catalog YAML file to render instead of the built-in contact form
    #[arg(short, long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the rendered table markup to stdout
    Render,
    /// Mount the rendered table into an HTML page
    Mount {
        /// HTML page containing the mount point
        page: PathBuf,
        /// Id of the container element
        #[arg(long, value_name = "ID")]
        id: Option<String>,
        /// Write the result here instead of updating the page in place
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Load and validate a catalog, then list its fields
    Check,
}
