//! formtable command-line interface.
//!
//! Thin layer over the library crates: it resolves configuration, loads the
//! catalog and hands it to the renderer.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Commands};
pub use error::{CliError, Result};
