//! Errors surfaced by CLI commands.

use std::path::PathBuf;

use formtable_config::ConfigError;
use formtable_fields::FieldsError;
use formtable_render::RenderError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("catalog: {0}")]
    Catalog(#[from] FieldsError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
