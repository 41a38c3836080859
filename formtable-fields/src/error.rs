//! Error types for the field catalog

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while building or loading a catalog
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Catalog contains no fields
    #[error("catalog has no fields")]
    EmptyCatalog,

    /// Field at the given position has an empty name
    #[error("field #{index} has an empty name")]
    EmptyName { index: usize },

    /// Field has an empty label
    #[error("field '{name}' has an empty label")]
    EmptyLabel { name: String },

    /// Duplicate field name
    #[error("duplicate field name: {name}")]
    DuplicateFieldName { name: String },

    /// Choice or select field without options
    #[error("field '{name}' has no options")]
    EmptyOptions { name: String },

    /// Catalog file not found
    #[error("catalog file not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldsError::DuplicateFieldName {
            name: "email".into(),
        };
        assert_eq!(err.to_string(), "duplicate field name: email");
    }

    #[test]
    fn test_empty_options_error() {
        let err = FieldsError::EmptyOptions {
            name: "inquiry_kind".into(),
        };
        assert!(err.to_string().contains("inquiry_kind"));
        assert!(err.to_string().contains("no options"));
    }
}
