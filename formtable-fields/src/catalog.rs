//! Catalog: the ordered, immutable list of fields for one form.
//!
//! A catalog is built once, validated, and then handed to the renderer by
//! reference. It comes either from the built-in contact form or from a YAML
//! document on disk.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::Field;
use crate::validation::validate_fields;

/// On-disk shape of a catalog file.
///
/// `kind` is one of `text`, `choice`, `select` or `textarea`; `type` picks
/// the input type for `text` (`text`, `email`, `tel`) and `choice`
/// (`radio`, `checkbox`).
///
/// ```yaml
/// fields:
///   - kind: text
///     name: name
///     label: お名前
///     type: text
///   - kind: choice
///     name: contact
///     label: ご希望の返信方法
///     type: radio
///     values:
///       - { label: メール, value: 0 }
///   - kind: select
///     name: inquiry_kind
///     label: お問い合せの種類
///     options:
///       - { text: その他, value: 0 }
///   - kind: textarea
///     name: inquiry_detail
///     label: お問い合せ内容
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    fields: Vec<Field>,
}

/// Ordered set of form fields. Field order is row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    fields: Vec<Field>,
}

impl Catalog {
    /// Build a catalog from fields, rejecting lists that would render a
    /// broken form.
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        validate_fields(&fields)?;
        Ok(Self { fields })
    }

    /// Wrap fields already known to be valid.
    pub(crate) fn from_validated(fields: Vec<Field>) -> Self {
        debug_assert!(validate_fields(&fields).is_ok());
        Self { fields }
    }

    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_yaml_ng::from_str(yaml)?;
        Self::new(doc.fields)
    }

    /// Load a catalog file.
    ///
    /// ```rust,ignore
    /// let catalog = Catalog::load("contact.yaml").await?;
    /// ```
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FieldsError::CatalogNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        let catalog = Self::from_yaml(&content)?;
        debug!(path = %path.display(), fields = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Serialize back to the on-disk YAML shape.
    pub fn to_yaml(&self) -> Result<String> {
        let doc = CatalogDocument {
            fields: self.fields.clone(),
        };
        Ok(serde_yaml_ng::to_string(&doc)?)
    }

    /// All fields, in row order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field by its form name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
