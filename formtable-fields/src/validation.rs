//! Load-time validation of a field list.
//!
//! Serde already rejects unknown kinds and input types. What is left are the
//! cross-field rules that keep the rendered form submittable.

use std::collections::HashSet;

use crate::error::{FieldsError, Result};
use crate::types::Field;

/// Check a field list before it becomes a [`Catalog`](crate::Catalog).
///
/// Rules, checked in field order so the first offending field is reported:
/// - at least one field
/// - every name non-empty and unique
/// - every label non-empty
/// - choice and select fields carry at least one option
pub fn validate_fields(fields: &[Field]) -> Result<()> {
    if fields.is_empty() {
        return Err(FieldsError::EmptyCatalog);
    }

    let mut seen = HashSet::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        let name = field.name();
        if name.trim().is_empty() {
            return Err(FieldsError::EmptyName { index });
        }
        if !seen.insert(name) {
            return Err(FieldsError::DuplicateFieldName {
                name: name.to_string(),
            });
        }
        if field.label().trim().is_empty() {
            return Err(FieldsError::EmptyLabel {
                name: name.to_string(),
            });
        }
        if field.option_count() == Some(0) {
            return Err(FieldsError::EmptyOptions {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}
