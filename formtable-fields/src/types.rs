//! Core field types for the form catalog.
//!
//! All types serialize to/from YAML via serde. A [`Field`] describes one row
//! of the form: its wire-level name, its display label, and the data needed
//! to build the row's control.

use serde::{Deserialize, Serialize};

/// The `type` attribute of a single-line text input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TextKind {
    Text,
    Email,
    Tel,
}

impl TextKind {
    /// The HTML `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Text => "text",
            TextKind::Email => "email",
            TextKind::Tel => "tel",
        }
    }
}

/// The `type` attribute of a button-style input group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ChoiceKind {
    /// Single selection.
    Radio,
    /// Multiple selection.
    Checkbox,
}

impl ChoiceKind {
    /// The HTML `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            ChoiceKind::Radio => "radio",
            ChoiceKind::Checkbox => "checkbox",
        }
    }
}

/// One selectable button in a radio or checkbox group.
///
/// `value` doubles as the element `id`, so it is kept numeric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub value: u32,
}

/// One `<option>` in a select box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub text: String,
    pub value: u32,
}

/// Discriminant of a [`Field`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    TextInput,
    ChoiceInput,
    SelectField,
    TextAreaField,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::TextInput => write!(f, "text"),
            FieldKind::ChoiceInput => write!(f, "choice"),
            FieldKind::SelectField => write!(f, "select"),
            FieldKind::TextAreaField => write!(f, "textarea"),
        }
    }
}

/// A form field: the complete description of one table row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Field {
    /// Single-line `<input>` with an optional placeholder attribute.
    #[serde(rename = "text")]
    TextInput {
        name: String,
        label: String,
        #[serde(rename = "type")]
        input_type: TextKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    /// A radio or checkbox group sharing one `name`.
    #[serde(rename = "choice")]
    ChoiceInput {
        name: String,
        label: String,
        #[serde(rename = "type")]
        input_type: ChoiceKind,
        values: Vec<ChoiceOption>,
    },
    #[serde(rename = "select")]
    SelectField {
        name: String,
        label: String,
        options: Vec<SelectOption>,
    },
    /// `<textarea>` whose placeholder is pre-filled body text.
    #[serde(rename = "textarea")]
    TextAreaField {
        name: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

impl Field {
    /// The form field name submitted on the wire.
    pub fn name(&self) -> &str {
        match self {
            Field::TextInput { name, .. }
            | Field::ChoiceInput { name, .. }
            | Field::SelectField { name, .. }
            | Field::TextAreaField { name, .. } => name,
        }
    }

    /// The label shown in the row header.
    pub fn label(&self) -> &str {
        match self {
            Field::TextInput { label, .. }
            | Field::ChoiceInput { label, .. }
            | Field::SelectField { label, .. }
            | Field::TextAreaField { label, .. } => label,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::TextInput { .. } => FieldKind::TextInput,
            Field::ChoiceInput { .. } => FieldKind::ChoiceInput,
            Field::SelectField { .. } => FieldKind::SelectField,
            Field::TextAreaField { .. } => FieldKind::TextAreaField,
        }
    }

    /// Number of selectable options, or `None` for free-text fields.
    pub fn option_count(&self) -> Option<usize> {
        match self {
            Field::ChoiceInput { values, .. } => Some(values.len()),
            Field::SelectField { options, .. } => Some(options.len()),
            Field::TextInput { .. } | Field::TextAreaField { .. } => None,
        }
    }
}
