//! Field catalog for the contact form table
//!
//! `formtable-fields` owns the declarative description of a form: which
//! fields it has, in what order, and what each control offers. It knows
//! nothing about markup; `formtable-render` turns a [`Catalog`] into HTML.
//!
//! # Architecture
//!
//! - **Closed set of field kinds**: [`Field`] is an enum, so every consumer
//!   matches exhaustively
//! - **Validated on construction**: a [`Catalog`] cannot hold duplicate names or
//!   empty option lists
//! - **YAML on disk**: external catalogs use the same serde shape as the types
//! - **Built-in default**: [`Catalog::contact_form()`] is the eight-field contact form

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;

pub use builtin::contact_form_fields;
pub use catalog::Catalog;
pub use error::{FieldsError, Result};
pub use types::{ChoiceKind, ChoiceOption, Field, FieldKind, SelectOption, TextKind};
pub use validation::validate_fields;
