//! HTML rendering for the contact form table
//!
//! Turns a [`Catalog`](formtable_fields::Catalog) into one `<table>` of form
//! rows and writes it into a host document.
//!
//! - [`escape`]: entity escaping applied to every piece of field text
//! - [`rows`]: one renderer per field kind, plus the exhaustive dispatcher
//! - [`table`]: catalog to `<table>` markup
//! - [`mount`]: the host document traits and the mount entry point
//! - [`page`]: an HTML page string usable as a host document
//!
//! ```
//! use formtable_fields::Catalog;
//! use formtable_render::{mount, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new().with_element("form");
//! mount(&mut doc, &Catalog::contact_form()).unwrap();
//! assert!(doc.inner_html("form").unwrap().starts_with("<table>"));
//! ```

pub mod error;
pub mod escape;
pub mod mount;
pub mod page;
pub mod rows;
pub mod table;

pub use error::{RenderError, Result};
pub use escape::{escape_html, needs_escaping};
pub use mount::{
    mount, mount_form, HostDocument, MemoryDocument, MemoryElement, MountTarget, DEFAULT_MOUNT_ID,
};
pub use page::{HtmlPage, PageElement};
pub use rows::render_row;
pub use table::render_table;
