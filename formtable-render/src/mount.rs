//! Mounting the rendered table into a host document
//!
//! The renderer never owns the page. It talks to it through [`HostDocument`],
//! which can look an element up by id, and [`MountTarget`], which can replace
//! that element's content. Lookups return an explicit `Option`, and a missing
//! mount point is an error rather than a silent no-op.

use std::collections::BTreeMap;

use formtable_fields::Catalog;
use tracing::{info, warn};

use crate::error::{RenderError, Result};
use crate::table::render_table;

/// Id of the container the form is mounted into unless configured otherwise.
pub const DEFAULT_MOUNT_ID: &str = "form";

/// An element whose inner markup can be replaced.
pub trait MountTarget {
    /// Replace all existing content with `markup`.
    fn set_inner_html(&mut self, markup: String);
}

/// A document that can find elements by id.
pub trait HostDocument {
    type Element<'a>: MountTarget
    where
        Self: 'a;

    /// Look up an element by id.
    ///
    /// `Ok(None)` means no element has that id. `Err` means an element was
    /// found but cannot act as a container.
    fn element_by_id(&mut self, id: &str) -> Result<Option<Self::Element<'_>>>;
}

/// Render `catalog` and write it into the element with id `id`.
pub fn mount_form<D: HostDocument + ?Sized>(
    document: &mut D,
    id: &str,
    catalog: &Catalog,
) -> Result<()> {
    let Some(mut element) = document.element_by_id(id)? else {
        warn!(id, "mount point missing");
        return Err(RenderError::MountPointNotFound { id: id.to_string() });
    };
    let markup = render_table(catalog);
    let bytes = markup.len();
    element.set_inner_html(markup);
    info!(id, fields = catalog.len(), bytes, "form mounted");
    Ok(())
}

/// Mount into the element with the default id `form`.
pub fn mount<D: HostDocument + ?Sized>(document: &mut D, catalog: &Catalog) -> Result<()> {
    mount_form(document, DEFAULT_MOUNT_ID, catalog)
}

/// In-memory document: a map from element id to inner markup.
#[derive(Debug, Default, Clone)]
pub struct MemoryDocument {
    elements: BTreeMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element, builder style.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), String::new());
        self
    }

    /// Current inner markup of an element.
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }
}

/// Mutable handle to one element of a [`MemoryDocument`].
pub struct MemoryElement<'a> {
    content: &'a mut String,
}

impl MountTarget for MemoryElement<'_> {
    fn set_inner_html(&mut self, markup: String) {
        *self.content = markup;
    }
}

impl HostDocument for MemoryDocument {
    type Element<'a> = MemoryElement<'a>;

    fn element_by_id(&mut self, id: &str) -> Result<Option<MemoryElement<'_>>> {
        Ok(self
            .elements
            .get_mut(id)
            .map(|content| MemoryElement { content }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_writes_table() {
        let mut doc = MemoryDocument::new().with_element("form");
        mount(&mut doc, &Catalog::contact_form()).unwrap();

        let html = doc.inner_html("form").unwrap();
        assert!(html.starts_with("<table>"));
        assert_eq!(html.matches("<tr>").count(), 8);
    }

    #[test]
    fn test_mount_replaces_prior_content() {
        let mut doc = MemoryDocument::new().with_element("form");
        {
            let mut element = doc.element_by_id("form").unwrap().unwrap();
            element.set_inner_html("<p>old</p>".into());
        }
        mount(&mut doc, &Catalog::contact_form()).unwrap();
        assert!(!doc.inner_html("form").unwrap().contains("old"));
    }

    #[test]
    fn test_mount_without_container_fails() {
        let mut doc = MemoryDocument::new().with_element("other");
        let err = mount(&mut doc, &Catalog::contact_form()).unwrap_err();
        assert!(matches!(err, RenderError::MountPointNotFound { ref id } if id == "form"));
        assert_eq!(doc.inner_html("other"), Some(""));
    }

    #[test]
    fn test_mount_to_custom_id() {
        let mut doc = MemoryDocument::new().with_element("contact");
        mount_form(&mut doc, "contact", &Catalog::contact_form()).unwrap();
        assert!(doc.inner_html("contact").unwrap().contains("<table>"));
    }

    #[test]
    fn test_mount_twice_is_idempotent() {
        let catalog = Catalog::contact_form();
        let mut doc = MemoryDocument::new().with_element("form");
        mount(&mut doc, &catalog).unwrap();
        let first = doc.inner_html("form").unwrap().to_string();
        mount(&mut doc, &catalog).unwrap();
        assert_eq!(doc.inner_html("form").unwrap(), first);
    }
}
