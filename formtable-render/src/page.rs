//! HTML page source as a host document
//!
//! [`HtmlPage`] holds a page as text and finds a container by its `id`
//! attribute. The content between the container's start tag and its matching
//! end tag is what gets replaced; everything else in the page is preserved
//! byte for byte.
//!
//! The page is read as a stream of tokens: comments, `<script>` and
//! `<style>` blocks, start tags and end tags. Comments and raw-text blocks
//! are opaque, so markup inside them never counts as an element. Quoted
//! attribute values are consumed whole, so a `>` inside one does not end
//! the tag.

use std::ops::Range;
use std::sync::OnceLock;

use regex::{CaptureMatches, Regex};
use tracing::trace;

use crate::error::{RenderError, Result};
use crate::mount::{HostDocument, MountTarget};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
static ATTRIBUTE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Page tokens, earliest first. Only tags carry a `tag` group.
fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"(?is)",
            r"<!--.*?(?:-->|\z)",
            r#"|<script(?:[\s/](?:"[^"]*"|'[^']*'|[^'">])*)?>.*?(?:</script\s*>|\z)"#,
            r#"|<style(?:[\s/](?:"[^"]*"|'[^']*'|[^'">])*)?>.*?(?:</style\s*>|\z)"#,
            r#"|<(?P<close>/)?(?P<tag>[a-z][a-z0-9-]*)(?P<attrs>(?:[\s/](?:"[^"]*"|'[^']*'|[^'">])*)?)>"#,
        ))
        .expect("Invalid page token regex")
    })
}

/// One attribute: name, then an optional double-quoted, single-quoted or bare value.
fn attribute_regex() -> &'static Regex {
    ATTRIBUTE_REGEX.get_or_init(|| {
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
            .expect("Invalid attribute regex")
    })
}

/// A page held as HTML text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    source: String,
}

impl HtmlPage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The page markup, including any mounted content.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    /// Byte range of the content of the element with the given id.
    fn content_range(&self, id: &str) -> Result<Option<Range<usize>>> {
        let mut tokens = token_regex().captures_iter(&self.source);
        while let Some(caps) = tokens.next() {
            let Some(name) = caps.name("tag") else {
                continue;
            };
            if caps.name("close").is_some() {
                continue;
            }
            let attrs = caps.name("attrs").map_or("", |m| m.as_str());
            if attribute_id(attrs) != Some(id) {
                continue;
            }

            let tag = name.as_str().to_ascii_lowercase();
            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return Err(RenderError::InvalidMountPoint {
                    id: id.to_string(),
                    reason: format!("<{tag}> is a void element"),
                });
            }
            if is_self_closing(attrs) {
                return Err(RenderError::InvalidMountPoint {
                    id: id.to_string(),
                    reason: format!("<{tag}> is self-closing"),
                });
            }

            let start = caps.get(0).map_or(0, |m| m.end());
            let end = matching_end_tag(&tag, tokens).ok_or_else(|| {
                RenderError::InvalidMountPoint {
                    id: id.to_string(),
                    reason: format!("<{tag}> has no closing tag"),
                }
            })?;
            trace!(id, tag = %tag, start, end, "mount point located");
            return Ok(Some(start..end));
        }
        Ok(None)
    }
}

/// Start offset of the end tag closing an element whose start tag was the
/// last token taken from `tokens`.
fn matching_end_tag(tag: &str, tokens: CaptureMatches<'_, '_>) -> Option<usize> {
    let mut depth = 1usize;
    for caps in tokens {
        let Some(name) = caps.name("tag") else {
            continue;
        };
        if !name.as_str().eq_ignore_ascii_case(tag) {
            continue;
        }
        if caps.name("close").is_some() {
            depth -= 1;
            if depth == 0 {
                return caps.get(0).map(|m| m.start());
            }
        } else if !is_self_closing(caps.name("attrs").map_or("", |m| m.as_str())) {
            depth += 1;
        }
    }
    None
}

fn is_self_closing(attrs: &str) -> bool {
    attrs.trim_end().ends_with('/')
}

/// Value of the `id` attribute in a start tag's attribute text.
fn attribute_id(attrs: &str) -> Option<&str> {
    attribute_regex()
        .captures_iter(attrs)
        .find(|caps| caps[1].eq_ignore_ascii_case("id"))
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4)))
        .map(|m| m.as_str())
}

/// Handle to a located container in an [`HtmlPage`].
pub struct PageElement<'a> {
    page: &'a mut HtmlPage,
    content: Range<usize>,
}

impl MountTarget for PageElement<'_> {
    fn set_inner_html(&mut self, markup: String) {
        let end = self.content.start + markup.len();
        self.page.source.replace_range(self.content.clone(), &markup);
        self.content = self.content.start..end;
    }
}

impl HostDocument for HtmlPage {
    type Element<'a> = PageElement<'a>;

    fn element_by_id(&mut self, id: &str) -> Result<Option<PageElement<'_>>> {
        let Some(content) = self.content_range(id)? else {
            return Ok(None);
        };
        Ok(Some(PageElement {
            page: self,
            content,
        }))
    }
}
