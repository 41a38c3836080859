//! Markup escaping for text embedded in the form table
//!
//! Every label, placeholder, option text, field name and type string passes
//! through [`escape_html`] before it is placed in markup. The escaper covers
//! the characters that can end a quoted attribute or open a tag.

use std::borrow::Cow;

/// Characters that are replaced, in the order they are documented.
pub const SPECIAL_CHARS: [char; 6] = ['\'', '"', '`', '<', '>', '&'];

/// Entity reference for a special character, or `None` if `ch` is safe.
pub fn entity_for(ch: char) -> Option<&'static str> {
    match ch {
        '\'' => Some("&#x27;"),
        '"' => Some("&quot;"),
        '`' => Some("&#x60;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        _ => None,
    }
}

/// Returns true if `raw` contains any character that [`escape_html`] rewrites.
pub fn needs_escaping(raw: &str) -> bool {
    raw.contains(|ch: char| entity_for(ch).is_some())
}

/// Escape `raw` for use as HTML text or a quoted attribute value.
///
/// Every occurrence of each special character is replaced in a single
/// left-to-right pass, so entities produced for one character are never
/// re-escaped by another. Input without special characters is returned
/// borrowed.
///
/// ```
/// use formtable_render::escape_html;
///
/// assert_eq!(escape_html("<a>&'\"`"), "&lt;a&gt;&amp;&#x27;&quot;&#x60;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !needs_escaping(raw) {
        return Cow::Borrowed(raw);
    }

    let mut output = String::with_capacity(raw.len() + raw.len() / 2);
    for ch in raw.chars() {
        match entity_for(ch) {
            Some(entity) => output.push_str(entity),
            None => output.push(ch),
        }
    }
    Cow::Owned(output)
}
