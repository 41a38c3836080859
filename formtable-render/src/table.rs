//! Table assembly

use formtable_fields::Catalog;
use tracing::debug;

use crate::rows::render_row;

/// Render every field of `catalog`, in order, inside one `<table>`.
///
/// Rows are concatenated with no separator. The output depends only on the
/// catalog, so rendering the same catalog twice yields identical markup.
pub fn render_table(catalog: &Catalog) -> String {
    let rows: String = catalog.iter().map(render_row).collect();
    debug!(rows = catalog.len(), bytes = rows.len(), "table rendered");
    format!("<table>{rows}</table>")
}
