//! `formtable render` - print the table markup.

use std::io::Write;

use formtable_fields::Catalog;
use formtable_render::render_table;

use crate::error::{CliError, Result};

/// Write the rendered table, followed by a newline, to `out`.
pub fn run_render(catalog: &Catalog, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", render_table(catalog)).map_err(|e| CliError::io("<stdout>", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_table() {
        let mut buf = Vec::new();
        run_render(&Catalog::contact_form(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("<table>"));
        assert!(out.ends_with("</table>\n"));
    }
}
