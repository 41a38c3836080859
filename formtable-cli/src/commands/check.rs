//! `formtable check` - validate a catalog and list its fields.

use std::io::Write;

use formtable_fields::Catalog;

use crate::error::{CliError, Result};

/// One line per field: position, name, kind, option count and label.
pub fn summarize(catalog: &Catalog) -> String {
    let mut lines = Vec::with_capacity(catalog.len() + 1);
    for (i, field) in catalog.iter().enumerate() {
        let options = field
            .option_count()
            .map(|n| format!(" [{n} options]"))
            .unwrap_or_default();
        lines.push(format!(
            "{:>2}. {} ({}){} {}",
            i + 1,
            field.name(),
            field.kind(),
            options,
            field.label()
        ));
    }
    lines.push(format!("{} fields OK", catalog.len()));
    lines.join("\n")
}

pub fn run_check(catalog: &Catalog, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", summarize(catalog)).map_err(|e| CliError::io("<stdout>", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_contact_form() {
        let summary = summarize(&Catalog::contact_form());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], " 1. name (text) お名前");
        assert_eq!(lines[4], " 5. contact (choice) [3 options] ご希望の返信方法");
        assert_eq!(lines[7], " 8. inquiry_detail (textarea) お問い合せ内容");
        assert_eq!(lines[8], "8 fields OK");
    }
}
