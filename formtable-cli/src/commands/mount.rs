//! `formtable mount` - write the table into an HTML page file.

use std::path::{Path, PathBuf};

use formtable_fields::Catalog;
use formtable_render::{mount_form, HtmlPage};
use tokio::fs;
use tracing::{debug, info, warn};
use ulid::Ulid;

use crate::error::{CliError, Result};

/// Mount the catalog into page markup held in memory.
pub fn mount_into(source: String, id: &str, catalog: &Catalog) -> Result<String> {
    let mut page = HtmlPage::new(source);
    mount_form(&mut page, id, catalog)?;
    Ok(page.into_string())
}

/// Read `page`, mount into it, and write to `output` or back to `page`.
///
/// The page is only written once mounting has succeeded, so a missing
/// mount point leaves the file untouched.
pub async fn run_mount(
    page: &Path,
    output: Option<&Path>,
    id: &str,
    catalog: &Catalog,
) -> Result<PathBuf> {
    let source = fs::read_to_string(page)
        .await
        .map_err(|e| CliError::io(page, e))?;
    debug!(page = %page.display(), bytes = source.len(), "page read");

    let mounted = mount_into(source, id, catalog)?;

    let target = output.unwrap_or(page);
    atomic_write(target, mounted.as_bytes()).await?;
    info!(target = %target.display(), "page written");
    Ok(target.to_path_buf())
}

/// Write to a temp file then rename for atomic persistence.
async fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    fs::write(&tmp, data)
        .await
        .map_err(|e| CliError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path).await {
        if let Err(cleanup) = fs::remove_file(&tmp).await {
            warn!(tmp = %tmp.display(), error = %cleanup, "failed to remove temp file");
        }
        return Err(CliError::io(path, e));
    }
    Ok(())
}
