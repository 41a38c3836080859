//! Command implementations.

pub mod check;
pub mod mount;
pub mod render;

use std::path::PathBuf;

use formtable_config::{load_configuration, FormtableConfig};
use formtable_fields::Catalog;
use tracing::debug;

use crate::error::Result;

/// Load configuration and apply command line overrides on top of it.
pub fn resolve_config(catalog: Option<PathBuf>, mount_id: Option<String>) -> Result<FormtableConfig> {
    let mut config = load_configuration()?;
    apply_overrides(&mut config, catalog, mount_id);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(
    config: &mut FormtableConfig,
    catalog: Option<PathBuf>,
    mount_id: Option<String>,
) {
    if let Some(catalog) = catalog {
        config.catalog = Some(catalog);
    }
    if let Some(mount_id) = mount_id {
        config.mount_id = mount_id;
    }
}

/// The configured catalog file, or the built-in contact form.
pub async fn load_catalog(config: &FormtableConfig) -> Result<Catalog> {
    match &config.catalog {
        Some(path) => Ok(Catalog::load(path).await?),
        None => {
            debug!("using built-in contact form catalog");
            Ok(Catalog::contact_form())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let mut config = FormtableConfig::default();
        apply_overrides(
            &mut config,
            Some(PathBuf::from("c.yaml")),
            Some("contact".into()),
        );
        assert_eq!(config.catalog, Some(PathBuf::from("c.yaml")));
        assert_eq!(config.mount_id, "contact");
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut config = FormtableConfig {
            mount_id: "from_file".into(),
            catalog: Some(PathBuf::from("file.yaml")),
        };
        apply_overrides(&mut config, None, None);
        assert_eq!(config.mount_id, "from_file");
        assert_eq!(config.catalog, Some(PathBuf::from("file.yaml")));
    }

    #[tokio::test]
    async fn test_load_catalog_defaults_to_contact_form() {
        let catalog = load_catalog(&FormtableConfig::default()).await.unwrap();
        assert_eq!(catalog, Catalog::contact_form());
    }
}
