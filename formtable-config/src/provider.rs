//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    types::FormtableConfig,
    ConfigResult,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

/// Prefix for environment variable overrides, e.g. `FORMTABLE_MOUNT_ID`.
pub const ENV_PREFIX: &str = "FORMTABLE_";

/// Loads [`FormtableConfig`] from all sources.
///
/// Sources in precedence order (later sources override earlier ones):
/// 1. Built-in defaults
/// 2. Global config file (`~/.formtable/`)
/// 3. Project config file (`./.formtable/`)
/// 4. `FORMTABLE_` environment variables
///
/// Command line flags are applied by the caller on top of the result.
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    /// Provider over the standard global and project directories
    pub fn new() -> Self {
        Self {
            discovery: FileDiscovery::new(),
        }
    }

    /// Provider over a custom file discovery
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load and validate the configuration
    pub fn load(&self) -> ConfigResult<FormtableConfig> {
        debug!("Loading formtable configuration");

        let config: FormtableConfig = self.build_figment().extract()?;
        config.validate()?;

        debug!(
            mount_id = %config.mount_id,
            catalog = ?config.catalog,
            "configuration loaded"
        );
        Ok(config)
    }

    fn build_figment(&self) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(FormtableConfig::default()))
            .merge(self.load_discovered_config_files())
            .merge(Env::prefixed(ENV_PREFIX))
    }

    fn load_discovered_config_files(&self) -> Figment {
        self.discovery
            .discover_all()
            .iter()
            .fold(Figment::new(), |figment, file| {
                trace!(
                    "Loading config file: {} ({:?})",
                    file.path.display(),
                    file.format
                );
                figment.merge(Self::load_config_file(file))
            })
    }

    fn load_config_file(config_file: &ConfigFile) -> Figment {
        let path = &config_file.path;
        match config_file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use serial_test::serial;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn provider_for(project: Option<PathBuf>, global: Option<PathBuf>) -> ConfigProvider {
        ConfigProvider::with_discovery(FileDiscovery::with_directories(project, global))
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let config = provider_for(None, None).load().unwrap();
        assert_eq!(config, FormtableConfig::default());
    }

    #[test]
    #[serial]
    fn test_project_toml_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("formtable.toml"),
            r#"
mount_id = "contact"
catalog = "forms/contact.yaml"
"#,
        )
        .unwrap();

        let config = provider_for(Some(temp_dir.path().to_path_buf()), None)
            .load()
            .unwrap();
        assert_eq!(config.mount_id, "contact");
        assert_eq!(config.catalog, Some(PathBuf::from("forms/contact.yaml")));
    }

    #[test]
    #[serial]
    fn test_project_overrides_global() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global");
        let project = temp_dir.path().join("project");
        fs::create_dir_all(&global).unwrap();
        fs::create_dir_all(&project).unwrap();
        fs::write(
            global.join("formtable.yaml"),
            "mount_id: global\ncatalog: global.yaml\n",
        )
        .unwrap();
        fs::write(project.join("formtable.json"), r#"{"mount_id": "project"}"#).unwrap();

        let config = provider_for(Some(project), Some(global)).load().unwrap();
        assert_eq!(config.mount_id, "project");
        assert_eq!(config.catalog, Some(PathBuf::from("global.yaml")));
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("formtable.toml"), "mount_id = \"file\"").unwrap();

        std::env::set_var("FORMTABLE_MOUNT_ID", "from_env");
        let result = provider_for(Some(temp_dir.path().to_path_buf()), None).load();
        std::env::remove_var("FORMTABLE_MOUNT_ID");

        assert_eq!(result.unwrap().mount_id, "from_env");
    }

    #[test]
    #[serial]
    fn test_empty_mount_id_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("formtable.toml"), "mount_id = \"\"").unwrap();

        let err = provider_for(Some(temp_dir.path().to_path_buf()), None)
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("formtable.toml"), "mount_id = [").unwrap();

        let err = provider_for(Some(temp_dir.path().to_path_buf()), None)
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
