//! Configuration values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

pub use formtable_render::DEFAULT_MOUNT_ID;

/// Settings for rendering and mounting the form.
///
/// ```toml
/// mount_id = "form"
/// catalog = "contact.yaml"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormtableConfig {
    /// Id of the container element in the host page
    pub mount_id: String,
    /// External catalog file; the built-in contact form is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for FormtableConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            catalog: None,
        }
    }
}

impl FormtableConfig {
    /// Reject values that cannot work at mount time.
    pub fn validate(&self) -> ConfigResult<()> {
        let id = self.mount_id.as_str();
        if id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "mount_id".into(),
                message: "must not be empty".into(),
            });
        }
        if id.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                key: "mount_id".into(),
                message: format!("'{id}' contains whitespace"),
            });
        }
        Ok(())
    }
}
