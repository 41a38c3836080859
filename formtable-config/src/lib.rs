//! formtable configuration management using Figment
//!
//! Configuration is layered with a clear precedence ordering:
//! defaults → global file → project file → environment → CLI.
//!
//! # Configuration Files
//!
//! - Global: `~/.formtable/formtable.{toml,yaml,yml,json}`
//! - Project: `./.formtable/formtable.{toml,yaml,yml,json}`
//!
//! ```toml
//! mount_id = "form"
//! catalog = "contact.yaml"
//! ```
//!
//! # Environment Variables
//!
//! ```bash
//! export FORMTABLE_MOUNT_ID="contact"       # → mount_id
//! export FORMTABLE_CATALOG="contact.yaml"   # → catalog
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use formtable_config::load_configuration;
//!
//! let config = load_configuration()?;
//! println!("mounting into #{}", config.mount_id);
//! # Ok::<(), formtable_config::ConfigError>(())
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::{FormtableConfig, DEFAULT_MOUNT_ID};

/// Load configuration from the standard locations and the environment.
pub fn load_configuration() -> ConfigResult<FormtableConfig> {
    ConfigProvider::new().load()
}
