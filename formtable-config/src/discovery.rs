//! Configuration file discovery
//!
//! Finds `formtable.{toml,yaml,yml,json}` in the global (`~/.formtable/`) and
//! project (`./.formtable/`) directories and orders them for merging.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Directory name searched under the home and current directories.
pub const CONFIG_DIR_NAME: &str = ".formtable";

/// Accepted configuration file names.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "formtable.toml",
    "formtable.yaml",
    "formtable.yml",
    "formtable.json",
];

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
    /// Higher values take precedence
    pub priority: u8,
}

impl ConfigFile {
    pub fn new(path: PathBuf, format: ConfigFormat, scope: ConfigScope) -> Self {
        let priority = scope.priority();
        Self {
            path,
            format,
            scope,
            priority,
        }
    }
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    /// `.yaml` or `.yml`
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where a configuration file was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `~/.formtable/`
    Global,
    /// `./.formtable/`
    Project,
}

impl ConfigScope {
    /// Priority value for this scope (higher values override lower ones)
    pub fn priority(self) -> u8 {
        match self {
            Self::Global => 10,
            Self::Project => 20,
        }
    }
}

/// Finds configuration files in the global and project directories.
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Resolve `./.formtable/` and `~/.formtable/` now.
    pub fn new() -> Self {
        Self {
            project_dir: Self::resolve_project_dir(),
            global_dir: Self::resolve_global_dir(),
        }
    }

    /// Use explicit directories instead of the current and home directories.
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// Discover all configuration files, lowest priority first so later
    /// files override earlier ones when merged.
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let mut files = Vec::new();

        if let Some(ref global_dir) = self.global_dir {
            files.extend(self.search_directory(global_dir, ConfigScope::Global));
        }
        if let Some(ref project_dir) = self.project_dir {
            files.extend(self.search_directory(project_dir, ConfigScope::Project));
        }

        // Stable sort keeps file-name order within a scope
        files.sort_by_key(|f| f.priority);

        debug!("Discovered {} configuration files", files.len());
        for file in &files {
            trace!("Found config: {} ({:?})", file.path.display(), file.format);
        }

        files
    }

    fn search_directory(&self, dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            debug!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }

        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|candidate| candidate.is_file())
            .filter_map(|candidate| Self::classify_file(&candidate, scope))
            .collect()
    }

    fn classify_file(path: &Path, scope: ConfigScope) -> Option<ConfigFile> {
        let filename = path.file_name()?.to_str()?;
        if !CONFIG_FILE_NAMES.contains(&filename) {
            return None;
        }
        let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
        Some(ConfigFile::new(path.to_path_buf(), format, scope))
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        let dir = std::env::current_dir().ok()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        let dir = dirs::home_dir()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }
}

impl Default for FileDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
