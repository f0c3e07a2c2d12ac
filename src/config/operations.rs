//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PatchError, Result};
use crate::filter::FileFilter;
use std::path::Path;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".gitpatch.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PatchError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PatchError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `.gitpatch.yaml` in `dir` is
    /// used when present, otherwise the defaults.
    pub fn discover<P: AsRef<Path>>(explicit: Option<&Path>, dir: P) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PatchError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PatchError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values: every include/exclude entry must be a
    /// non-empty, valid glob.
    pub fn validate(&self) -> Result<()> {
        self.file_filter().map(|_| ()).map_err(|e| {
            PatchError::UserError(format!("config validation failed: {}", e))
        })
    }

    /// Build the file filter described by `include` and `exclude`.
    pub fn file_filter(&self) -> Result<FileFilter> {
        FileFilter::new(&self.include, &self.exclude)
    }
}
