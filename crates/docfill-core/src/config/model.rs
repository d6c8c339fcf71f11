use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::{
    DEFAULT_MEDIA_ROOT, DEFAULT_PLACEHOLDER, GENERATED_SUBDIR, TEMPLATES_SUBDIR,
};
use crate::error::{DocfillError, Result};

/// docfill.toml schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding `templates/` and `generated/`
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
        }
    }
}

fn default_media_root() -> PathBuf {
    PathBuf::from(DEFAULT_MEDIA_ROOT)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Substituted for tokens whose key has no attribute value
    #[serde(default = "default_placeholder")]
    pub default_placeholder: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            default_placeholder: default_placeholder(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Config {
    /// Read and parse a docfill.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DocfillError::ConfigParseError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            DocfillError::ConfigParseError(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load if present, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Directory holding uploaded template documents
    pub fn templates_dir(&self) -> PathBuf {
        self.storage.media_root.join(TEMPLATES_SUBDIR)
    }

    /// Directory receiving generated documents
    pub fn generated_dir(&self) -> PathBuf {
        self.storage.media_root.join(GENERATED_SUBDIR)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.media_root.as_os_str().is_empty() {
            return Err(DocfillError::ConfigInvalidValue {
                field: "storage.media_root".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
