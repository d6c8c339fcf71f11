use std::path::{Path, PathBuf};

use anyhow::Result;
use docfill_core::config::consts::CONFIG_FILE_NAME;
use docfill_core::config::Config;

/// Shared command context: resolved configuration
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// An explicit --config path must load; the implicit ./docfill.toml
    /// falls back to defaults when absent.
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(&path)?,
            None => Config::load_or_default(Path::new(CONFIG_FILE_NAME)),
        };
        Ok(Self { config, verbose })
    }
}
