//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::TagdexConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment.
    ///
    /// `dir` is where a local `.tagdex.toml` is looked up.
    pub fn load(dir: &Path) -> Result<TagdexConfig, ConfigError> {
        MergeService::load(dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<TagdexConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> TagdexConfig {
        TagdexConfig::default()
    }
}
