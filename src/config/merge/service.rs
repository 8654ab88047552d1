//! MergeService: orchestrates sources, applies merge policy, deserializes to TagdexConfig.

use crate::config::sources::{environment, global_file, local_file};
use crate::config::TagdexConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;

use super::policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources.
    /// Precedence: defaults (lowest) -> global file -> `<dir>/.tagdex.toml` -> environment (highest).
    pub fn load(dir: &Path) -> Result<TagdexConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    ///
    /// Unlike the standard sources, the file must exist.
    pub fn load_from_file(path: &Path) -> Result<TagdexConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
