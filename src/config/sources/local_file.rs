//! Local config file source: `.tagdex.toml` in the given directory

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".tagdex.toml";

pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

/// Add `<dir>/.tagdex.toml` to the builder; a missing file is skipped.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        File::from(local_config_path(dir))
            .format(FileFormat::Toml)
            .required(false),
    ))
}
