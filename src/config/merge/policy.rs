//! Built-in defaults, the lowest layer of every config load.

use crate::config::index::DEFAULT_ROOT;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("index.root", DEFAULT_ROOT)?
        .set_default("index.follow_symlinks", false)?
        .set_default("index.max_depth", 0)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)
}
