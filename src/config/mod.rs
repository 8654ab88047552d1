//! Configuration
//!
//! Layered configuration for the index: built-in defaults, the global config
//! file, a `.tagdex.toml` next to the index root, then `TAGDEX_*` environment
//! variables. CLI flags are applied on top by the caller.

pub mod facade;
pub mod index;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use index::IndexConfig;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level tagdex configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagdexConfig {
    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
