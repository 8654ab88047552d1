//! IndexConfig and path resolution for the index root and store.

use crate::config::xdg;
use crate::error::ApiError;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_ROOT: &str = "~/diginoz/root";

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

/// Index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Directory tree to index; a leading `~` is expanded
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Store directory; `None` means `$XDG_DATA_HOME/tagdex/store`
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Follow symbolic links during the walk
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum walk depth below the root (0 = unlimited)
    #[serde(default)]
    pub max_depth: usize,
}

impl IndexConfig {
    /// Root directory with `~` expanded.
    pub fn resolve_root(&self) -> Result<PathBuf, ApiError> {
        expand_home(&self.root)
    }

    /// Store directory, falling back to the XDG data directory.
    pub fn resolve_store_path(&self) -> Result<PathBuf, ApiError> {
        match &self.store_path {
            Some(path) if !path.as_os_str().is_empty() => expand_home(path),
            _ => Ok(xdg::data_dir()?.join("store")),
        }
    }

    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            max_depth: (self.max_depth > 0).then_some(self.max_depth),
            excluded: Vec::new(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            store_path: None,
            follow_symlinks: false,
            max_depth: 0,
        }
    }
}

fn expand_home(path: &Path) -> Result<PathBuf, ApiError> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let dirs = directories::BaseDirs::new().ok_or_else(|| {
        ApiError::ConfigError("Could not determine home directory to expand '~'".to_string())
    })?;
    Ok(dirs.home_dir().join(rest))
}
