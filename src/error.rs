//! Error types for the tagdex index.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the leading metadata block of a file.
///
/// All variants are soft: the walker logs them and indexes the file with
/// an empty tag set.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("file content is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("metadata block is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("metadata.tags must be an array of strings: {0}")]
    InvalidTags(String),
}

/// Fatal failures of a tree walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("index root {path:?} is not an accessible directory: {source}")]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Store-level failures. Any of these aborts the current reconciliation cycle.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    #[error("record encoding error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("corrupt record under key {key}: {reason}")]
    CorruptRecord { key: String, reason: String },
}

/// Errors surfaced at the session and CLI boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Walk error: {0}")]
    WalkError(#[from] WalkError),

    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
