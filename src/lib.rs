//! Tagdex: incremental tag index for a directory tree
//!
//! Walks a directory tree, identifies each regular file by a hash of its
//! absolute path, fingerprints its content, and reads tags from a leading
//! `<!-- ... -->` TOML block. A sled store is reconciled against every walk
//! (insert new files, update changed ones, prune vanished ones) and can be
//! searched by tag substring.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod metadata;
pub mod query;
pub mod session;
pub mod store;
pub mod sync;
pub mod tooling;
pub mod tree;
pub mod types;
