//! Filesystem side of the index: hashing and walking.

pub mod hasher;
pub mod walker;
