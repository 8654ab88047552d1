//! Identity and content hashing for indexed files.
//!
//! Both digests are BLAKE3, hex encoded (64 characters). They are used as
//! collision-resistant identifiers only: nothing in the index relies on them
//! resisting a deliberate attacker, and choosing BLAKE3 implies no security
//! guarantee.

/// Length of every digest produced by this module, in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Compute the path identity hash from the UTF-8 bytes of an absolute path.
pub fn hash_path(path: &str) -> String {
    hex::encode(blake3::hash(path.as_bytes()).as_bytes())
}

/// Compute the content hash of a file's complete byte content.
pub fn hash_content(content: &[u8]) -> String {
    hex::encode(blake3::hash(content).as_bytes())
}
