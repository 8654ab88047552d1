//! Metadata extraction from a file's leading comment block.
//!
//! A file carries metadata when it starts with a block like:
//!
//! ```text
//! <!--
//! [metadata]
//! tags = ["holiday", "beach"]
//! -->
//! ```
//!
//! The block must be the very first thing in the file. Its body is TOML and
//! only `metadata.tags` is read.

use crate::error::MetadataError;

/// Opening marker of the metadata block.
pub const OPEN_MARKER: &str = "<!--";
/// Closing marker of the metadata block.
pub const CLOSE_MARKER: &str = "-->";

/// Extract the trimmed `metadata.tags` list from raw file bytes.
///
/// Returns an empty list when there is no leading block, no `metadata`
/// table, or no `tags` key.
pub fn extract(content: &[u8]) -> Result<Vec<String>, MetadataError> {
    let text = std::str::from_utf8(content)?;
    let Some(body) = leading_block(text) else {
        return Ok(Vec::new());
    };

    let table: toml::Table = toml::from_str(body.trim())?;
    let Some(metadata) = table.get("metadata") else {
        return Ok(Vec::new());
    };
    let Some(tags) = metadata.get("tags") else {
        return Ok(Vec::new());
    };

    let items = tags
        .as_array()
        .ok_or_else(|| MetadataError::InvalidTags(format!("found {}", tags.type_str())))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(|s| s.trim().to_string())
                .ok_or_else(|| MetadataError::InvalidTags(format!("found {} item", item.type_str())))
        })
        .collect()
}

/// Body between the markers, if the text opens with a complete block.
fn leading_block(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(OPEN_MARKER)?;
    let end = rest.find(CLOSE_MARKER)?;
    Some(&rest[..end])
}
