//! Text and JSON rendering of sync reports, search results and listings.

use crate::error::ApiError;
use crate::query::TagMatch;
use crate::sync::SyncReport;
use crate::types::StoredRecord;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// `file://` link for a stored path, with Windows separators normalised.
pub fn file_url(path: &str) -> String {
    format!("file://{}", path.replace('\\', "/"))
}

pub fn format_sync_report_text(report: &SyncReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Sync")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Scanned", "Inserted", "Updated", "Unchanged", "Pruned", "Skipped"]);
    table.add_row(vec![
        report.scanned.to_string(),
        report.inserted.to_string(),
        report.updated.to_string(),
        report.unchanged.to_string(),
        report.pruned.to_string(),
        report.skipped.to_string(),
    ]);
    out.push_str(&format!("{}\n", table));
    if !report.skipped_entries.is_empty() {
        out.push_str(&format!("\n{}\n", format_section_heading("Skipped")));
        for entry in &report.skipped_entries {
            out.push_str(&format!("  {}: {}\n", entry.path.display(), entry.reason));
        }
    }
    out
}

/// One line per match: `file://<path> <tags>`, blank line between matches.
pub fn format_matches_text(matches: &[TagMatch]) -> String {
    if matches.is_empty() {
        return "No files match.".to_string();
    }
    matches
        .iter()
        .map(|m| format!("{} <{}>\n", file_url(&m.path), m.tags))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_records_text(records: &[StoredRecord]) -> String {
    if records.is_empty() {
        return "Index is empty.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Path hash", "File hash", "Tags"]);
    for record in records {
        table.add_row(vec![
            record.path.clone(),
            short_hash(&record.path_hash),
            short_hash(&record.file_hash),
            record.tags.clone(),
        ]);
    }
    format!("{}\n", table)
}

pub fn format_sync_report_json(report: &SyncReport) -> Result<String, ApiError> {
    to_json(&json!({ "sync": report }))
}

pub fn format_search_json(report: Option<&SyncReport>, matches: &[TagMatch]) -> Result<String, ApiError> {
    to_json(&json!({
        "sync": report,
        "matches": matches,
        "total": matches.len(),
    }))
}

pub fn format_records_json(records: &[StoredRecord]) -> Result<String, ApiError> {
    to_json(&json!({
        "records": records,
        "total": records.len(),
    }))
}

fn to_json(value: &serde_json::Value) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn short_hash(hash: &str) -> String {
    hash[..hash.len().min(12)].to_string()
}
