// src/specs/icons.rs
//! Scraping *spec* for the vscode-icons wiki lists (ListOfFiles / ListOfFolders).
//!
//! Page shape:
//! - The first `<table>` on the page; row 0 is the header.
//! - Column 0: icon name.
//! - Column 1: mixed content. Plain text is a `", "`-separated list of
//!   extensions, `<b>`/`<strong>` is a filename, `<code>` is a language id.
//!
//! Rows with fewer than two cells are skipped without complaint.

use scraper::Html;

use crate::config::consts::EXTENSION_SEP;
use crate::core::html::{self, ContentUnit, Row};
use crate::error::ScrapeError;
use crate::mapping::{IconEntry, IconMapping};
use crate::progress::Progress;

/// Parse a fetched page into a deduplicated mapping.
/// `source_url` is only used to label a `MissingTable` error.
pub fn parse_document(
    doc: &str,
    source_url: &str,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<IconMapping, ScrapeError> {
    let doc = Html::parse_document(doc);
    let rows = html::first_table_rows(&doc).ok_or_else(|| {
        loge!("No table in {source_url}");
        ScrapeError::MissingTable { source_url: source_url.to_string() }
    })?;
    Ok(build_mapping(&rows, progress))
}

/// Classify table rows into a mapping. Row 0 is always treated as the header.
pub fn build_mapping(rows: &[Row], mut progress: Option<&mut (dyn Progress + '_)>) -> IconMapping {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    let mut mapping = IconMapping::new();
    let mut skipped = 0usize;

    for (i, row) in rows.iter().enumerate().skip(1) {
        let [name_cell, content_cell, ..] = row.as_slice() else {
            logd!("Row {i}: {} cell(s), skipped", row.len());
            skipped += 1;
            continue;
        };

        let name = name_cell.text.trim();
        let entry = mapping.entry(name);
        for unit in &content_cell.units {
            if let Some(p) = progress.as_deref_mut() {
                p.fragment(name, unit);
            }
            classify_into(entry, unit);
        }
        if entry.is_empty() {
            logd!("Row {i}: {name} has no associations yet");
        }
    }

    mapping.dedup();
    logf!("Extracted {} icon(s) from {} row(s), {skipped} skipped", mapping.len(), rows.len().saturating_sub(1));
    mapping
}

/// Route one content unit into its category list. Empty text tokens are
/// dropped; bold and code text is kept as-is after trimming, even when empty.
pub fn classify_into(entry: &mut IconEntry, unit: &ContentUnit) {
    match unit {
        ContentUnit::Text(text) => entry.extensions.extend(
            text.split(EXTENSION_SEP)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        ),
        ContentUnit::Bold(text) => entry.filenames.push(text.trim().to_string()),
        ContentUnit::Code(text) => entry.language_ids.push(text.trim().to_string()),
    }
}
