//! Export formatting
//!
//! Two boundary-facing renderings of a record: plain text for the clipboard
//! ("label: value" lines in table order) and pretty-printed JSON for the
//! download. The browser glue that actually writes the clipboard or offers
//! the file lives in the WASM crate.

use crate::error::Result;
use crate::fields::FIELDS;
use crate::types::DocumentData;

/// Fixed name of the downloaded JSON file.
pub const DOWNLOAD_FILE_NAME: &str = "extracted-document-data.json";

/// Clipboard rendering: one "label: value" line per field, in table order.
/// Empty fields produce a line with an empty value so the 14 lines always
/// reconstruct the full record.
pub fn clipboard_text(record: &DocumentData) -> String {
    FIELDS
        .iter()
        .map(|field| {
            format!(
                "{}: {}",
                field.label,
                record.value(field.key).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Download rendering: pretty-printed JSON with camelCase keys.
pub fn json_pretty(record: &DocumentData) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}
