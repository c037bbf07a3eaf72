//! Export journal use case

use crate::error::Result;
use crate::infrastructure::{JournalDocument, JsonFileStore};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

/// Build the export document; also writes it to `path` when given
pub fn export_journal(
    store: &JsonFileStore,
    path: Option<&Path>,
    exported_at: DateTime<Utc>,
) -> Result<JournalDocument> {
    let document = store.to_document(exported_at);

    if let Some(path) = path {
        fs::write(path, serde_json::to_string_pretty(&document)?)?;
        info!(path = %path.display(), entries = document.entries.len(), "Exported journal");
    }

    Ok(document)
}
