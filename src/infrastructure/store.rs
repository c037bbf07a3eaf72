//! JSON journal document store

use crate::domain::Entry;
use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_JOURNAL_NAME: &str = "Mindful Journal";
pub const DOCUMENT_VERSION: &str = "1.0";

/// Read access to the journal entries
pub trait EntryStore {
    /// All entries, newest first by convention
    fn entries(&self) -> &[Entry];

    fn get(&self, id: &str) -> Option<&Entry> {
        self.entries().iter().find(|e| e.id == id)
    }
}

/// On-disk journal format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDocument {
    #[serde(default = "default_journal_name")]
    pub journal_name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub exported_at: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

fn default_journal_name() -> String {
    DEFAULT_JOURNAL_NAME.to_string()
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl JournalDocument {
    /// Parse a journal document, also accepting a bare array of entries
    pub fn parse(contents: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(contents)?;
        match value {
            Value::Array(_) => Ok(JournalDocument {
                journal_name: default_journal_name(),
                version: default_version(),
                exported_at: String::new(),
                entries: serde_json::from_value(value)?,
            }),
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Err(MoodlogError::Config(
                "Journal file must contain a JSON object or array".to_string(),
            )),
        }
    }
}

/// Journal stored as a single JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    journal_name: String,
    entries: Vec<Entry>,
}

impl JsonFileStore {
    /// Open the journal at `path`; a missing file is an empty journal
    pub fn open(path: &Path) -> Result<Self> {
        let document = match fs::read_to_string(path) {
            Ok(contents) if contents.trim().is_empty() => None,
            Ok(contents) => Some(JournalDocument::parse(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(MoodlogError::Io(e)),
        };

        let (journal_name, entries) = match document {
            Some(doc) => (doc.journal_name, doc.entries),
            None => (default_journal_name(), Vec::new()),
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened journal");

        Ok(JsonFileStore {
            path: path.to_path_buf(),
            journal_name,
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add an entry at the front (newest first)
    pub fn add(&mut self, entry: Entry) {
        self.entries.insert(0, entry);
    }

    /// Replace the entry with `id`, keeping its position and id
    pub fn update(&mut self, id: &str, mut entry: Entry) -> Result<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))?;
        entry.id = id.to_string();
        *slot = entry;
        Ok(())
    }

    /// Remove and return the entry with `id`
    pub fn remove(&mut self, id: &str) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))?;
        Ok(self.entries.remove(index))
    }

    pub fn to_document(&self, exported_at: DateTime<Utc>) -> JournalDocument {
        JournalDocument {
            journal_name: self.journal_name.clone(),
            version: DOCUMENT_VERSION.to_string(),
            exported_at: exported_at.to_rfc3339(),
            entries: self.entries.clone(),
        }
    }

    /// Write the journal back to disk.
    ///
    /// Writes to a temp file in the same directory, then renames it into place.
    pub fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.to_document(Utc::now()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.moodlog-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("journal.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        // rename replaces the target atomically except on Windows
        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;

        info!(path = %self.path.display(), entries = self.entries.len(), "Saved journal");
        Ok(())
    }
}

impl EntryStore for JsonFileStore {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
