//! Add entry use case

use crate::domain::entry::parse_entry_date;
use crate::domain::{Entry, Mood};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EntryStore, JsonFileStore};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::str::FromStr;
use tracing::instrument;

/// Raw form input for a new entry
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: String,
    pub title: String,
    pub content: String,
    pub mood: String,
}

impl NewEntry {
    /// Form prefilled with an existing entry's stored values
    pub fn from_entry(entry: &Entry) -> Self {
        let mood = match &entry.mood {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        NewEntry {
            date: entry.date.clone(),
            title: entry.title.clone(),
            content: entry.content.clone(),
            mood,
        }
    }

    /// Validate the input and build an entry stamped with `created_at`
    pub fn into_entry(self, id: String, created_at: DateTime<Utc>) -> Result<Entry> {
        self.validated(id, created_at.to_rfc3339())
    }

    pub(crate) fn validated(self, id: String, created_at: String) -> Result<Entry> {
        let date = self.date.trim();
        if parse_entry_date(date).is_none() {
            return Err(MoodlogError::InvalidEntry(format!(
                "unrecognized date '{}'",
                self.date
            )));
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err(MoodlogError::InvalidEntry("title is empty".to_string()));
        }

        let content = self.content.trim();
        if content.is_empty() {
            return Err(MoodlogError::InvalidEntry("content is empty".to_string()));
        }

        let mood = Mood::from_str(&self.mood).map_err(MoodlogError::InvalidEntry)?;

        Ok(Entry::new(id, date, mood)
            .with_text(title, content)
            .with_created_at(created_at))
    }
}

/// Validate, prepend and save a new entry; returns the stored entry
#[instrument(skip(store, new_entry))]
pub fn add_entry(
    store: &mut JsonFileStore,
    new_entry: NewEntry,
    created_at: DateTime<Utc>,
) -> Result<Entry> {
    let id = unique_id(store, created_at);
    let entry = new_entry.into_entry(id, created_at)?;

    store.add(entry.clone());
    store.save()?;

    Ok(entry)
}

/// Millisecond timestamp id, bumped until it is unused
fn unique_id(store: &impl EntryStore, created_at: DateTime<Utc>) -> String {
    let mut millis = created_at.timestamp_millis();
    loop {
        let id = millis.to_string();
        if store.get(&id).is_none() {
            return id;
        }
        millis += 1;
    }
}
