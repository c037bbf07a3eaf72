//! Edit entry use case

use crate::application::NewEntry;
use crate::domain::Entry;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EntryStore, JsonFileStore};
use tracing::instrument;

/// Fields to change on an existing entry; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub date: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<String>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.title.is_none() && self.content.is_none() && self.mood.is_none()
    }
}

/// Apply `changes` to the entry with `id` and save.
///
/// The merged entry goes through the same validation as a new one. Its
/// id, position and creation time are kept.
#[instrument(skip(store, changes))]
pub fn edit_entry(store: &mut JsonFileStore, id: &str, changes: EntryChanges) -> Result<Entry> {
    if changes.is_empty() {
        return Err(MoodlogError::InvalidArgument(
            "Nothing to change: pass at least one of --date, --title, --content, --mood"
                .to_string(),
        ));
    }

    let current = store
        .get(id)
        .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))?;
    let created_at = current.created_at.clone();

    let mut form = NewEntry::from_entry(current);
    if let Some(date) = changes.date {
        form.date = date;
    }
    if let Some(title) = changes.title {
        form.title = title;
    }
    if let Some(content) = changes.content {
        form.content = content;
    }
    if let Some(mood) = changes.mood {
        form.mood = mood;
    }

    let entry = form.validated(id.to_string(), created_at)?;
    store.update(id, entry.clone())?;
    store.save()?;

    Ok(entry)
}
