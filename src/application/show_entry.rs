//! Show entry use case

use crate::domain::Entry;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::EntryStore;

/// Look up one entry by id
pub fn show_entry<'a, S: EntryStore>(store: &'a S, id: &str) -> Result<&'a Entry> {
    store
        .get(id)
        .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))
}
