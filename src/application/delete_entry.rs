//! Delete entry use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::JsonFileStore;
use tracing::instrument;

/// Remove the entry with `id` and save; returns the removed entry
#[instrument(skip(store))]
pub fn delete_entry(store: &mut JsonFileStore, id: &str) -> Result<Entry> {
    let removed = store.remove(id)?;
    store.save()?;
    Ok(removed)
}
