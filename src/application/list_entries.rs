//! List entries use case

use crate::domain::{Entry, EntryFilter};
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;

/// Entries matching `filter`, in journal order
pub fn list_entries<'a, S: EntryStore>(
    store: &'a S,
    filter: &EntryFilter,
    today: NaiveDate,
) -> Vec<&'a Entry> {
    filter.apply(store.entries(), today)
}
