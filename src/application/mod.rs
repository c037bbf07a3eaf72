//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entry;
pub mod edit_entry;
pub mod export;
pub mod init;
pub mod insights;
pub mod list_entries;
pub mod show_entry;

pub use add_entry::{add_entry, NewEntry};
pub use delete_entry::delete_entry;
pub use edit_entry::{edit_entry, EntryChanges};
pub use export::export_journal;
pub use insights::{InsightsReport, InsightsService};
pub use list_entries::list_entries;
pub use show_entry::show_entry;
