//! Infrastructure layer - Journal storage and configuration

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{EntryStore, JournalDocument, JsonFileStore};
