//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::default();
    repo.save_config(&config)?;

    // Write an empty journal document so the file exists from the start
    let store = repo.open_store(&config)?;
    if !store.path().exists() {
        store.save()?;
    }

    println!("Initialized moodlog journal at {}", path.display());
    println!("Journal file: {}", config.journal_file.display());

    Ok(())
}
