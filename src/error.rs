//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No entry with id '{0}'")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Journal file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidEntry(_) => 3,
            MoodlogError::InvalidArgument(_) => 4,
            MoodlogError::EntryNotFound(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidEntry(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Entries need:\n\
                    • a date: YYYY-MM-DD (e.g., 2025-01-17)\n\
                    • a non-empty title and content\n\
                    • a mood from 1 to 5 (1=Angry, 2=Sad, 3=Neutral, 4=Happy, 5=Very Happy)\n\n\
                    Example:\n\
                    moodlog add --date 2025-01-17 --title 'Walk' --content 'Sunny day' --mood 4",
                    msg
                )
            }
            MoodlogError::InvalidArgument(msg) => {
                if msg.contains("period") {
                    format!(
                        "{}\n\n\
                        Valid periods: hour, day, week\n\
                        Example: moodlog trend --period day",
                        msg
                    )
                } else if msg.contains("granularity") {
                    format!(
                        "{}\n\n\
                        Valid groupings: weekly, monthly\n\
                        Example: moodlog groups --by monthly",
                        msg
                    )
                } else if msg.contains("range") {
                    format!(
                        "{}\n\n\
                        Valid ranges: all, today, week, month, YYYY-MM-DD\n\
                        Example: moodlog list --range 2025-01-17",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            MoodlogError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Run 'moodlog list' to see entry ids",
                    id
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
