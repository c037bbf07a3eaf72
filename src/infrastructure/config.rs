//! Configuration management

use crate::domain::analytics::DEFAULT_MIN_ENTRIES_FOR_INSIGHTS;
use crate::domain::{Granularity, TrendPeriod};
use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding moodlog metadata inside a journal root
pub const MOODLOG_DIR: &str = ".moodlog";

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_JOURNAL_FILE: &str = "journal.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Journal document, relative to the journal root unless absolute
    #[serde(default = "default_journal_file")]
    pub journal_file: PathBuf,
    #[serde(default)]
    pub default_period: TrendPeriod,
    #[serde(default)]
    pub default_granularity: Granularity,
    #[serde(default = "default_min_entries")]
    pub min_entries_for_insights: usize,
    pub created: DateTime<Utc>,
}

fn default_journal_file() -> PathBuf {
    PathBuf::from(DEFAULT_JOURNAL_FILE)
}

fn default_min_entries() -> usize {
    DEFAULT_MIN_ENTRIES_FOR_INSIGHTS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_file: default_journal_file(),
            default_period: TrendPeriod::default(),
            default_granularity: Granularity::default(),
            min_entries_for_insights: default_min_entries(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(MOODLOG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(MOODLOG_DIR);
        let config_path = moodlog_dir.join(CONFIG_FILE);

        // Ensure .moodlog directory exists
        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute location of the journal document for a journal root
    pub fn journal_path(&self, root: &Path) -> PathBuf {
        if self.journal_file.is_absolute() {
            self.journal_file.clone()
        } else {
            root.join(&self.journal_file)
        }
    }
}
