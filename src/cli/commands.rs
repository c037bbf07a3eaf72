//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Mood journal with trend analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Reference time for windowed analytics (e.g., 2025-01-17 or 2025-01-17T18:30)
    #[arg(long, global = true, value_name = "DATETIME")]
    pub now: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a new entry
    Add {
        /// Entry date (YYYY-MM-DD, optionally with THH:MM)
        #[arg(short, long)]
        date: String,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        /// Mood from 1 (Angry) to 5 (Very Happy), or its name
        #[arg(short, long)]
        mood: String,
    },

    /// Show one entry in full
    Show {
        /// Entry id (see `list`)
        id: String,
    },

    /// Change fields of an existing entry
    Edit {
        /// Entry id (see `list`)
        id: String,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id (see `list`)
        id: String,
    },

    /// Export the journal document (to stdout unless PATH is given)
    Export {
        path: Option<PathBuf>,
    },

    /// List entries, newest first
    List {
        /// Date range (all, today, week, month, YYYY-MM-DD)
        #[arg(short, long, default_value = "all")]
        range: String,

        /// Only entries with this mood
        #[arg(short, long)]
        mood: Option<String>,

        /// Case-insensitive text search over title and content
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show entry count, average mood and recent trend
    Summary,

    /// Show how many entries carry each mood
    Distribution,

    /// Show average mood per day of the week
    Weekdays,

    /// Show the fixed-length trend series
    Trend {
        /// Bucket size (hour, day, week); defaults to the configured period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Group entries by calendar week or month
    Groups {
        /// Grouping (weekly, monthly); defaults to the configured granularity
        #[arg(short, long)]
        by: Option<String>,

        /// Group the whole journal instead of the recent window
        #[arg(short, long)]
        all: bool,
    },

    /// Show the full insights dashboard
    Insights,
}
