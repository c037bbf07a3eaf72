//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_chart, format_distribution, format_entry_detail, format_entry_list, format_groups,
    format_report, format_summary, format_weekdays,
};
