//! moodlog - Mood journal with trend analytics
//!
//! Keeps dated journal entries rated on a five-point mood scale and turns
//! them into summaries, distributions, day-of-week statistics, fixed-length
//! trend series and calendar week/month groups ready for charting.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
