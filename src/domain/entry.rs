//! Journal entry record

use crate::domain::Mood;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A journal entry as stored in the journal document.
///
/// `date` and `mood` are kept exactly as they were written so that a
/// single malformed entry never prevents the rest of the journal from
/// loading. Use [`Entry::date_time`] and [`Entry::mood`] to read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mood: Value,
    #[serde(default)]
    pub created_at: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, date: impl Into<String>, mood: Mood) -> Self {
        Entry {
            id: id.into(),
            date: date.into(),
            title: String::new(),
            content: String::new(),
            mood: Value::String(mood.to_string()),
            created_at: String::new(),
        }
    }

    pub fn with_text(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.title = title.into();
        self.content = content.into();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Parsed entry date, `None` when the stored value is malformed
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        parse_entry_date(&self.date)
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date_time().map(|dt| dt.date())
    }

    /// Numeric mood, `None` when missing or outside 1..=5
    pub fn mood(&self) -> Option<Mood> {
        match &self.mood {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .and_then(Mood::from_value),
            Value::String(s) => s.trim().parse::<i64>().ok().and_then(Mood::from_value),
            _ => None,
        }
    }

    /// Mood used for display; unknown moods show as Neutral
    pub fn display_mood(&self) -> Mood {
        self.mood().unwrap_or(Mood::Neutral)
    }
}

/// Parse a stored entry date.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM[:SS]` and RFC 3339
/// timestamps (their wall-clock time is kept, the offset dropped).
pub fn parse_entry_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.naive_local())
}
