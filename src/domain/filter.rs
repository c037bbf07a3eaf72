//! Entry list filtering: date range, mood and text search

use crate::domain::{Entry, Mood};
use chrono::{Duration, Months, NaiveDate};
use std::str::FromStr;

/// Which dates an entry list should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    /// Entries dated today or later
    Today,
    /// Entries from the last seven days
    Week,
    /// Entries from the last calendar month
    Month,
    /// Entries on one specific day
    On(NaiveDate),
}

impl DateRange {
    /// Whether an entry dated `date` belongs to this range.
    ///
    /// `None` (a malformed date) only matches [`DateRange::All`].
    pub fn contains(&self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        let Some(date) = date else {
            return matches!(self, DateRange::All);
        };
        match self {
            DateRange::All => true,
            DateRange::Today => date >= today,
            DateRange::Week => date >= today - Duration::days(7),
            DateRange::Month => {
                let month_ago = today
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(NaiveDate::MIN);
                date >= month_ago
            }
            DateRange::On(day) => date == *day,
        }
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "all" => Ok(DateRange::All),
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DateRange::On)
                .map_err(|_| {
                    format!(
                        "Invalid range: '{}'. Valid ranges are: all, today, week, month, YYYY-MM-DD",
                        s
                    )
                }),
        }
    }
}

/// Combined list filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub range: DateRange,
    pub mood: Option<Mood>,
    /// Case-insensitive text matched against title and content
    pub search: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    pub fn matches(&self, entry: &Entry, today: NaiveDate) -> bool {
        if !self.range.contains(entry.calendar_date(), today) {
            return false;
        }

        if let Some(mood) = self.mood {
            if entry.mood() != Some(mood) {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !entry.title.to_lowercase().contains(&term)
                && !entry.content.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        true
    }

    /// Matching entries in journal order
    pub fn apply<'a>(&self, entries: &'a [Entry], today: NaiveDate) -> Vec<&'a Entry> {
        entries.iter().filter(|e| self.matches(e, today)).collect()
    }
}
