//! Date bucketing shared by trend series and calendar groups

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Time slice used for the fixed-length trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    /// 24 one-hour buckets (day view)
    Hour,
    /// 30 one-day buckets (month view)
    Day,
    /// 4 seven-day buckets covering the last 28 days
    #[default]
    Week,
}

impl TrendPeriod {
    /// Number of buckets a series for this period always has
    pub fn bucket_count(&self) -> usize {
        match self {
            TrendPeriod::Hour => 24,
            TrendPeriod::Day => 30,
            TrendPeriod::Week => 4,
        }
    }

    fn bucket_length(&self) -> Duration {
        match self {
            TrendPeriod::Hour => Duration::hours(1),
            TrendPeriod::Day => Duration::days(1),
            TrendPeriod::Week => Duration::days(7),
        }
    }

    /// Exclusive end of the newest bucket.
    ///
    /// Hourly series end with the hour containing `now`; daily and weekly
    /// series end with the calendar day containing `now`.
    fn series_end(&self, now: NaiveDateTime) -> NaiveDateTime {
        let midnight = now.date().and_time(NaiveTime::MIN);
        match self {
            TrendPeriod::Hour => midnight + Duration::hours(now.hour() as i64 + 1),
            TrendPeriod::Day | TrendPeriod::Week => midnight + Duration::days(1),
        }
    }

    /// Contiguous half-open `[start, end)` windows, oldest first
    pub fn bucket_bounds(&self, now: NaiveDateTime) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        let end = self.series_end(now);
        let length = self.bucket_length();
        let count = self.bucket_count() as i32;

        (0..count)
            .map(|i| {
                let start = end - length * (count - i);
                (start, start + length)
            })
            .collect()
    }

    /// Stable identifier for a bucket starting at `start`
    pub fn bucket_key(&self, start: NaiveDateTime) -> String {
        match self {
            TrendPeriod::Hour => start.format("%Y-%m-%dT%H").to_string(),
            TrendPeriod::Day | TrendPeriod::Week => start.format("%Y-%m-%d").to_string(),
        }
    }

    /// Human-readable label for the bucket `[start, end)`
    pub fn bucket_label(&self, start: NaiveDateTime, end: NaiveDateTime) -> String {
        match self {
            TrendPeriod::Hour => start.format("%H:00").to_string(),
            TrendPeriod::Day => start.format("%b %-d").to_string(),
            TrendPeriod::Week => {
                let last_day = (end - Duration::days(1)).date();
                span_label(start.date(), last_day)
            }
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendPeriod::Hour => "hour",
            TrendPeriod::Day => "day",
            TrendPeriod::Week => "week",
        };
        f.write_str(name)
    }
}

impl FromStr for TrendPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(TrendPeriod::Hour),
            "day" => Ok(TrendPeriod::Day),
            "week" => Ok(TrendPeriod::Week),
            _ => Err(format!(
                "Invalid period: '{}'. Valid periods are: hour, day, week",
                s
            )),
        }
    }
}

/// Calendar grouping used by the insights dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Weekly,
    Monthly,
}

impl Granularity {
    /// Group key for the calendar period containing `date`
    pub fn key_for(&self, date: NaiveDate) -> PeriodKey {
        match self {
            Granularity::Weekly => PeriodKey::Week {
                year: date.year(),
                week: week_number(date),
            },
            Granularity::Monthly => PeriodKey::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Weekly => f.write_str("weekly"),
            Granularity::Monthly => f.write_str("monthly"),
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(Granularity::Weekly),
            "monthly" | "month" => Ok(Granularity::Monthly),
            _ => Err(format!(
                "Invalid granularity: '{}'. Valid values are: weekly, monthly",
                s
            )),
        }
    }
}

/// Identifies one calendar week or month.
///
/// Ordering compares `(year, number)` numerically, so week 9 sorts
/// before week 10 and week 53 of one year before week 1 of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKey {
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl PeriodKey {
    /// Display label: `"Jan 5 - Jan 11"` for weeks, `"January 2025"` for months
    pub fn label(&self) -> String {
        match *self {
            PeriodKey::Week { year, week } => match week_start(year, week) {
                Some(start) => span_label(start, start + Duration::days(6)),
                None => self.to_string(),
            },
            PeriodKey::Month { year, month } => match NaiveDate::from_ymd_opt(year, month, 1) {
                Some(first) => first.format("%B %Y").to_string(),
                None => self.to_string(),
            },
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Week { year, week } => write!(f, "{}-W{:02}", year, week),
            PeriodKey::Month { year, month } => write!(f, "{}-{:02}", year, month),
        }
    }
}

impl Serialize for PeriodKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Week-of-year number as the journal has always computed it.
///
/// `ceil((days_since_jan1 + weekday_of_jan1 + 1) / 7)` with Sunday as 0:
/// weeks start on Sunday and week 1 is the one holding January 1st, so
/// values run from 1 to 54. This is not an ISO-8601 week number.
pub fn week_number(date: NaiveDate) -> u32 {
    let days_since_jan1 = date.ordinal0();
    let jan1_offset = first_weekday_offset(date.year()).unwrap_or(0);
    (days_since_jan1 + jan1_offset + 1).div_ceil(7)
}

/// Sunday that starts `week` of `year` under [`week_number`] numbering.
///
/// Week 1 may start in the previous year.
pub fn week_start(year: i32, week: u32) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = jan1.weekday().num_days_from_sunday() as i64;
    let days = (week as i64 - 1) * 7 - offset;
    jan1.checked_add_signed(Duration::days(days))
}

fn first_weekday_offset(year: i32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(|jan1| jan1.weekday().num_days_from_sunday())
}

fn span_label(first: NaiveDate, last: NaiveDate) -> String {
    format!("{} - {}", first.format("%b %-d"), last.format("%b %-d"))
}
