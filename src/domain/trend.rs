//! Trend aggregation: fixed-length chart series and calendar period groups

use crate::domain::period::{Granularity, PeriodKey, TrendPeriod};
use crate::domain::{Entry, MoodCounts};
use chrono::{Duration, Months, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// One slice of a fixed-length trend series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendBucket<'a> {
    pub period_key: String,
    pub label: String,
    /// Inclusive start of the bucket
    pub start: NaiveDateTime,
    /// Exclusive end of the bucket
    pub end: NaiveDateTime,
    #[serde(skip)]
    pub entries: Vec<&'a Entry>,
    pub mood_counts: MoodCounts,
    /// Mean of valid moods; `None` when the bucket has no data
    pub average_mood: Option<f64>,
    pub entry_count: usize,
}

/// Entries sharing one calendar week or month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodGroup<'a> {
    pub key: PeriodKey,
    pub label: String,
    #[serde(skip)]
    pub entries: Vec<&'a Entry>,
    pub mood_counts: MoodCounts,
    pub average_mood: Option<f64>,
    pub entry_count: usize,
}

/// Build the fixed-length series ending at `now`.
///
/// Always returns exactly [`TrendPeriod::bucket_count`] buckets, oldest
/// first, whether or not any entry falls inside the window. Entries are
/// placed by `[start, end)` membership; malformed dates are skipped.
#[instrument(level = "debug", skip(entries), fields(entries = entries.len()))]
pub fn trend_series(
    entries: &[Entry],
    period: TrendPeriod,
    now: NaiveDateTime,
) -> Vec<TrendBucket<'_>> {
    let bounds = period.bucket_bounds(now);
    let mut members: Vec<Vec<&Entry>> = vec![Vec::new(); bounds.len()];
    let mut skipped = 0usize;

    for entry in entries {
        let Some(at) = entry.date_time() else {
            skipped += 1;
            continue;
        };
        if let Some(index) = bounds
            .iter()
            .position(|(start, end)| at >= *start && at < *end)
        {
            members[index].push(entry);
        }
    }

    if skipped > 0 {
        debug!(skipped, "Entries with malformed dates left out of trend series");
    }

    bounds
        .into_iter()
        .zip(members)
        .map(|((start, end), entries)| {
            let mood_counts: MoodCounts = entries.iter().filter_map(|e| e.mood()).collect();
            TrendBucket {
                period_key: period.bucket_key(start),
                label: period.bucket_label(start, end),
                start,
                end,
                average_mood: mood_counts.average(),
                entry_count: entries.len(),
                mood_counts,
                entries,
            }
        })
        .collect()
}

/// Group every entry by calendar week or month, oldest period first.
///
/// Only periods that contain at least one entry are returned.
#[instrument(level = "debug", skip(entries), fields(entries = entries.len()))]
pub fn group_by_calendar_period(
    entries: &[Entry],
    granularity: Granularity,
) -> Vec<PeriodGroup<'_>> {
    group_entries(entries.iter(), granularity)
}

/// Calendar groups over the recent lookback window.
///
/// Weekly grouping looks back 30 days, monthly grouping 6 months; the
/// window `[now - lookback, now]` is inclusive on both ends.
#[instrument(level = "debug", skip(entries), fields(entries = entries.len()))]
pub fn mood_trends(
    entries: &[Entry],
    granularity: Granularity,
    now: NaiveDateTime,
) -> Vec<PeriodGroup<'_>> {
    let start = lookback_start(granularity, now);
    let recent = entries
        .iter()
        .filter(|e| e.date_time().is_some_and(|at| at >= start && at <= now));
    group_entries(recent, granularity)
}

fn lookback_start(granularity: Granularity, now: NaiveDateTime) -> NaiveDateTime {
    match granularity {
        Granularity::Weekly => now - Duration::days(30),
        Granularity::Monthly => now
            .checked_sub_months(Months::new(6))
            .unwrap_or(NaiveDateTime::MIN),
    }
}

fn group_entries<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    granularity: Granularity,
) -> Vec<PeriodGroup<'a>> {
    // BTreeMap keeps groups in (year, number) order
    let mut grouped: BTreeMap<PeriodKey, Vec<&'a Entry>> = BTreeMap::new();

    for entry in entries {
        let Some(date) = entry.calendar_date() else {
            debug!(id = %entry.id, "Skipping entry with malformed date");
            continue;
        };
        grouped
            .entry(granularity.key_for(date))
            .or_default()
            .push(entry);
    }

    let groups: Vec<PeriodGroup<'a>> = grouped
        .into_iter()
        .map(|(key, entries)| {
            let mood_counts: MoodCounts = entries.iter().filter_map(|e| e.mood()).collect();
            PeriodGroup {
                key,
                label: key.label(),
                average_mood: mood_counts.average(),
                entry_count: entries.len(),
                mood_counts,
                entries,
            }
        })
        .collect();

    debug!(groups = groups.len(), "Grouped entries by calendar period");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use chrono::NaiveDate;
    use serde_json::json;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 17)
            .unwrap()
            .and_hms_opt(15, 42, 0)
            .unwrap()
    }

    fn entry(id: &str, date: &str, mood: Mood) -> Entry {
        Entry::new(id, date, mood)
    }

    #[test]
    fn test_series_length_is_fixed_without_entries() {
        assert_eq!(trend_series(&[], TrendPeriod::Hour, now()).len(), 24);
        assert_eq!(trend_series(&[], TrendPeriod::Day, now()).len(), 30);
        assert_eq!(trend_series(&[], TrendPeriod::Week, now()).len(), 4);
    }

    #[test]
    fn test_series_length_is_fixed_with_many_entries() {
        let entries: Vec<Entry> = (1..=28)
            .map(|d| entry(&d.to_string(), &format!("2025-01-{:02}", d), Mood::Happy))
            .collect();
        for period in [TrendPeriod::Hour, TrendPeriod::Day, TrendPeriod::Week] {
            assert_eq!(
                trend_series(&entries, period, now()).len(),
                period.bucket_count()
            );
        }
    }

    #[test]
    fn test_empty_buckets_report_no_data() {
        let entries = vec![entry("1", "2025-01-17", Mood::Happy)];
        let series = trend_series(&entries, TrendPeriod::Day, now());

        assert_eq!(series[29].average_mood, Some(4.0));
        assert_eq!(series[29].entry_count, 1);
        for bucket in &series[..29] {
            assert_eq!(bucket.average_mood, None);
            assert_eq!(bucket.entry_count, 0);
            assert!(!bucket.label.is_empty());
        }
    }

    #[test]
    fn test_weekly_buckets_average_members() {
        let entries = vec![
            entry("1", "2025-01-16", Mood::Happy),
            entry("2", "2025-01-11", Mood::Sad),
            entry("3", "2025-01-10", Mood::Angry),
            entry("4", "2024-12-21", Mood::VeryHappy),
            entry("5", "2024-12-20", Mood::Angry), // before the 28-day window
        ];
        let series = trend_series(&entries, TrendPeriod::Week, now());

        assert_eq!(series[3].entry_count, 2);
        assert_eq!(series[3].average_mood, Some(3.0));
        assert_eq!(series[2].entry_count, 1);
        assert_eq!(series[2].average_mood, Some(1.0));
        assert_eq!(series[1].average_mood, None);
        assert_eq!(series[0].entry_count, 1);
        assert_eq!(series[0].average_mood, Some(5.0));
        assert_eq!(series[3].label, "Jan 11 - Jan 17");
    }

    #[test]
    fn test_each_entry_lands_in_one_bucket() {
        let entries: Vec<Entry> = (0..40)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap() - Duration::days(i);
                entry(&i.to_string(), &date.format("%Y-%m-%d").to_string(), Mood::Neutral)
            })
            .collect();
        let series = trend_series(&entries, TrendPeriod::Day, now());
        let placed: usize = series.iter().map(|b| b.entry_count).sum();
        assert_eq!(placed, 30);
        assert!(series.iter().all(|b| b.entry_count == 1));
    }

    #[test]
    fn test_hour_series_uses_entry_time() {
        let entries = vec![
            entry("1", "2025-01-17T15:05", Mood::VeryHappy),
            entry("2", "2025-01-17T09:59", Mood::Sad),
            entry("3", "2025-01-17", Mood::Happy),
            entry("4", "2025-01-17T16:10", Mood::Angry), // after now's hour
        ];
        let series = trend_series(&entries, TrendPeriod::Hour, now());
        assert_eq!(series[23].label, "15:00");
        assert_eq!(series[23].average_mood, Some(5.0));
        assert_eq!(series[17].label, "09:00");
        assert_eq!(series[17].average_mood, Some(2.0));
        assert_eq!(series[8].label, "00:00");
        assert_eq!(series[8].average_mood, Some(4.0));
        let placed: usize = series.iter().map(|b| b.entry_count).sum();
        assert_eq!(placed, 3);
    }

    #[test]
    fn test_malformed_dates_and_moods_are_skipped() {
        let mut bad_mood = entry("2", "2025-01-17", Mood::Happy);
        bad_mood.mood = json!("11");
        let entries = vec![
            entry("1", "not a date", Mood::Angry),
            bad_mood,
            entry("3", "2025-01-17", Mood::Sad),
        ];
        let series = trend_series(&entries, TrendPeriod::Day, now());
        let today = &series[29];
        assert_eq!(today.entry_count, 2);
        assert_eq!(today.mood_counts.total(), 1);
        assert_eq!(today.average_mood, Some(2.0));
    }

    #[test]
    fn test_bucket_with_only_invalid_moods_has_no_average() {
        let mut e = entry("1", "2025-01-17", Mood::Happy);
        e.mood = json!(null);
        let entries = vec![e];
        let series = trend_series(&entries, TrendPeriod::Week, now());
        assert_eq!(series[3].entry_count, 1);
        assert_eq!(series[3].average_mood, None);
    }

    #[test]
    fn test_series_is_idempotent() {
        let entries = vec![
            entry("1", "2025-01-15", Mood::Happy),
            entry("2", "2025-01-02", Mood::Sad),
        ];
        let first = trend_series(&entries, TrendPeriod::Day, now());
        let second = trend_series(&entries, TrendPeriod::Day, now());
        assert_eq!(first, second);
    }

    #[test]
    fn test_groups_cross_year_boundary_in_order() {
        let entries = vec![
            entry("a", "2025-03-05", Mood::Happy),     // 2025-W10
            entry("b", "2024-12-28", Mood::Sad),       // 2024-W52
            entry("c", "2025-02-26", Mood::Neutral),   // 2025-W09
            entry("d", "2025-01-02", Mood::VeryHappy), // 2025-W01
        ];
        let groups = group_by_calendar_period(&entries, Granularity::Weekly);

        let keys: Vec<String> = groups.iter().map(|g| g.key.to_string()).collect();
        assert_eq!(keys, vec!["2024-W52", "2025-W01", "2025-W09", "2025-W10"]);

        let firsts: Vec<NaiveDate> = groups
            .iter()
            .map(|g| g.entries[0].calendar_date().unwrap())
            .collect();
        assert!(firsts.windows(2).all(|w| w[0] <= w[1]));
        assert!(groups.iter().all(|g| !g.label.is_empty()));
    }

    #[test]
    fn test_monthly_groups_sort_double_digit_months() {
        let entries = vec![
            entry("1", "2024-10-03", Mood::Happy),
            entry("2", "2024-09-12", Mood::Sad),
            entry("3", "2024-10-20", Mood::Sad),
            entry("4", "2025-01-01", Mood::Angry),
        ];
        let groups = group_by_calendar_period(&entries, Granularity::Monthly);

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["September 2024", "October 2024", "January 2025"]
        );
        assert_eq!(groups[1].entry_count, 2);
        assert_eq!(groups[1].average_mood, Some(3.0));
        assert_eq!(groups[1].mood_counts.get(Mood::Sad), 1);
    }

    #[test]
    fn test_weekly_group_label_spans_sunday_to_saturday() {
        let entries = vec![entry("1", "2025-01-17", Mood::Happy)];
        let groups = group_by_calendar_period(&entries, Granularity::Weekly);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key.to_string(), "2025-W03");
        assert_eq!(groups[0].label, "Jan 12 - Jan 18");
    }

    #[test]
    fn test_groups_skip_malformed_dates() {
        let entries = vec![entry("1", "someday", Mood::Happy)];
        assert!(group_by_calendar_period(&entries, Granularity::Weekly).is_empty());
        assert!(group_by_calendar_period(&[], Granularity::Monthly).is_empty());
    }

    #[test]
    fn test_mood_trends_applies_lookback() {
        let entries = vec![
            entry("1", "2025-01-17", Mood::Happy),
            entry("2", "2024-12-18", Mood::Sad), // exactly 30 days back, before now's time
            entry("3", "2024-12-19", Mood::Sad),
            entry("4", "2024-06-01", Mood::Angry),
            entry("5", "2025-01-20", Mood::VeryHappy), // future
        ];

        let weekly = mood_trends(&entries, Granularity::Weekly, now());
        let weekly_total: usize = weekly.iter().map(|g| g.entry_count).sum();
        assert_eq!(weekly_total, 2);

        let monthly = mood_trends(&entries, Granularity::Monthly, now());
        let labels: Vec<&str> = monthly.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["December 2024", "January 2025"]);
    }
}
