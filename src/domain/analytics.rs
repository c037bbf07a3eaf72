//! Point-in-time mood statistics over the whole journal

use crate::domain::{Entry, Mood, MoodCounts};
use chrono::{Datelike, Weekday};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// How many of the most recent entries feed the trend classifier
pub const RECENT_TREND_WINDOW: usize = 7;

/// Below this many recent entries the trend is always stable
pub const MIN_TREND_ENTRIES: usize = 3;

/// Entry count under which dashboards report "not enough data"
pub const DEFAULT_MIN_ENTRIES_FOR_INSIGHTS: usize = 3;

/// Count of entries per mood, all five moods present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoodDistribution {
    counts: MoodCounts,
}

impl MoodDistribution {
    pub fn get(&self, mood: Mood) -> usize {
        self.counts.get(mood)
    }

    pub fn total(&self) -> usize {
        self.counts.total()
    }

    pub fn counts(&self) -> &MoodCounts {
        &self.counts
    }

    /// Share of `mood` as a whole percent, 0 for an empty journal
    pub fn percentage(&self, mood: Mood) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.get(mood) as f64 / total as f64 * 100.0).round() as u32
    }
}

/// Average mood and entry count for one weekday
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySummary {
    #[serde(skip)]
    pub weekday: Weekday,
    /// Mean mood, 0 when the day has no entries
    pub average: f64,
    pub count: usize,
}

/// Per-weekday summaries, Sunday first
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayMoods {
    days: [DaySummary; 7],
}

impl WeekdayMoods {
    pub fn get(&self, weekday: Weekday) -> &DaySummary {
        &self.days[weekday.num_days_from_sunday() as usize]
    }

    /// Sunday through Saturday
    pub fn iter(&self) -> impl Iterator<Item = &DaySummary> {
        self.days.iter()
    }
}

impl Serialize for WeekdayMoods {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for day in &self.days {
            map.serialize_entry(day_name(day.weekday), day)?;
        }
        map.end()
    }
}

/// Heuristic direction of the most recent moods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecentTrend {
    Improving,
    Declining,
    Stable,
}

impl fmt::Display for RecentTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecentTrend::Improving => "improving",
            RecentTrend::Declining => "declining",
            RecentTrend::Stable => "stable",
        };
        f.write_str(name)
    }
}

/// Whole-journal summary for the dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSummary {
    pub count: usize,
    pub average_mood: f64,
    pub most_frequent_mood: Option<Mood>,
    pub mood_counts: MoodCounts,
    pub recent_trend: Option<RecentTrend>,
}

/// Full weekday name, Sunday through Saturday
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Count entries per mood; entries without a valid mood are not counted
pub fn mood_distribution(entries: &[Entry]) -> MoodDistribution {
    MoodDistribution {
        counts: entries.iter().filter_map(Entry::mood).collect(),
    }
}

/// Average mood per weekday.
///
/// Days without entries report an average of 0 and a count of 0.
/// Entries with a malformed date or an invalid mood are skipped.
#[instrument(level = "debug", skip(entries), fields(entries = entries.len()))]
pub fn moods_by_day_of_week(entries: &[Entry]) -> WeekdayMoods {
    let mut sums = [0u64; 7];
    let mut counts = [0usize; 7];

    for entry in entries {
        let (Some(date), Some(mood)) = (entry.calendar_date(), entry.mood()) else {
            debug!(id = %entry.id, "Skipping entry in weekday statistics");
            continue;
        };
        let slot = date.weekday().num_days_from_sunday() as usize;
        sums[slot] += mood.value() as u64;
        counts[slot] += 1;
    }

    let mut weekday = Weekday::Sun;
    let days = std::array::from_fn(|slot| {
        let summary = DaySummary {
            weekday,
            average: if counts[slot] > 0 {
                sums[slot] as f64 / counts[slot] as f64
            } else {
                0.0
            },
            count: counts[slot],
        };
        weekday = weekday.succ();
        summary
    });

    WeekdayMoods { days }
}

/// Summarize the whole journal.
///
/// An empty journal yields a count and average of 0 with no most
/// frequent mood and no trend.
#[instrument(level = "debug", skip(entries), fields(entries = entries.len()))]
pub fn mood_summary(entries: &[Entry]) -> MoodSummary {
    if entries.is_empty() {
        return MoodSummary {
            count: 0,
            average_mood: 0.0,
            most_frequent_mood: None,
            mood_counts: MoodCounts::new(),
            recent_trend: None,
        };
    }

    let mood_counts: MoodCounts = entries.iter().filter_map(Entry::mood).collect();

    MoodSummary {
        count: entries.len(),
        average_mood: mood_counts.average().unwrap_or(0.0),
        most_frequent_mood: Some(mood_counts.most_frequent().unwrap_or(Mood::Neutral)),
        mood_counts,
        recent_trend: Some(recent_trend(entries)),
    }
}

/// Classify the direction of the latest moods.
///
/// Takes up to [`RECENT_TREND_WINDOW`] entries, newest first, and compares
/// each with the one before it in time. The mood improves when the newer
/// entry is higher. The trend is improving (or declining) when that kind
/// of step outnumbers the other and also exceeds a third of the window.
/// This is a rough heuristic, not a statistical test.
pub fn recent_trend(entries: &[Entry]) -> RecentTrend {
    let mut dated: Vec<_> = entries
        .iter()
        .filter_map(|e| Some((e.date_time()?, e.mood()?)))
        .collect();
    // Stable sort: same-day entries keep their journal order
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let moods: Vec<u8> = dated
        .into_iter()
        .take(RECENT_TREND_WINDOW)
        .map(|(_, mood)| mood.value())
        .collect();

    if moods.len() < MIN_TREND_ENTRIES {
        return RecentTrend::Stable;
    }

    let mut improvements = 0usize;
    let mut declines = 0usize;
    for pair in moods.windows(2) {
        if pair[0] > pair[1] {
            improvements += 1;
        } else if pair[0] < pair[1] {
            declines += 1;
        }
    }

    let threshold = moods.len() as f64 / 3.0;
    if improvements > declines && improvements as f64 > threshold {
        RecentTrend::Improving
    } else if declines > improvements && declines as f64 > threshold {
        RecentTrend::Declining
    } else {
        RecentTrend::Stable
    }
}

/// Whether there are enough entries for dashboards to show insights
pub fn has_sufficient_data(entries: &[Entry], minimum: usize) -> bool {
    entries.len() >= minimum
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use serde_json::json;

    fn entry(id: &str, date: &str, mood: Mood) -> Entry {
        Entry::new(id, date, mood)
    }

    /// Entries on consecutive days, oldest first
    fn sequence(moods: &[i64]) -> Vec<Entry> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        moods
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let date = start + Duration::days(i as i64);
                entry(
                    &i.to_string(),
                    &date.format("%Y-%m-%d").to_string(),
                    Mood::from_value(*m).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_distribution_has_all_moods() {
        let entries = sequence(&[4, 4, 2, 5]);
        let distribution = mood_distribution(&entries);
        assert_eq!(distribution.total(), 4);
        assert_eq!(distribution.get(Mood::Happy), 2);
        assert_eq!(distribution.get(Mood::Angry), 0);
        assert_eq!(distribution.percentage(Mood::Happy), 50);
        assert_eq!(distribution.percentage(Mood::Angry), 0);

        let json = serde_json::to_value(distribution).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_distribution_empty_and_invalid() {
        let empty = mood_distribution(&[]);
        assert_eq!(empty.total(), 0);
        assert_eq!(empty.percentage(Mood::Neutral), 0);

        let mut bad = entry("1", "2025-01-01", Mood::Happy);
        bad.mood = json!("8");
        let distribution = mood_distribution(&[bad]);
        assert_eq!(distribution.total(), 0);
    }

    #[test]
    fn test_day_of_week_average() {
        // Jan 6 and Jan 13 2025 are Mondays
        let entries = vec![
            entry("1", "2025-01-06", Mood::Happy),
            entry("2", "2025-01-13", Mood::Sad),
            entry("3", "2025-01-12", Mood::VeryHappy),
        ];
        let by_day = moods_by_day_of_week(&entries);

        let monday = by_day.get(Weekday::Mon);
        assert_eq!(monday.average, 3.0);
        assert_eq!(monday.count, 2);
        assert_eq!(by_day.get(Weekday::Sun).average, 5.0);

        let tuesday = by_day.get(Weekday::Tue);
        assert_eq!(tuesday.average, 0.0);
        assert_eq!(tuesday.count, 0);
    }

    #[test]
    fn test_day_of_week_order_and_serialization() {
        let by_day = moods_by_day_of_week(&[]);
        let order: Vec<Weekday> = by_day.iter().map(|d| d.weekday).collect();
        assert_eq!(order.first(), Some(&Weekday::Sun));
        assert_eq!(order.last(), Some(&Weekday::Sat));

        let json = serde_json::to_value(&by_day).unwrap();
        assert_eq!(json["Monday"], json!({"average": 0.0, "count": 0}));
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_day_of_week_skips_malformed() {
        let mut bad_mood = entry("2", "2025-01-06", Mood::Happy);
        bad_mood.mood = json!(null);
        let entries = vec![entry("1", "garbage", Mood::Happy), bad_mood];
        let by_day = moods_by_day_of_week(&entries);
        assert!(by_day.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_summary_empty() {
        let summary = mood_summary(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_mood, 0.0);
        assert_eq!(summary.most_frequent_mood, None);
        assert_eq!(summary.recent_trend, None);
        assert_eq!(summary.mood_counts.total(), 0);
    }

    #[test]
    fn test_summary_three_entries() {
        let entries = sequence(&[4, 4, 2]);
        let summary = mood_summary(&entries);
        assert_eq!(summary.count, 3);
        assert!((summary.average_mood - 3.33).abs() < 0.01);
        assert_eq!(summary.most_frequent_mood, Some(Mood::Happy));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["mostFrequentMood"], "4");
    }

    #[test]
    fn test_summary_tie_prefers_lower_mood() {
        let entries = sequence(&[5, 1, 5, 1]);
        assert_eq!(mood_summary(&entries).most_frequent_mood, Some(Mood::Angry));
    }

    #[test]
    fn test_summary_all_moods_invalid() {
        let mut e = entry("1", "2025-01-01", Mood::Happy);
        e.mood = json!("x");
        let summary = mood_summary(&[e]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.average_mood, 0.0);
        assert_eq!(summary.most_frequent_mood, Some(Mood::Neutral));
        assert_eq!(summary.recent_trend, Some(RecentTrend::Stable));
    }

    #[test]
    fn test_trend_improving() {
        let entries = sequence(&[1, 2, 3, 4, 5]);
        assert_eq!(recent_trend(&entries), RecentTrend::Improving);
        assert_eq!(
            mood_summary(&entries).recent_trend,
            Some(RecentTrend::Improving)
        );
    }

    #[test]
    fn test_trend_declining() {
        let entries = sequence(&[5, 4, 3, 2, 1]);
        assert_eq!(recent_trend(&entries), RecentTrend::Declining);
    }

    #[test]
    fn test_trend_alternating_is_stable() {
        let entries = sequence(&[1, 5, 1, 5, 1]);
        assert_eq!(recent_trend(&entries), RecentTrend::Stable);
    }

    #[test]
    fn test_trend_needs_three_entries() {
        assert_eq!(recent_trend(&sequence(&[1, 5])), RecentTrend::Stable);
        assert_eq!(recent_trend(&[]), RecentTrend::Stable);
    }

    #[test]
    fn test_trend_ignores_input_order() {
        let mut entries = sequence(&[1, 2, 3, 4, 5]);
        entries.reverse();
        assert_eq!(recent_trend(&entries), RecentTrend::Improving);
        entries.swap(0, 3);
        assert_eq!(recent_trend(&entries), RecentTrend::Improving);
    }

    #[test]
    fn test_trend_uses_only_latest_seven() {
        // Old decline followed by seven flat entries
        let entries = sequence(&[5, 4, 3, 2, 1, 3, 3, 3, 3, 3, 3, 3]);
        assert_eq!(recent_trend(&entries), RecentTrend::Stable);
    }

    #[test]
    fn test_trend_threshold_requires_more_than_a_third() {
        // Newest first: 3,3,3,3,3,2,3 -> one improvement, one decline
        let entries = sequence(&[3, 2, 3, 3, 3, 3, 3]);
        assert_eq!(recent_trend(&entries), RecentTrend::Stable);

        // Newest first: 4,3,3,3,3,3,3 -> one improvement, 1 < 7/3
        let entries = sequence(&[3, 3, 3, 3, 3, 3, 4]);
        assert_eq!(recent_trend(&entries), RecentTrend::Stable);

        // Newest first: 4,3,2 -> two improvements, 2 > 3/3
        let entries = sequence(&[2, 3, 4]);
        assert_eq!(recent_trend(&entries), RecentTrend::Improving);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let entries = sequence(&[2, 4, 3, 5, 1]);
        assert_eq!(mood_summary(&entries), mood_summary(&entries));
        assert_eq!(
            moods_by_day_of_week(&entries),
            moods_by_day_of_week(&entries)
        );
    }

    #[test]
    fn test_sufficient_data_gate() {
        let entries = sequence(&[3, 3]);
        assert!(!has_sufficient_data(&entries, DEFAULT_MIN_ENTRIES_FOR_INSIGHTS));
        let entries = sequence(&[3, 3, 3]);
        assert!(has_sufficient_data(&entries, DEFAULT_MIN_ENTRIES_FOR_INSIGHTS));
    }
}
