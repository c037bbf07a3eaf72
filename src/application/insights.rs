//! Insights use case: summary cards, charts and calendar groups

use crate::domain::analytics::{has_sufficient_data, DEFAULT_MIN_ENTRIES_FOR_INSIGHTS};
use crate::domain::{
    chart_series, group_by_calendar_period, mood_distribution, mood_summary, mood_trends,
    moods_by_day_of_week, trend_series, ChartPoint, Granularity, MoodDistribution, MoodSummary,
    PeriodGroup, TrendPeriod, WeekdayMoods,
};
use crate::infrastructure::EntryStore;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, instrument};

/// Everything the insights dashboard shows, computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub sufficient_data: bool,
    pub summary: MoodSummary,
    pub distribution: MoodDistribution,
    pub weekdays: WeekdayMoods,
    pub granularity: Granularity,
    pub trend: Vec<ChartPoint>,
}

/// Service computing mood analytics over a store's entries
pub struct InsightsService<S: EntryStore> {
    store: S,
    min_entries: usize,
}

impl<S: EntryStore> InsightsService<S> {
    pub fn new(store: S) -> Self {
        InsightsService {
            store,
            min_entries: DEFAULT_MIN_ENTRIES_FOR_INSIGHTS,
        }
    }

    /// Override the entry count below which insights are withheld
    pub fn with_min_entries(mut self, min_entries: usize) -> Self {
        self.min_entries = min_entries;
        self
    }

    pub fn has_sufficient_data(&self) -> bool {
        has_sufficient_data(self.store.entries(), self.min_entries)
    }

    pub fn summary(&self) -> MoodSummary {
        mood_summary(self.store.entries())
    }

    pub fn distribution(&self) -> MoodDistribution {
        mood_distribution(self.store.entries())
    }

    pub fn weekdays(&self) -> WeekdayMoods {
        moods_by_day_of_week(self.store.entries())
    }

    /// Fixed-length chart series ending at `now`
    pub fn trend_chart(&self, period: TrendPeriod, now: NaiveDateTime) -> Vec<ChartPoint> {
        chart_series(&trend_series(self.store.entries(), period, now))
    }

    /// Calendar groups over the lookback window ending at `now`
    pub fn recent_groups(&self, granularity: Granularity, now: NaiveDateTime) -> Vec<PeriodGroup<'_>> {
        mood_trends(self.store.entries(), granularity, now)
    }

    /// Calendar groups over the whole journal
    pub fn all_groups(&self, granularity: Granularity) -> Vec<PeriodGroup<'_>> {
        group_by_calendar_period(self.store.entries(), granularity)
    }

    /// Build the full dashboard report
    #[instrument(skip(self))]
    pub fn report(&self, granularity: Granularity, now: NaiveDateTime) -> InsightsReport {
        let report = InsightsReport {
            sufficient_data: self.has_sufficient_data(),
            summary: self.summary(),
            distribution: self.distribution(),
            weekdays: self.weekdays(),
            granularity,
            trend: chart_series(&self.recent_groups(granularity, now)),
        };
        info!(
            entries = report.summary.count,
            periods = report.trend.len(),
            "Built insights report"
        );
        report
    }
}
