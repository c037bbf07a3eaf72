//! Domain layer - Mood analytics over journal entries

pub mod analytics;
pub mod chart;
pub mod entry;
pub mod filter;
pub mod mood;
pub mod period;
pub mod trend;

pub use analytics::{
    mood_distribution, mood_summary, moods_by_day_of_week, DaySummary, MoodDistribution,
    MoodSummary, RecentTrend, WeekdayMoods,
};
pub use chart::{chart_series, ChartPoint, ChartSource};
pub use entry::Entry;
pub use filter::{DateRange, EntryFilter};
pub use mood::{Mood, MoodCounts};
pub use period::{Granularity, PeriodKey, TrendPeriod};
pub use trend::{group_by_calendar_period, mood_trends, trend_series, PeriodGroup, TrendBucket};
