//! Chart-ready series built from trend buckets and period groups

use crate::domain::trend::{PeriodGroup, TrendBucket};
use crate::domain::{Mood, MoodCounts};
use serde::Serialize;

/// Anything that can be plotted as one point of a mood chart
pub trait ChartSource {
    fn label(&self) -> &str;
    fn average_mood(&self) -> Option<f64>;
    fn entry_count(&self) -> usize;
    fn mood_counts(&self) -> &MoodCounts;
}

impl ChartSource for TrendBucket<'_> {
    fn label(&self) -> &str {
        &self.label
    }

    fn average_mood(&self) -> Option<f64> {
        self.average_mood
    }

    fn entry_count(&self) -> usize {
        self.entry_count
    }

    fn mood_counts(&self) -> &MoodCounts {
        &self.mood_counts
    }
}

impl ChartSource for PeriodGroup<'_> {
    fn label(&self) -> &str {
        &self.label
    }

    fn average_mood(&self) -> Option<f64> {
        self.average_mood
    }

    fn entry_count(&self) -> usize {
        self.entry_count
    }

    fn mood_counts(&self) -> &MoodCounts {
        &self.mood_counts
    }
}

/// One plotted point with the per-mood breakdown used by tooltips
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub name: String,
    /// Average rounded to two decimals; `null` when there is no data
    pub average: Option<f64>,
    pub count: usize,
    pub angry: usize,
    pub sad: usize,
    pub neutral: usize,
    pub happy: usize,
    pub very_happy: usize,
}

impl ChartPoint {
    pub fn from_source<S: ChartSource + ?Sized>(source: &S) -> Self {
        let counts = source.mood_counts();
        ChartPoint {
            name: source.label().to_string(),
            average: source.average_mood().map(round_to_hundredths),
            count: source.entry_count(),
            angry: counts.get(Mood::Angry),
            sad: counts.get(Mood::Sad),
            neutral: counts.get(Mood::Neutral),
            happy: counts.get(Mood::Happy),
            very_happy: counts.get(Mood::VeryHappy),
        }
    }
}

/// Reshape buckets or groups into chart points, preserving order
pub fn chart_series<S: ChartSource>(sources: &[S]) -> Vec<ChartPoint> {
    sources.iter().map(ChartPoint::from_source).collect()
}

/// Round half up to two decimal places (mood averages are never negative)
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
