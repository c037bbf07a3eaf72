//! Mood scale and per-mood tallies

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::str::FromStr;

/// Five-point mood ordinal, 1 (Angry) to 5 (Very Happy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mood {
    Angry = 1,
    Sad = 2,
    Neutral = 3,
    Happy = 4,
    VeryHappy = 5,
}

impl Mood {
    /// All moods in ascending ordinal order
    pub const ALL: [Mood; 5] = [
        Mood::Angry,
        Mood::Sad,
        Mood::Neutral,
        Mood::Happy,
        Mood::VeryHappy,
    ];

    /// Build a mood from its ordinal, `None` outside 1..=5
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Mood::Angry),
            2 => Some(Mood::Sad),
            3 => Some(Mood::Neutral),
            4 => Some(Mood::Happy),
            5 => Some(Mood::VeryHappy),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based slot used by [`MoodCounts`]
    fn index(self) -> usize {
        self as usize - 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Angry => "Angry",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Happy => "Happy",
            Mood::VeryHappy => "Very Happy",
        }
    }

    /// Closest mood to an average, rounded and clamped into 1..=5
    pub fn nearest(average: f64) -> Self {
        if !average.is_finite() {
            return Mood::Neutral;
        }
        let rounded = average.round().clamp(1.0, 5.0) as i64;
        Mood::from_value(rounded).unwrap_or(Mood::Neutral)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .ok()
            .and_then(Mood::from_value)
            .or_else(|| {
                Mood::ALL
                    .into_iter()
                    .find(|m| m.label().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| {
                format!(
                    "Invalid mood: '{}'. Use 1-5 (1=Angry, 2=Sad, 3=Neutral, 4=Happy, 5=Very Happy)",
                    s
                )
            })
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Count of entries per mood, always carrying all five slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodCounts([usize; 5]);

impl MoodCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mood: Mood) {
        self.0[mood.index()] += 1;
    }

    pub fn get(&self, mood: Mood) -> usize {
        self.0[mood.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(mood, count)` pairs in ascending mood order
    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        Mood::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Mean mood weighted by counts, `None` when nothing was recorded
    pub fn average(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let sum: usize = self.iter().map(|(m, c)| m.value() as usize * c).sum();
        Some(sum as f64 / total as f64)
    }

    /// Mood with the highest count; ties go to the lower ordinal.
    ///
    /// Returns `None` when every slot is zero.
    pub fn most_frequent(&self) -> Option<Mood> {
        let mut best = None;
        let mut max_count = 0;
        for (mood, count) in self.iter() {
            if count > max_count {
                max_count = count;
                best = Some(mood);
            }
        }
        best
    }
}

impl FromIterator<Mood> for MoodCounts {
    fn from_iter<I: IntoIterator<Item = Mood>>(iter: I) -> Self {
        let mut counts = MoodCounts::new();
        for mood in iter {
            counts.record(mood);
        }
        counts
    }
}

impl Serialize for MoodCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (mood, count) in self.iter() {
            map.serialize_entry(&mood.to_string(), &count)?;
        }
        map.end()
    }
}
