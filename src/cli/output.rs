//! Output formatting utilities

use crate::application::InsightsReport;
use crate::domain::analytics::day_name;
use crate::domain::{ChartPoint, Entry, Mood, MoodDistribution, MoodSummary, PeriodGroup, WeekdayMoods};

/// Fewer chart points than this cannot show a trend line
const MIN_TREND_POINTS: usize = 2;

/// Format a list of entries for display
pub fn format_entry_list(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let mood = entry.display_mood();
        output.push_str(&format!(
            "{:<16}  {} {:<10}  {}  [{}]\n",
            entry.date,
            mood,
            mood.label(),
            entry.title,
            entry.id
        ));
    }
    output
}

/// Format one entry in full
pub fn format_entry_detail(entry: &Entry) -> String {
    let mood = match entry.mood() {
        Some(mood) => format!("{} ({})", mood.label(), mood),
        None => "-".to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n", entry.title));
    output.push_str(&format!("Date:    {}\n", entry.date));
    output.push_str(&format!("Mood:    {}\n", mood));
    output.push_str(&format!("Id:      {}\n", entry.id));
    if !entry.created_at.is_empty() {
        output.push_str(&format!("Created: {}\n", entry.created_at));
    }
    output.push('\n');
    output.push_str(&entry.content);
    output.push('\n');
    output
}

/// Format the summary cards; `sufficient_data` controls the notice line
pub fn format_summary(summary: &MoodSummary, sufficient_data: bool) -> String {
    let mut output = String::new();
    if !sufficient_data {
        output.push_str("Not enough entries for reliable insights yet\n\n");
    }

    output.push_str(&format!("Entries:       {}\n", summary.count));
    if summary.mood_counts.total() > 0 {
        output.push_str(&format!(
            "Average mood:  {:.1} ({})\n",
            summary.average_mood,
            Mood::nearest(summary.average_mood).label()
        ));
    } else {
        output.push_str(&format!("Average mood:  {:.1}\n", summary.average_mood));
    }
    match summary.most_frequent_mood {
        Some(mood) => output.push_str(&format!("Most frequent: {} ({})\n", mood.label(), mood)),
        None => output.push_str("Most frequent: -\n"),
    }
    match summary.recent_trend {
        Some(trend) => output.push_str(&format!("Recent trend:  {}\n", trend)),
        None => output.push_str("Recent trend:  -\n"),
    }
    output
}

/// Format mood counts with whole-number percentages
pub fn format_distribution(distribution: &MoodDistribution) -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!(
            "{} {:<10}  {:>4}  {:>3}%\n",
            mood,
            mood.label(),
            distribution.get(mood),
            distribution.percentage(mood)
        ));
    }
    output
}

/// Format per-weekday averages, Sunday first
pub fn format_weekdays(weekdays: &WeekdayMoods) -> String {
    let mut output = String::new();
    for day in weekdays.iter() {
        let (average, label) = if day.count == 0 {
            ("-".to_string(), "")
        } else {
            (format!("{:.1}", day.average), Mood::nearest(day.average).label())
        };
        output.push_str(&format!(
            "{:<9}  {:>4}  {:<10}  ({} entries)\n",
            day_name(day.weekday),
            average,
            label,
            day.count
        ));
    }
    output
}

/// Format chart points, one line per point; `-` marks a point without data
pub fn format_chart(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return "No data".to_string();
    }

    let mut output = String::new();
    for point in points {
        let average = match point.average {
            Some(average) => format!("{:.2}", average),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<16}  {:>4}  ({} entries)\n",
            point.name, average, point.count
        ));
    }
    output
}

/// Format calendar period groups, oldest first
pub fn format_groups(groups: &[PeriodGroup<'_>]) -> String {
    if groups.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for group in groups {
        let average = match group.average_mood {
            Some(average) => format!("{:.2}", average),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<8}  {:<16}  {:>4}  ({} entries)\n",
            group.key.to_string(),
            group.label,
            average,
            group.entry_count
        ));
    }
    output
}

/// Format the full insights dashboard
pub fn format_report(report: &InsightsReport) -> String {
    let mut output = format_summary(&report.summary, report.sufficient_data);

    output.push_str("\nMood distribution\n");
    output.push_str(&format_distribution(&report.distribution));

    output.push_str("\nBy day of week\n");
    output.push_str(&format_weekdays(&report.weekdays));

    output.push_str(&format!("\nTrend ({})\n", report.granularity));
    if report.trend.len() < MIN_TREND_POINTS {
        output.push_str("Not enough data for trend analysis\n");
    } else {
        output.push_str(&format_chart(&report.trend));
    }
    output
}
