use crate::models::{DashboardResponse, MoodEntry, SummaryStats, TrendPoint};
use crate::recommendations::recommend;
use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use std::fmt::Display;

pub const TREND_WINDOW: usize = 14;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

pub fn build_dashboard(entries: &[MoodEntry]) -> DashboardResponse {
    build_dashboard_at(Local::now(), entries)
}

/// Trend labels are rendered in `now`'s time zone.
pub fn build_dashboard_at<Tz>(now: DateTime<Tz>, entries: &[MoodEntry]) -> DashboardResponse
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let summary = SummaryStats {
        total_checkins: entries.len(),
        average_mood: average(entries).map(|avg| (avg * 10.0).round() / 10.0),
        days_tracking: days_tracked(entries, now.clone()),
    };

    DashboardResponse {
        summary,
        trend: trend_points(entries, &now.timezone()),
        recommendations: recommend(entries),
    }
}

pub fn recent_window(entries: &[MoodEntry], n: usize) -> &[MoodEntry] {
    &entries[entries.len().saturating_sub(n)..]
}

pub fn trend_points<Tz>(entries: &[MoodEntry], tz: &Tz) -> Vec<TrendPoint>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    recent_window(entries, TREND_WINDOW)
        .iter()
        .map(|entry| TrendPoint {
            date: entry.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            label: entry.date.with_timezone(tz).format("%b %-d").to_string(),
            mood: entry.mood.value(),
            mood_label: entry.mood.label(),
        })
        .collect()
}

pub fn average(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|entry| u32::from(entry.mood.value())).sum();
    Some(f64::from(sum) / entries.len() as f64)
}

/// Whole days, rounded up, since the first check-in.
pub fn days_tracked<Tz: TimeZone>(entries: &[MoodEntry], now: DateTime<Tz>) -> i64 {
    let Some(first) = entries.first() else {
        return 0;
    };
    let elapsed = now.signed_duration_since(first.date).num_milliseconds();
    if elapsed <= 0 {
        return 0;
    }
    (elapsed + DAY_MILLIS - 1) / DAY_MILLIS
}
