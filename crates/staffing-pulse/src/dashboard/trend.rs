use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{number_or_zero, WeeklyEntry};

/// Periods kept when charting the history.
pub const DEFAULT_TREND_WINDOW: usize = 12;

/// National totals for one reporting week present in the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub week: u32,
    pub year: i32,
    pub hires: f64,
    pub terminations: f64,
    pub vacancies_real: f64,
    pub headcount: f64,
}

/// Groups entries by week, sums the headline counters across all units, and
/// keeps the most recent `window` periods in chronological order. Weeks with
/// no captured entries produce no point: gaps are compressed, never
/// interpolated.
pub fn build_trend<'a>(
    entries: impl IntoIterator<Item = &'a WeeklyEntry>,
    window: usize,
) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<i64, TrendPoint> = BTreeMap::new();

    for entry in entries {
        let week = entry.week_of();
        let point = buckets.entry(week.sort_key()).or_insert_with(|| TrendPoint {
            label: week.label(),
            week: week.week,
            year: week.year,
            hires: 0.0,
            terminations: 0.0,
            vacancies_real: 0.0,
            headcount: 0.0,
        });
        point.hires += number_or_zero(entry.hires);
        point.terminations += number_or_zero(entry.terminations);
        point.vacancies_real += number_or_zero(entry.vacancies_real);
        point.headcount += number_or_zero(entry.headcount);
    }

    let points: Vec<TrendPoint> = buckets.into_values().collect();
    let start = points.len().saturating_sub(window);
    points.into_iter().skip(start).collect()
}
