use axum::response::Response;
use serde_json::Value;

use crate::dashboard::{TargetConfig, WeekOfYear, WeeklyBoard, WeeklyEntry};

pub(super) fn config() -> TargetConfig {
    TargetConfig::default()
}

pub(super) fn week(week: u32, year: i32) -> WeekOfYear {
    WeekOfYear::new(week, year)
}

#[allow(clippy::too_many_arguments)]
pub(super) fn entry(
    unit_id: &str,
    week: u32,
    year: i32,
    headcount: f64,
    hires: f64,
    terminations: f64,
    vacancies_opening: f64,
    vacancies_real: f64,
) -> WeeklyEntry {
    WeeklyEntry {
        unit_id: unit_id.to_string(),
        week,
        year,
        headcount,
        hires,
        terminations,
        vacancies_opening,
        vacancies_real,
        notes: String::new(),
    }
}

/// Two reporting weeks across three units. U2 has no capture in week 15, so
/// reports for that week must synthesize its zero row.
pub(super) fn sample_board() -> WeeklyBoard {
    WeeklyBoard::from_entries([
        entry("U1", 14, 2026, 1200.0, 30.0, 12.0, 40.0, 55.0),
        entry("U2", 14, 2026, 800.0, 10.0, 8.0, 25.0, 30.0),
        entry("U9", 14, 2026, 450.0, 6.0, 2.0, 10.0, 12.0),
        entry("U1", 15, 2026, 1210.0, 35.0, 18.0, 55.0, 52.0),
        entry("U9", 15, 2026, 455.0, 9.0, 3.0, 12.0, 10.0),
    ])
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
