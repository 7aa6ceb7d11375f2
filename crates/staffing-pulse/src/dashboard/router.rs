use std::io::Cursor;

use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::ingest::{CaptureSheetImporter, ColumnMap};

use super::board::WeeklyBoard;
use super::directory::RegionDirectory;
use super::domain::{EntryDraft, TargetConfig, WeekOfYear, WeeklyEntry};
use super::report::views::WeeklyReportSummary;
use super::report::WeeklyReport;
use super::trend::{build_trend, TrendPoint, DEFAULT_TREND_WINDOW};

/// Router builder exposing the dashboard evaluation endpoints.
pub fn dashboard_router() -> Router {
    Router::new()
        .route("/api/v1/dashboard/report", post(report_handler))
        .route("/api/v1/dashboard/trend", post(trend_handler))
}

/// One evaluation call: the reporting period, captured entries, and optional
/// overrides. Inline entries missing period fields inherit the requested
/// week; a capture sheet, when present, is merged over them.
#[derive(Debug, Deserialize)]
pub struct DashboardReportRequest {
    pub week: u32,
    pub year: i32,
    #[serde(default)]
    pub entries: Vec<EntryDraft>,
    #[serde(default)]
    pub capture_csv: Option<String>,
    #[serde(default)]
    pub columns: Option<ColumnMap>,
    #[serde(default)]
    pub config: Option<TargetConfig>,
    #[serde(default)]
    pub include_trend: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardReportResponse {
    pub data_source: DashboardDataSource,
    pub report: WeeklyReportSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Vec<TrendPoint>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardDataSource {
    CaptureSheet,
    Manual,
}

#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    #[serde(default)]
    pub entries: Vec<EntryDraft>,
    #[serde(default)]
    pub window: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub window: usize,
    pub points: Vec<TrendPoint>,
}

pub(crate) async fn report_handler(
    Json(payload): Json<DashboardReportRequest>,
) -> Result<Json<DashboardReportResponse>, AppError> {
    let DashboardReportRequest {
        week,
        year,
        entries,
        capture_csv,
        columns,
        config,
        include_trend,
    } = payload;

    let week = WeekOfYear::new(week, year);
    let config = config.unwrap_or_default();

    let mut board = WeeklyBoard::from_entries(entries.into_iter().map(|mut draft| {
        draft.week.get_or_insert(week.week);
        draft.year.get_or_insert(week.year);
        draft.normalize()
    }));

    let data_source = if let Some(csv) = capture_csv {
        let columns = columns.unwrap_or_else(ColumnMap::standard);
        let reader = Cursor::new(csv.into_bytes());
        let imported = CaptureSheetImporter::from_reader(reader, &columns, week)?;
        board.merge(imported);
        DashboardDataSource::CaptureSheet
    } else {
        DashboardDataSource::Manual
    };

    let directory = RegionDirectory::standard();
    let report = WeeklyReport::build(&board, &directory, &config, week);
    let trend = if include_trend {
        Some(build_trend(board.entries(), DEFAULT_TREND_WINDOW))
    } else {
        None
    };

    Ok(Json(DashboardReportResponse {
        data_source,
        report: report.summary(),
        trend,
    }))
}

/// History endpoint. Entries are expected to carry their own period fields;
/// normalization is total, so rows without one bucket under week zero.
pub(crate) async fn trend_handler(Json(payload): Json<TrendRequest>) -> Json<TrendResponse> {
    let window = payload.window.unwrap_or(DEFAULT_TREND_WINDOW);
    let entries: Vec<WeeklyEntry> = payload
        .entries
        .into_iter()
        .map(EntryDraft::normalize)
        .collect();
    let points = build_trend(&entries, window);

    Json(TrendResponse { window, points })
}
