//! Weekly vacancy dashboard core: entry capture, compliance evaluation,
//! national and regional rollups, and period-over-period trends.

mod aggregate;
mod board;
mod compliance;
mod directory;
pub mod domain;
pub mod report;
mod router;
mod trend;

pub use aggregate::{AggregateRow, MetricDiff};
pub use board::WeeklyBoard;
pub use compliance::{counter_fulfillment, kpi_fulfillment, vacancy_percent_of, EntryMetrics};
pub use directory::{BusinessUnit, Region, RegionDirectory};
pub use domain::{
    EntryDraft, EntryKey, GoalDirection, StatusTier, TargetConfig, Targets, Thresholds,
    WeekOfYear, WeeklyEntry,
};
pub use report::WeeklyReport;
pub use router::{
    dashboard_router, DashboardDataSource, DashboardReportRequest, DashboardReportResponse,
    TrendRequest, TrendResponse,
};
pub use trend::{build_trend, TrendPoint, DEFAULT_TREND_WINDOW};

#[cfg(test)]
mod tests;
