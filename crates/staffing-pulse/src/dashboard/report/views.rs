use serde::Serialize;

use super::super::aggregate::{AggregateRow, MetricDiff};
use super::super::domain::StatusTier;

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReportSummary {
    pub week: u32,
    pub year: i32,
    pub week_label: String,
    pub previous_week: u32,
    pub previous_year: i32,
    pub national: NationalSummaryView,
    pub regions: Vec<RegionSummaryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NationalSummaryView {
    pub totals: AggregateRow,
    pub previous_totals: AggregateRow,
    pub cards: Vec<CounterCardView>,
    pub kpi: VacancyKpiView,
}

#[derive(Debug, Clone, Serialize)]
pub struct CounterCardView {
    pub metric: &'static str,
    pub title: &'static str,
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
    pub favorable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<StatusTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_label: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VacancyKpiView {
    pub vacancy_percent: f64,
    pub target_percent: f64,
    pub fulfillment: f64,
    pub tier: StatusTier,
    pub tier_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionSummaryView {
    pub region_id: &'static str,
    pub region_name: &'static str,
    pub editor: &'static str,
    pub rows: Vec<UnitRowView>,
    pub totals: RegionTotalsView,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitRowView {
    pub unit_id: &'static str,
    pub unit_name: &'static str,
    pub headcount: MetricDiff,
    pub hires: MetricDiff,
    pub terminations: MetricDiff,
    pub vacancies_opening: MetricDiff,
    pub vacancies_real: f64,
    pub vacancies_closing: f64,
    pub vacancy_percent: f64,
    pub fulfillment: f64,
    pub tier: StatusTier,
    pub tier_label: &'static str,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionTotalsView {
    pub headcount: MetricDiff,
    pub hires: MetricDiff,
    pub terminations: MetricDiff,
    pub vacancies_opening: MetricDiff,
    pub vacancies_real: f64,
    pub vacancy_percent: f64,
    pub fulfillment: f64,
    pub tier: StatusTier,
    pub tier_label: &'static str,
}
