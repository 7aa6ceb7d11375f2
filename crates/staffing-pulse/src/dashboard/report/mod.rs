mod summary;
pub mod views;

pub use summary::{
    CounterCard, NationalSummary, RegionSummary, RegionTotals, UnitRow, VacancyKpi, WeeklyReport,
};
