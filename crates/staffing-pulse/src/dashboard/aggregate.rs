use serde::Serialize;

use super::compliance::{kpi_fulfillment, vacancy_percent_of};
use super::domain::{number_or_zero, GoalDirection, StatusTier, TargetConfig, WeeklyEntry};

/// Summed totals for an arbitrary entry set, with the semaphore recomputed
/// from the totals. The tier always comes from the aggregate percentage,
/// never from averaging per-unit tiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub headcount: f64,
    pub hires: f64,
    pub terminations: f64,
    pub vacancies_opening: f64,
    pub vacancies_real: f64,
    pub vacancy_percent: f64,
    pub fulfillment: f64,
    pub tier: StatusTier,
}

impl AggregateRow {
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = &'a WeeklyEntry>,
        config: &TargetConfig,
    ) -> Self {
        let mut headcount = 0.0;
        let mut hires = 0.0;
        let mut terminations = 0.0;
        let mut vacancies_opening = 0.0;
        let mut vacancies_real = 0.0;

        for entry in entries {
            headcount += number_or_zero(entry.headcount);
            hires += number_or_zero(entry.hires);
            terminations += number_or_zero(entry.terminations);
            vacancies_opening += number_or_zero(entry.vacancies_opening);
            vacancies_real += number_or_zero(entry.vacancies_real);
        }

        let vacancy_percent = vacancy_percent_of(vacancies_real, headcount);
        let fulfillment = kpi_fulfillment(vacancy_percent, config.targets.vacancy_percent_target);
        let tier = config.thresholds.tier_for(fulfillment);

        Self {
            headcount,
            hires,
            terminations,
            vacancies_opening,
            vacancies_real,
            vacancy_percent,
            fulfillment,
            tier,
        }
    }
}

/// Week-over-week movement of one counter. `favorable` already accounts for
/// the counter's direction, so presentation layers never re-derive the sign
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDiff {
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
    pub favorable: bool,
}

impl MetricDiff {
    pub fn between(current: f64, previous: f64, direction: GoalDirection) -> Self {
        let delta = current - previous;
        Self {
            current,
            previous,
            delta,
            favorable: direction.favors(delta),
        }
    }
}
