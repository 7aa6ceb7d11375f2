use super::domain::{number_or_zero, GoalDirection, StatusTier, TargetConfig, WeeklyEntry};

/// Derived figures for one entry. Never stored; recomputed from the entry
/// and the current configuration on every read so a config change can never
/// leave a stale tier behind.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMetrics {
    pub entry: WeeklyEntry,
    pub vacancies_closing: f64,
    pub vacancy_percent: f64,
    pub fulfillment: f64,
    pub tier: StatusTier,
}

impl EntryMetrics {
    pub fn derive(entry: &WeeklyEntry, config: &TargetConfig) -> Self {
        let headcount = number_or_zero(entry.headcount);
        let hires = number_or_zero(entry.hires);
        let terminations = number_or_zero(entry.terminations);
        let vacancies_opening = number_or_zero(entry.vacancies_opening);
        let vacancies_real = number_or_zero(entry.vacancies_real);

        let vacancies_closing = vacancies_opening + terminations - hires;
        let vacancy_percent = vacancy_percent_of(vacancies_real, headcount);
        let fulfillment = kpi_fulfillment(vacancy_percent, config.targets.vacancy_percent_target);
        let tier = config.thresholds.tier_for(fulfillment);

        Self {
            entry: entry.clone(),
            vacancies_closing,
            vacancy_percent,
            fulfillment,
            tier,
        }
    }
}

/// Share of the staffed count standing vacant, as a percentage. Zero when
/// nobody is staffed.
pub fn vacancy_percent_of(vacancies_real: f64, headcount: f64) -> f64 {
    if headcount > 0.0 {
        (vacancies_real / headcount) * 100.0
    } else {
        0.0
    }
}

/// Fulfillment against the vacancy-rate target, inversely proportional: a
/// real rate below target scores above 100. A zero rate counts as fully
/// compliant regardless of target; that policy is deliberate.
pub fn kpi_fulfillment(vacancy_percent: f64, target_percent: f64) -> f64 {
    if vacancy_percent == 0.0 {
        100.0
    } else {
        (target_percent / vacancy_percent) * 100.0
    }
}

/// Fulfillment of a plain counter against its target. Maximization counters
/// score progress toward the goal; minimization counters invert, with a
/// zero count scoring 100.
pub fn counter_fulfillment(current: f64, target: f64, direction: GoalDirection) -> f64 {
    match direction {
        GoalDirection::HigherIsBetter => {
            if target == 0.0 {
                0.0
            } else {
                (current / target) * 100.0
            }
        }
        GoalDirection::LowerIsBetter => {
            if current == 0.0 {
                100.0
            } else {
                (target / current) * 100.0
            }
        }
    }
}
