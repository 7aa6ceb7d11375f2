use super::super::aggregate::{AggregateRow, MetricDiff};
use super::super::board::WeeklyBoard;
use super::super::compliance::{counter_fulfillment, EntryMetrics};
use super::super::directory::{BusinessUnit, Region, RegionDirectory};
use super::super::domain::{GoalDirection, StatusTier, TargetConfig, WeekOfYear};
use super::views::{
    CounterCardView, NationalSummaryView, RegionSummaryView, RegionTotalsView, UnitRowView,
    VacancyKpiView, WeeklyReportSummary,
};

/// Full dashboard payload for one reporting week: national cards plus one
/// table per region.
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    pub week: WeekOfYear,
    pub previous_week: WeekOfYear,
    pub national: NationalSummary,
    pub regions: Vec<RegionSummary>,
}

impl WeeklyReport {
    pub fn build(
        board: &WeeklyBoard,
        directory: &RegionDirectory,
        config: &TargetConfig,
        week: WeekOfYear,
    ) -> Self {
        let national = NationalSummary::build(board, config, week);
        let regions = directory
            .regions()
            .iter()
            .map(|region| RegionSummary::build(board, directory, config, region, week))
            .collect();

        Self {
            week,
            previous_week: week.previous(),
            national,
            regions,
        }
    }

    pub fn summary(&self) -> WeeklyReportSummary {
        WeeklyReportSummary {
            week: self.week.week,
            year: self.week.year,
            week_label: self.week.label(),
            previous_week: self.previous_week.week,
            previous_year: self.previous_week.year,
            national: self.national.to_view(),
            regions: self.regions.iter().map(RegionSummary::to_view).collect(),
        }
    }
}

/// National rollup over every entry captured for the week, including units
/// the directory does not list; compared against the previous period.
#[derive(Debug, Clone)]
pub struct NationalSummary {
    pub totals: AggregateRow,
    pub previous_totals: AggregateRow,
    pub headcount: CounterCard,
    pub hires: CounterCard,
    pub terminations: CounterCard,
    pub vacancies: CounterCard,
    pub kpi: VacancyKpi,
}

impl NationalSummary {
    pub(crate) fn build(board: &WeeklyBoard, config: &TargetConfig, week: WeekOfYear) -> Self {
        let totals = AggregateRow::from_entries(board.week_entries(week), config);
        let previous_totals =
            AggregateRow::from_entries(board.week_entries(week.previous()), config);

        // The headcount card carries no target on the dashboard.
        let headcount = CounterCard {
            diff: MetricDiff::between(
                totals.headcount,
                previous_totals.headcount,
                GoalDirection::HigherIsBetter,
            ),
            target: None,
            fulfillment: None,
            tier: None,
        };

        let hires = CounterCard::with_target(
            totals.hires,
            previous_totals.hires,
            config.targets.hires_target,
            GoalDirection::HigherIsBetter,
            config,
        );

        let terminations = CounterCard::with_target(
            totals.terminations,
            previous_totals.terminations,
            config.targets.terminations_limit,
            GoalDirection::LowerIsBetter,
            config,
        );

        // The vacancies counter is painted with the KPI tier, not with a
        // fulfillment of its own.
        let vacancies = CounterCard {
            diff: MetricDiff::between(
                totals.vacancies_real,
                previous_totals.vacancies_real,
                GoalDirection::LowerIsBetter,
            ),
            target: Some(config.targets.vacancies_target),
            fulfillment: None,
            tier: Some(totals.tier),
        };

        let kpi = VacancyKpi {
            vacancy_percent: totals.vacancy_percent,
            target_percent: config.targets.vacancy_percent_target,
            fulfillment: totals.fulfillment,
            tier: totals.tier,
        };

        Self {
            totals,
            previous_totals,
            headcount,
            hires,
            terminations,
            vacancies,
            kpi,
        }
    }

    pub(crate) fn to_view(&self) -> NationalSummaryView {
        NationalSummaryView {
            totals: self.totals.clone(),
            previous_totals: self.previous_totals.clone(),
            cards: vec![
                self.headcount.to_view("headcount", "Headcount"),
                self.hires.to_view("hires", "Hires"),
                self.terminations.to_view("terminations", "Terminations"),
                self.vacancies.to_view("vacancies", "Operating Vacancies"),
            ],
            kpi: self.kpi.to_view(),
        }
    }
}

/// One national summary card: a counter against last week and, where the
/// dashboard shows one, against its target.
#[derive(Debug, Clone)]
pub struct CounterCard {
    pub diff: MetricDiff,
    pub target: Option<f64>,
    pub fulfillment: Option<f64>,
    pub tier: Option<StatusTier>,
}

impl CounterCard {
    fn with_target(
        current: f64,
        previous: f64,
        target: f64,
        direction: GoalDirection,
        config: &TargetConfig,
    ) -> Self {
        let fulfillment = counter_fulfillment(current, target, direction);
        Self {
            diff: MetricDiff::between(current, previous, direction),
            target: Some(target),
            fulfillment: Some(fulfillment),
            tier: Some(config.thresholds.tier_for(fulfillment)),
        }
    }

    pub(crate) fn to_view(&self, metric: &'static str, title: &'static str) -> CounterCardView {
        CounterCardView {
            metric,
            title,
            current: self.diff.current,
            previous: self.diff.previous,
            delta: self.diff.delta,
            favorable: self.diff.favorable,
            target: self.target,
            fulfillment: self.fulfillment,
            tier: self.tier,
            tier_label: self.tier.map(StatusTier::label),
        }
    }
}

/// The headline semaphore: aggregate vacancy percentage against target.
#[derive(Debug, Clone)]
pub struct VacancyKpi {
    pub vacancy_percent: f64,
    pub target_percent: f64,
    pub fulfillment: f64,
    pub tier: StatusTier,
}

impl VacancyKpi {
    pub(crate) fn to_view(&self) -> VacancyKpiView {
        VacancyKpiView {
            vacancy_percent: self.vacancy_percent,
            target_percent: self.target_percent,
            fulfillment: self.fulfillment,
            tier: self.tier,
            tier_label: self.tier.label(),
        }
    }
}

/// One region's table: a row for every directory unit plus footer totals.
#[derive(Debug, Clone)]
pub struct RegionSummary {
    pub region: Region,
    pub rows: Vec<UnitRow>,
    pub totals: RegionTotals,
}

impl RegionSummary {
    pub(crate) fn build(
        board: &WeeklyBoard,
        directory: &RegionDirectory,
        config: &TargetConfig,
        region: &Region,
        week: WeekOfYear,
    ) -> Self {
        let previous_week = week.previous();
        let rows: Vec<UnitRow> = directory
            .units_of(region.id)
            .into_iter()
            .map(|unit| UnitRow::build(board, config, unit, week, previous_week))
            .collect();

        let totals = RegionTotals::from_rows(&rows, config);

        Self {
            region: region.clone(),
            rows,
            totals,
        }
    }

    pub(crate) fn to_view(&self) -> RegionSummaryView {
        RegionSummaryView {
            region_id: self.region.id,
            region_name: self.region.name,
            editor: self.region.editor,
            rows: self.rows.iter().map(UnitRow::to_view).collect(),
            totals: self.totals.to_view(),
        }
    }
}

/// One dashboard table row: a unit's current week against the previous one.
/// Units without a capture show as zero rows on both sides.
#[derive(Debug, Clone)]
pub struct UnitRow {
    pub unit: BusinessUnit,
    pub current: EntryMetrics,
    pub previous: EntryMetrics,
    pub headcount: MetricDiff,
    pub hires: MetricDiff,
    pub terminations: MetricDiff,
    pub vacancies_opening: MetricDiff,
}

impl UnitRow {
    fn build(
        board: &WeeklyBoard,
        config: &TargetConfig,
        unit: &BusinessUnit,
        week: WeekOfYear,
        previous_week: WeekOfYear,
    ) -> Self {
        let current_entry = board.entry_or_zero(unit.id, week);
        let previous_entry = board.entry_or_zero(unit.id, previous_week);

        let headcount = MetricDiff::between(
            current_entry.headcount,
            previous_entry.headcount,
            GoalDirection::HigherIsBetter,
        );
        let hires = MetricDiff::between(
            current_entry.hires,
            previous_entry.hires,
            GoalDirection::HigherIsBetter,
        );
        let terminations = MetricDiff::between(
            current_entry.terminations,
            previous_entry.terminations,
            GoalDirection::LowerIsBetter,
        );
        let vacancies_opening = MetricDiff::between(
            current_entry.vacancies_opening,
            previous_entry.vacancies_opening,
            GoalDirection::LowerIsBetter,
        );

        Self {
            unit: unit.clone(),
            current: EntryMetrics::derive(&current_entry, config),
            previous: EntryMetrics::derive(&previous_entry, config),
            headcount,
            hires,
            terminations,
            vacancies_opening,
        }
    }

    pub(crate) fn to_view(&self) -> UnitRowView {
        UnitRowView {
            unit_id: self.unit.id,
            unit_name: self.unit.name,
            headcount: self.headcount,
            hires: self.hires,
            terminations: self.terminations,
            vacancies_opening: self.vacancies_opening,
            vacancies_real: self.current.entry.vacancies_real,
            vacancies_closing: self.current.vacancies_closing,
            vacancy_percent: self.current.vacancy_percent,
            fulfillment: self.current.fulfillment,
            tier: self.current.tier,
            tier_label: self.current.tier.label(),
            notes: self.current.entry.notes.clone(),
        }
    }
}

/// Region footer: summed diffs plus the aggregate semaphore from the summed
/// totals.
#[derive(Debug, Clone)]
pub struct RegionTotals {
    pub headcount: MetricDiff,
    pub hires: MetricDiff,
    pub terminations: MetricDiff,
    pub vacancies_opening: MetricDiff,
    pub vacancies_real: f64,
    pub vacancy_percent: f64,
    pub fulfillment: f64,
    pub tier: StatusTier,
}

impl RegionTotals {
    fn from_rows(rows: &[UnitRow], config: &TargetConfig) -> Self {
        let current =
            AggregateRow::from_entries(rows.iter().map(|row| &row.current.entry), config);
        let previous =
            AggregateRow::from_entries(rows.iter().map(|row| &row.previous.entry), config);

        Self {
            headcount: MetricDiff::between(
                current.headcount,
                previous.headcount,
                GoalDirection::HigherIsBetter,
            ),
            hires: MetricDiff::between(current.hires, previous.hires, GoalDirection::HigherIsBetter),
            terminations: MetricDiff::between(
                current.terminations,
                previous.terminations,
                GoalDirection::LowerIsBetter,
            ),
            vacancies_opening: MetricDiff::between(
                current.vacancies_opening,
                previous.vacancies_opening,
                GoalDirection::LowerIsBetter,
            ),
            vacancies_real: current.vacancies_real,
            vacancy_percent: current.vacancy_percent,
            fulfillment: current.fulfillment,
            tier: current.tier,
        }
    }

    pub(crate) fn to_view(&self) -> RegionTotalsView {
        RegionTotalsView {
            headcount: self.headcount,
            hires: self.hires,
            terminations: self.terminations,
            vacancies_opening: self.vacancies_opening,
            vacancies_real: self.vacancies_real,
            vacancy_percent: self.vacancy_percent,
            fulfillment: self.fulfillment,
            tier: self.tier,
            tier_label: self.tier.label(),
        }
    }
}
