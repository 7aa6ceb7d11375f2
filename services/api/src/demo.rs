use clap::Args;
use std::path::PathBuf;

use staffing_pulse::dashboard::report::CounterCard;
use staffing_pulse::dashboard::{
    build_trend, RegionDirectory, TargetConfig, TrendPoint, WeekOfYear, WeeklyBoard, WeeklyEntry,
    WeeklyReport, DEFAULT_TREND_WINDOW,
};
use staffing_pulse::error::AppError;
use staffing_pulse::ingest::{CaptureSheetImporter, ColumnMap};

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Capture sheet (CSV) holding the captured entries
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Reporting week, 1-52 (defaults to the current ISO week)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=52))]
    pub(crate) week: Option<u32>,
    /// Reporting year (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Treat the sheet's first record as a header row
    #[arg(long)]
    pub(crate) skip_header: bool,
    /// Print the trailing trend table as well
    #[arg(long)]
    pub(crate) trend: bool,
    /// Emit the full summary as JSON instead of tables
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting week for the seeded cycle, 1-52 (defaults to the current ISO week)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=52))]
    pub(crate) week: Option<u32>,
    /// Reporting year for the seeded cycle (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
}

pub(crate) fn run_weekly_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        input,
        week,
        year,
        skip_header,
        trend,
        json,
    } = args;

    let period = resolve_period(week, year);
    let columns = ColumnMap::standard().with_skip_header(skip_header);
    let entries = CaptureSheetImporter::from_path(&input, &columns, period)?;
    let board = WeeklyBoard::from_entries(entries);

    let report = WeeklyReport::build(
        &board,
        &RegionDirectory::standard(),
        &TargetConfig::default(),
        period,
    );

    if json {
        match serde_json::to_string_pretty(&report.summary()) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("summary unavailable: {err}"),
        }
        return Ok(());
    }

    render_weekly_report(&report, true);
    if trend {
        render_trend(&build_trend(board.entries(), DEFAULT_TREND_WINDOW));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let period = resolve_period(args.week, args.year);

    println!("Weekly dashboard demo");
    let board = seeded_board(period);
    let report = WeeklyReport::build(
        &board,
        &RegionDirectory::standard(),
        &TargetConfig::default(),
        period,
    );

    render_weekly_report(&report, false);
    render_trend(&build_trend(board.entries(), DEFAULT_TREND_WINDOW));

    match serde_json::to_string_pretty(&report.summary().national.kpi) {
        Ok(payload) => println!("\nKPI payload:\n{payload}"),
        Err(err) => println!("\nKPI payload unavailable: {err}"),
    }

    Ok(())
}

fn resolve_period(week: Option<u32>, year: Option<i32>) -> WeekOfYear {
    let current = WeekOfYear::current();
    WeekOfYear::new(week.unwrap_or(current.week), year.unwrap_or(current.year))
}

/// Deterministic two-week capture across all five regions, tuned so the demo
/// shows every semaphore color.
fn seeded_board(period: WeekOfYear) -> WeeklyBoard {
    let previous = period.previous();
    let seed = [
        ("U1", (1200.0, 30.0, 12.0, 40.0, 55.0), (1210.0, 35.0, 18.0, 55.0, 52.0)),
        ("U2", (800.0, 10.0, 8.0, 25.0, 30.0), (795.0, 9.0, 11.0, 30.0, 34.0)),
        ("U5", (950.0, 14.0, 9.0, 30.0, 41.0), (955.0, 11.0, 6.0, 41.0, 38.0)),
        ("U9", (450.0, 6.0, 2.0, 10.0, 12.0), (455.0, 9.0, 3.0, 12.0, 10.0)),
        ("U12", (620.0, 8.0, 7.0, 22.0, 39.0), (618.0, 6.0, 9.0, 39.0, 44.0)),
        ("U15", (150.0, 2.0, 1.0, 4.0, 3.0), (152.0, 3.0, 1.0, 3.0, 2.0)),
    ];

    let mut board = WeeklyBoard::new();
    for (unit_id, last_week, this_week) in seed {
        board.upsert(seed_entry(unit_id, previous, last_week));
        board.upsert(seed_entry(unit_id, period, this_week));
    }
    board
}

fn seed_entry(unit_id: &str, week: WeekOfYear, values: (f64, f64, f64, f64, f64)) -> WeeklyEntry {
    let (headcount, hires, terminations, vacancies_opening, vacancies_real) = values;
    WeeklyEntry {
        unit_id: unit_id.to_string(),
        week: week.week,
        year: week.year,
        headcount,
        hires,
        terminations,
        vacancies_opening,
        vacancies_real,
        notes: String::new(),
    }
}

pub(crate) fn render_weekly_report(report: &WeeklyReport, imported: bool) {
    println!(
        "Reporting week {} of {} (compared to week {} of {})",
        report.week.week, report.week.year, report.previous_week.week, report.previous_week.year
    );
    if imported {
        println!("Data source: capture sheet import");
    } else {
        println!("Data source: seeded sample data");
    }

    let national = &report.national;
    println!("\nNational summary");
    print_card("Headcount", &national.headcount);
    print_card("Hires", &national.hires);
    print_card("Terminations", &national.terminations);
    print_card("Operating vacancies", &national.vacancies);
    println!(
        "- KPI: {:.2}% vacancy against {:.2}% target, fulfillment {:.1}% ({})",
        national.kpi.vacancy_percent,
        national.kpi.target_percent,
        national.kpi.fulfillment,
        national.kpi.tier.label()
    );

    for region in &report.regions {
        println!("\nRegion {} ({})", region.region.name, region.region.editor);
        for row in &region.rows {
            println!(
                "- {} {}: headcount {:.0} ({:+.0}), vacancies {:.0} ({:.2}%), fulfillment {:.1}% ({})",
                row.unit.id,
                row.unit.name,
                row.headcount.current,
                row.headcount.delta,
                row.current.entry.vacancies_real,
                row.current.vacancy_percent,
                row.current.fulfillment,
                row.current.tier.label()
            );
        }
        let totals = &region.totals;
        println!(
            "  Totals: headcount {:.0} ({:+.0}), vacancies {:.0} ({:.2}%), fulfillment {:.1}% ({})",
            totals.headcount.current,
            totals.headcount.delta,
            totals.vacancies_real,
            totals.vacancy_percent,
            totals.fulfillment,
            totals.tier.label()
        );
    }
}

fn print_card(title: &str, card: &CounterCard) {
    let movement = if card.diff.favorable {
        "improving"
    } else {
        "slipping"
    };
    let mut line = format!(
        "- {}: {:.0} (previous {:.0}, {:+.0}, {})",
        title, card.diff.current, card.diff.previous, card.diff.delta, movement
    );
    if let Some(target) = card.target {
        line.push_str(&format!(", target {target:.0}"));
    }
    if let Some(fulfillment) = card.fulfillment {
        line.push_str(&format!(", fulfillment {fulfillment:.1}%"));
    }
    if let Some(tier) = card.tier {
        line.push_str(&format!(" ({})", tier.label()));
    }
    println!("{line}");
}

pub(crate) fn render_trend(points: &[TrendPoint]) {
    if points.is_empty() {
        println!("\nTrend: no captured history");
        return;
    }

    println!("\nTrend (last {} periods)", points.len());
    for point in points {
        println!(
            "- {}: hires {:.0}, terminations {:.0}, vacancies {:.0}, headcount {:.0}",
            point.label, point.hires, point.terminations, point.vacancies_real, point.headcount
        );
    }
}
