use super::common::*;
use crate::dashboard::{EntryDraft, StatusTier, Targets, Thresholds, WeekOfYear};

#[test]
fn previous_steps_back_within_the_year() {
    assert_eq!(week(15, 2026).previous(), week(14, 2026));
    assert_eq!(week(2, 2026).previous(), week(1, 2026));
    assert_eq!(week(52, 2026).previous(), week(51, 2026));
}

#[test]
fn previous_wraps_week_one_to_the_prior_year() {
    assert_eq!(week(1, 2026).previous(), week(52, 2025));
}

#[test]
fn previous_treats_week_zero_like_week_one() {
    // Out-of-range input still lands on a defined period.
    assert_eq!(week(0, 2026).previous(), week(52, 2025));
}

#[test]
fn sort_key_orders_across_year_boundaries() {
    let late = week(52, 2025).sort_key();
    let early = week(1, 2026).sort_key();
    assert!(late < early);
}

#[test]
fn week_labels_use_the_period_prefix() {
    assert_eq!(week(7, 2026).label(), "S7");
    assert_eq!(week(52, 2025).label(), "S52");
}

#[test]
fn current_week_stays_in_range() {
    let now = WeekOfYear::current();
    assert!((1..=52).contains(&now.week));
}

#[test]
fn normalize_is_idempotent() {
    let draft = EntryDraft {
        unit_id: "U3".to_string(),
        week: Some(14),
        year: Some(2026),
        headcount: Some(980.0),
        hires: Some(f64::NAN),
        terminations: None,
        vacancies_opening: Some(18.0),
        vacancies_real: Some(22.0),
        notes: None,
    };

    let once = draft.normalize();
    let twice = EntryDraft::from(once.clone()).normalize();
    assert_eq!(once, twice);
}

#[test]
fn normalize_fills_gaps_with_zero() {
    let draft = EntryDraft {
        unit_id: "U7".to_string(),
        ..EntryDraft::default()
    };

    let entry = draft.normalize();
    assert_eq!(entry.week, 0);
    assert_eq!(entry.year, 0);
    assert_eq!(entry.headcount, 0.0);
    assert_eq!(entry.hires, 0.0);
    assert_eq!(entry.notes, "");
}

#[test]
fn tiers_carry_stable_labels_and_wire_names() {
    assert_eq!(StatusTier::Green.label(), "Healthy");
    assert_eq!(StatusTier::Yellow.label(), "Watch");
    assert_eq!(StatusTier::Red.label(), "Critical");

    let wire = serde_json::to_string(&StatusTier::Yellow).expect("tier serializes");
    assert_eq!(wire, "\"yellow\"");
    assert_eq!(
        StatusTier::ordered(),
        [StatusTier::Green, StatusTier::Yellow, StatusTier::Red]
    );
}

#[test]
fn default_goals_match_the_national_commitments() {
    let targets = Targets::default();
    assert_close(targets.hires_target, 200.0);
    assert_close(targets.terminations_limit, 100.0);
    assert_close(targets.vacancies_target, 300.0);
    assert_close(targets.vacancy_percent_target, 5.0);
    assert_close(targets.headcount_target, 5500.0);

    let thresholds = Thresholds::default();
    assert_close(thresholds.green, 90.0);
    assert_close(thresholds.yellow, 80.0);
}

#[test]
fn config_deserializes_with_partial_overrides() {
    let config: crate::dashboard::TargetConfig =
        serde_json::from_str(r#"{"targets":{"vacancy_percent_target":4.0}}"#)
            .expect("partial config parses");

    assert_close(config.targets.vacancy_percent_target, 4.0);
    assert_close(config.targets.hires_target, 200.0);
    assert_close(config.thresholds.green, 90.0);
}
