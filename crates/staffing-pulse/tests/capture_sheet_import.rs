use std::io::Cursor;

use staffing_pulse::dashboard::{
    RegionDirectory, TargetConfig, WeekOfYear, WeeklyBoard, WeeklyReport,
};
use staffing_pulse::ingest::{CaptureSheetError, CaptureSheetImporter, ColumnMap};

fn period() -> WeekOfYear {
    WeekOfYear::new(14, 2026)
}

#[test]
fn a_sheet_flows_into_a_weekly_report() {
    let csv = "U1,14,2026,1200,30,12,40,55,steady\n\
               U2,14,2026,800,10,8,25,30,\n\
               U9,14,2026,450,6,2,10,12,catching up\n";

    let entries =
        CaptureSheetImporter::from_reader(Cursor::new(csv), &ColumnMap::standard(), period())
            .expect("sheet imports");
    let board = WeeklyBoard::from_entries(entries);

    let report = WeeklyReport::build(
        &board,
        &RegionDirectory::standard(),
        &TargetConfig::default(),
        period(),
    );
    let summary = report.summary();

    assert_eq!(summary.national.totals.headcount, 2450.0);
    let centro = &summary.regions[0];
    assert_eq!(centro.rows[0].unit_id, "U1");
    assert_eq!(centro.rows[0].notes, "steady");
    assert_eq!(centro.rows[0].headcount.current, 1200.0);
    let sur = &summary.regions[2];
    assert_eq!(sur.rows[0].unit_id, "U9");
    assert_eq!(sur.rows[0].notes, "catching up");
}

#[test]
fn remapped_columns_read_shifted_sheets() {
    // Exported layout: notes first, then unit, headcount, vacancies.
    let columns = ColumnMap {
        notes: Some(0),
        unit_id: Some(1),
        headcount: Some(2),
        vacancies_real: Some(3),
        ..ColumnMap::default()
    }
    .with_skip_header(true);

    let csv = "comment,unit,people,vacant\n\
               from mobile,U7,640,19\n";

    let entries = CaptureSheetImporter::from_reader(Cursor::new(csv), &columns, period())
        .expect("sheet imports");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].unit_id, "U7");
    assert_eq!(entries[0].week, 14, "period falls back to the request");
    assert_eq!(entries[0].year, 2026);
    assert_eq!(entries[0].headcount, 640.0);
    assert_eq!(entries[0].vacancies_real, 19.0);
    assert_eq!(entries[0].notes, "from mobile");
}

#[test]
fn from_path_reads_the_same_rows_as_from_reader() {
    let csv = "U1,14,2026,1200,30,12,40,55,\nU2,14,2026,800,10,8,25,30,\n";
    let path = std::env::temp_dir().join("staffing-pulse-capture-sheet.csv");
    std::fs::write(&path, csv).expect("write sheet");

    let from_file = CaptureSheetImporter::from_path(&path, &ColumnMap::standard(), period())
        .expect("file imports");
    let from_memory =
        CaptureSheetImporter::from_reader(Cursor::new(csv), &ColumnMap::standard(), period())
            .expect("reader imports");

    std::fs::remove_file(&path).ok();
    assert_eq!(from_file, from_memory);
}

#[test]
fn dirty_sheets_degrade_to_zero_instead_of_failing() {
    let csv = "\"u12\",14,2026,\" 1,020 \",n/a,3,--,8,\n\
               ,,,\n\
               U13,14,2026,500,7.9,2,10,12,\n";

    let entries =
        CaptureSheetImporter::from_reader(Cursor::new(csv), &ColumnMap::standard(), period())
            .expect("sheet imports");

    assert_eq!(entries.len(), 2, "blank rows are dropped");
    assert_eq!(entries[0].unit_id, "U12", "ids are canonicalized");
    assert_eq!(entries[0].headcount, 1020.0, "grouping junk is stripped");
    assert_eq!(entries[0].hires, 0.0, "words read as zero");
    assert_eq!(entries[0].vacancies_opening, 0.0);
    assert_eq!(entries[1].hires, 7.0, "decimals keep their integer part");
}

#[test]
fn sheets_with_no_usable_rows_error_out() {
    let csv = ",,,,\n,,,,\n";

    let result =
        CaptureSheetImporter::from_reader(Cursor::new(csv), &ColumnMap::standard(), period());

    assert!(matches!(result, Err(CaptureSheetError::NoValidRows)));
}
