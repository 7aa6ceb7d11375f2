//! Capture-sheet CSV intake: turns exported weekly sheets into normalized
//! entries ready for the board. Validation lives here so that the dashboard
//! core can stay infallible.

mod columns;
mod parser;

pub use columns::ColumnMap;

use std::io::Read;
use std::path::Path;

use crate::dashboard::{WeekOfYear, WeeklyEntry};

#[derive(Debug, thiserror::Error)]
pub enum CaptureSheetError {
    #[error("failed to read capture sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid capture sheet data: {0}")]
    Csv(#[from] csv::Error),
    #[error("no valid rows found")]
    NoValidRows,
}

pub struct CaptureSheetImporter;

impl CaptureSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        columns: &ColumnMap,
        default_week: WeekOfYear,
    ) -> Result<Vec<WeeklyEntry>, CaptureSheetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, columns, default_week)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        columns: &ColumnMap,
        default_week: WeekOfYear,
    ) -> Result<Vec<WeeklyEntry>, CaptureSheetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(columns.skip_header)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            if let Some(draft) = parser::draft_from_record(&record, columns, default_week) {
                entries.push(draft.normalize());
            }
        }

        if entries.is_empty() {
            return Err(CaptureSheetError::NoValidRows);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn default_week() -> WeekOfYear {
        WeekOfYear::new(14, 2026)
    }

    #[test]
    fn standard_layout_imports_normalized_entries() {
        let csv = "U1,14,2026,1200,35,18,40,52,steady\n\
                   u2,14,2026,900,12,9,22,31,\n";

        let entries = CaptureSheetImporter::from_reader(
            Cursor::new(csv),
            &ColumnMap::standard(),
            default_week(),
        )
        .expect("sheet imports");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].unit_id, "U1");
        assert_eq!(entries[0].headcount, 1200.0);
        assert_eq!(entries[0].hires, 35.0);
        assert_eq!(entries[0].notes, "steady");
        assert_eq!(entries[1].unit_id, "U2", "unit ids are uppercased");
        assert_eq!(entries[1].notes, "");
    }

    #[test]
    fn unmapped_columns_fall_back_to_defaults() {
        let columns = ColumnMap {
            unit_id: Some(0),
            headcount: Some(1),
            vacancies_real: Some(2),
            ..ColumnMap::default()
        };
        let csv = "U5,640,19\n";

        let entries =
            CaptureSheetImporter::from_reader(Cursor::new(csv), &columns, default_week())
                .expect("sheet imports");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].week, 14);
        assert_eq!(entries[0].year, 2026);
        assert_eq!(entries[0].headcount, 640.0);
        assert_eq!(entries[0].vacancies_real, 19.0);
        assert_eq!(entries[0].hires, 0.0);
        assert_eq!(entries[0].terminations, 0.0);
    }

    #[test]
    fn header_rows_are_skipped_when_requested() {
        let columns = ColumnMap::standard().with_skip_header(true);
        let csv = "unit,week,year,headcount,hires,terms,open,real,notes\n\
                   U9,14,2026,450,8,4,12,15,\n";

        let entries =
            CaptureSheetImporter::from_reader(Cursor::new(csv), &columns, default_week())
                .expect("sheet imports");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].unit_id, "U9");
    }

    #[test]
    fn junk_counts_read_as_zero() {
        let csv = "U3,14,2026,n/a,five,3,--,8,\n";

        let entries = CaptureSheetImporter::from_reader(
            Cursor::new(csv),
            &ColumnMap::standard(),
            default_week(),
        )
        .expect("sheet imports");

        assert_eq!(entries[0].headcount, 0.0);
        assert_eq!(entries[0].hires, 0.0);
        assert_eq!(entries[0].terminations, 3.0);
        assert_eq!(entries[0].vacancies_opening, 0.0);
        assert_eq!(entries[0].vacancies_real, 8.0);
    }

    #[test]
    fn sheets_without_usable_rows_are_rejected() {
        let csv = ",,,\n,,,\n";

        let result = CaptureSheetImporter::from_reader(
            Cursor::new(csv),
            &ColumnMap::standard(),
            default_week(),
        );

        assert!(matches!(result, Err(CaptureSheetError::NoValidRows)));
    }
}
