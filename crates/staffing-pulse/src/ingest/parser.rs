use csv::StringRecord;

use super::columns::ColumnMap;
use crate::dashboard::{EntryDraft, WeekOfYear};

/// Strips wrapping quotes and whitespace from a raw cell.
pub(crate) fn clean_cell(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}

/// Integer-prefix parse for counter cells: strip everything but digits, dot
/// and minus, then read the leading integer. Junk becomes 0, so "1,234"
/// reads as 1234 and "12.7" as 12.
pub(crate) fn parse_count(raw: &str) -> f64 {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let mut digits = String::new();
    let mut chars = filtered.chars().peekable();
    if chars.peek() == Some(&'-') {
        digits.push('-');
        chars.next();
    }
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(*c);
            chars.next();
        } else {
            break;
        }
    }

    digits.parse::<i64>().map(|value| value as f64).unwrap_or(0.0)
}

/// One record to one draft. Blank rows and rows without a unit id yield
/// nothing; unit ids are uppercased on the way in.
pub(crate) fn draft_from_record(
    record: &StringRecord,
    columns: &ColumnMap,
    default_week: WeekOfYear,
) -> Option<EntryDraft> {
    if record.iter().all(|cell| cell.trim().is_empty()) {
        return None;
    }

    let unit_id = columns
        .unit_id
        .and_then(|index| record.get(index))
        .map(clean_cell)
        .unwrap_or_default()
        .to_uppercase();
    if unit_id.is_empty() {
        return None;
    }

    let week = match columns.week.and_then(|index| record.get(index)) {
        Some(cell) => parse_count(cell).max(0.0) as u32,
        None => default_week.week,
    };
    let year = match columns.year.and_then(|index| record.get(index)) {
        Some(cell) => parse_count(cell) as i32,
        None => default_week.year,
    };

    Some(EntryDraft {
        unit_id,
        week: Some(week),
        year: Some(year),
        headcount: counter(record, columns.headcount),
        hires: counter(record, columns.hires),
        terminations: counter(record, columns.terminations),
        vacancies_opening: counter(record, columns.vacancies_opening),
        vacancies_real: counter(record, columns.vacancies_real),
        notes: columns
            .notes
            .and_then(|index| record.get(index))
            .map(clean_cell),
    })
}

fn counter(record: &StringRecord, index: Option<usize>) -> Option<f64> {
    index
        .and_then(|index| record.get(index))
        .map(parse_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_reads_integer_prefixes() {
        assert_eq!(parse_count("1,234"), 1234.0);
        assert_eq!(parse_count("12.7"), 12.0);
        assert_eq!(parse_count(" -3 "), -3.0);
        assert_eq!(parse_count("$ 450"), 450.0);
        assert_eq!(parse_count(".5"), 0.0);
        assert_eq!(parse_count(""), 0.0);
        assert_eq!(parse_count("n/a"), 0.0);
    }

    #[test]
    fn clean_cell_strips_quotes_and_whitespace() {
        assert_eq!(clean_cell("  \"U7\"  "), "U7");
        assert_eq!(clean_cell("plain"), "plain");
        assert_eq!(clean_cell("   "), "");
    }

    #[test]
    fn blank_and_unitless_records_are_dropped() {
        let columns = ColumnMap::standard();
        let week = WeekOfYear::new(14, 2026);

        let blank = StringRecord::from(vec!["", "", ""]);
        assert!(draft_from_record(&blank, &columns, week).is_none());

        let unitless = StringRecord::from(vec!["", "14", "2026", "100"]);
        assert!(draft_from_record(&unitless, &columns, week).is_none());
    }

    #[test]
    fn unmapped_period_columns_fall_back_to_the_default_week() {
        let columns = ColumnMap {
            unit_id: Some(0),
            headcount: Some(1),
            ..ColumnMap::default()
        };
        let record = StringRecord::from(vec!["u9", "850"]);

        let draft = draft_from_record(&record, &columns, WeekOfYear::new(7, 2026))
            .expect("row with a unit id parses");
        assert_eq!(draft.unit_id, "U9");
        assert_eq!(draft.week, Some(7));
        assert_eq!(draft.year, Some(2026));
        assert_eq!(draft.headcount, Some(850.0));
        assert_eq!(draft.hires, None);
    }
}
