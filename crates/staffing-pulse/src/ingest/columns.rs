use serde::Deserialize;

/// Column positions of each capture field in an exported sheet. `None`
/// means the column is absent: the field falls back to its default (the
/// selected week/year for the period fields, zero for counters, empty for
/// notes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub unit_id: Option<usize>,
    pub week: Option<usize>,
    pub year: Option<usize>,
    pub headcount: Option<usize>,
    pub hires: Option<usize>,
    pub terminations: Option<usize>,
    pub vacancies_opening: Option<usize>,
    pub vacancies_real: Option<usize>,
    pub notes: Option<usize>,
    /// Treat the first record as a header row and drop it. Off by default;
    /// exports in the conventional layout ship without headers.
    pub skip_header: bool,
}

impl ColumnMap {
    /// The conventional export layout: the nine capture fields in order.
    pub fn standard() -> Self {
        Self {
            unit_id: Some(0),
            week: Some(1),
            year: Some(2),
            headcount: Some(3),
            hires: Some(4),
            terminations: Some(5),
            vacancies_opening: Some(6),
            vacancies_real: Some(7),
            notes: Some(8),
            skip_header: false,
        }
    }

    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }
}
