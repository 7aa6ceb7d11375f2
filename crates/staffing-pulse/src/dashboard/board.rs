use std::collections::BTreeMap;

use super::domain::{EntryKey, WeekOfYear, WeeklyEntry};

/// The entry collection, keyed by (year, week, unit). A write with a
/// matching key replaces the stored record; core logic never deletes.
#[derive(Debug, Clone, Default)]
pub struct WeeklyBoard {
    entries: BTreeMap<EntryKey, WeeklyEntry>,
}

impl WeeklyBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = WeeklyEntry>) -> Self {
        let mut board = Self::new();
        board.merge(entries);
        board
    }

    /// Insert or replace; returns the record that was displaced, if any.
    pub fn upsert(&mut self, entry: WeeklyEntry) -> Option<WeeklyEntry> {
        self.entries.insert(entry.key(), entry)
    }

    /// Bulk upsert, last write wins per key; returns how many records were
    /// written.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = WeeklyEntry>) -> usize {
        let mut written = 0;
        for entry in entries {
            self.upsert(entry);
            written += 1;
        }
        written
    }

    pub fn get(&self, unit_id: &str, week: WeekOfYear) -> Option<&WeeklyEntry> {
        self.entries.get(&EntryKey {
            year: week.year,
            week: week.week,
            unit_id: unit_id.to_string(),
        })
    }

    /// The stored record, or a synthesized zero row when nothing was
    /// captured for the unit/week.
    pub fn entry_or_zero(&self, unit_id: &str, week: WeekOfYear) -> WeeklyEntry {
        self.get(unit_id, week)
            .cloned()
            .unwrap_or_else(|| WeeklyEntry::zero_row(unit_id, week))
    }

    /// Every entry captured for one week, any unit.
    pub fn week_entries(&self, week: WeekOfYear) -> Vec<&WeeklyEntry> {
        self.entries
            .values()
            .filter(|entry| entry.week == week.week && entry.year == week.year)
            .collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &WeeklyEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
