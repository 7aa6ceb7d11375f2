use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Green,
    Yellow,
    Red,
}

impl StatusTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Green, Self::Yellow, Self::Red]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Healthy",
            Self::Yellow => "Watch",
            Self::Red => "Critical",
        }
    }
}

/// Whether a counter improves by rising (hires, headcount) or by falling
/// (terminations, vacancy counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    HigherIsBetter,
    LowerIsBetter,
}

impl GoalDirection {
    pub fn favors(self, delta: f64) -> bool {
        match self {
            Self::HigherIsBetter => delta >= 0.0,
            Self::LowerIsBetter => delta <= 0.0,
        }
    }
}

/// Calendar coordinates of one reporting week. Weeks run 1-52; week 53 is
/// never produced, and week 1 looks back to week 52 of the prior year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekOfYear {
    pub year: i32,
    pub week: u32,
}

impl WeekOfYear {
    pub fn new(week: u32, year: i32) -> Self {
        Self { year, week }
    }

    pub fn previous(self) -> Self {
        if self.week <= 1 {
            Self {
                year: self.year - 1,
                week: 52,
            }
        } else {
            Self {
                year: self.year,
                week: self.week - 1,
            }
        }
    }

    /// Numeric ordering key; weeks stay below 1000 so buckets never collide
    /// across years.
    pub fn sort_key(self) -> i64 {
        i64::from(self.year) * 1000 + i64::from(self.week)
    }

    pub fn label(self) -> String {
        format!("S{}", self.week)
    }

    /// Today's ISO week, clamped into the modeled 1-52 range.
    pub fn current() -> Self {
        let iso = Local::now().date_naive().iso_week();
        Self {
            year: iso.year(),
            week: iso.week().min(52),
        }
    }
}

/// National goals the organization commits to for one reporting cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Targets {
    pub hires_target: f64,
    pub terminations_limit: f64,
    pub vacancies_target: f64,
    pub vacancy_percent_target: f64,
    pub headcount_target: f64,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            hires_target: 200.0,
            terminations_limit: 100.0,
            vacancies_target: 300.0,
            vacancy_percent_target: 5.0,
            headcount_target: 5500.0,
        }
    }
}

/// Fulfillment bands for the semaphore. Green >= yellow is expected but not
/// enforced; the bands describe descending fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub green: f64,
    pub yellow: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            green: 90.0,
            yellow: 80.0,
        }
    }
}

impl Thresholds {
    pub fn tier_for(&self, fulfillment: f64) -> StatusTier {
        if fulfillment >= self.green {
            StatusTier::Green
        } else if fulfillment >= self.yellow {
            StatusTier::Yellow
        } else {
            StatusTier::Red
        }
    }
}

/// Evaluation configuration. Always passed explicitly; nothing in the core
/// reads it from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub targets: Targets,
    pub thresholds: Thresholds,
}

/// Coercion rule applied to every numeric input: non-finite values become
/// zero.
pub(crate) fn number_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// One captured record: a business unit in one reporting week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyEntry {
    pub unit_id: String,
    pub week: u32,
    pub year: i32,
    pub headcount: f64,
    pub hires: f64,
    pub terminations: f64,
    pub vacancies_opening: f64,
    pub vacancies_real: f64,
    #[serde(default)]
    pub notes: String,
}

impl WeeklyEntry {
    /// Zero-valued record for a unit/week nobody has captured yet.
    pub fn zero_row(unit_id: impl Into<String>, week: WeekOfYear) -> Self {
        Self {
            unit_id: unit_id.into(),
            week: week.week,
            year: week.year,
            headcount: 0.0,
            hires: 0.0,
            terminations: 0.0,
            vacancies_opening: 0.0,
            vacancies_real: 0.0,
            notes: String::new(),
        }
    }

    pub fn week_of(&self) -> WeekOfYear {
        WeekOfYear {
            year: self.year,
            week: self.week,
        }
    }

    pub fn key(&self) -> EntryKey {
        EntryKey {
            year: self.year,
            week: self.week,
            unit_id: self.unit_id.clone(),
        }
    }
}

/// Composite identity of an entry. The board is keyed by this, so the
/// one-record-per-unit-per-week invariant holds structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryKey {
    pub year: i32,
    pub week: u32,
    pub unit_id: String,
}

/// Partially filled capture, the shape forms and imports hand over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryDraft {
    pub unit_id: String,
    pub week: Option<u32>,
    pub year: Option<i32>,
    pub headcount: Option<f64>,
    pub hires: Option<f64>,
    pub terminations: Option<f64>,
    pub vacancies_opening: Option<f64>,
    pub vacancies_real: Option<f64>,
    pub notes: Option<String>,
}

impl EntryDraft {
    /// Total coercion: missing or non-finite numerics become zero, missing
    /// notes become empty. Never fails, so synthesized "no data yet" rows
    /// flow through the same path as real captures.
    pub fn normalize(self) -> WeeklyEntry {
        WeeklyEntry {
            unit_id: self.unit_id,
            week: self.week.unwrap_or(0),
            year: self.year.unwrap_or(0),
            headcount: number_or_zero(self.headcount.unwrap_or(0.0)),
            hires: number_or_zero(self.hires.unwrap_or(0.0)),
            terminations: number_or_zero(self.terminations.unwrap_or(0.0)),
            vacancies_opening: number_or_zero(self.vacancies_opening.unwrap_or(0.0)),
            vacancies_real: number_or_zero(self.vacancies_real.unwrap_or(0.0)),
            notes: self.notes.unwrap_or_default(),
        }
    }
}

impl From<WeeklyEntry> for EntryDraft {
    fn from(entry: WeeklyEntry) -> Self {
        Self {
            unit_id: entry.unit_id,
            week: Some(entry.week),
            year: Some(entry.year),
            headcount: Some(entry.headcount),
            hires: Some(entry.hires),
            terminations: Some(entry.terminations),
            vacancies_opening: Some(entry.vacancies_opening),
            vacancies_real: Some(entry.vacancies_real),
            notes: Some(entry.notes),
        }
    }
}
