use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Month – calendar month of an observation
// ---------------------------------------------------------------------------

/// A calendar month. Ordering follows the calendar, not the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    const FULL_NAMES: [&'static str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    /// Zero-based position in the year (Jan = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Month::index`].
    pub fn from_index(index: usize) -> Option<Month> {
        Self::ALL.get(index).copied()
    }

    /// Three-letter English abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbrev())
    }
}

/// Error returned when a month cell cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a month")]
pub struct ParseMonthError(pub String);

impl FromStr for Month {
    type Err = ParseMonthError;

    /// Accepts "Jan", "January" (any case) or "1".."12".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(Month::from_index)
                .ok_or_else(|| ParseMonthError(s.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        Self::FULL_NAMES
            .iter()
            .position(|full| lower == *full || (lower.len() == 3 && full.starts_with(&lower)))
            .and_then(Month::from_index)
            .ok_or_else(|| ParseMonthError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// UnemploymentRecord – one row of a source table
// ---------------------------------------------------------------------------

/// One `(year, month, group)` observation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnemploymentRecord {
    pub year: i32,
    pub month: Month,
    /// Category label, e.g. "White" or "Youth 18-26".
    pub group: String,
    /// Fractional rate (0.10 means 10%).
    pub rate: f64,
}

// ---------------------------------------------------------------------------
// Dataset – one loaded table
// ---------------------------------------------------------------------------

/// A loaded table of observations, in file order. Never mutated after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Where the rows came from (file path or an in-memory label).
    pub source: PathBuf,
    pub records: Vec<UnemploymentRecord>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, records: Vec<UnemploymentRecord>) -> Self {
        Dataset {
            source: source.into(),
            records,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Distinct group labels, sorted.
    pub fn groups(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.group.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Dimension / Selection
// ---------------------------------------------------------------------------

/// The categorical axis the chart is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    #[default]
    Race,
    Age,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::Race, Dimension::Age];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Race => "Race",
            Dimension::Age => "Age",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the domain.
    pub fn parse(s: &str) -> Option<Dimension> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Years offered by the year selector.
pub const SELECTABLE_YEARS: [i32; 3] = [2018, 2019, 2020];

/// The two user choices that drive the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub year: i32,
    pub dimension: Dimension,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            year: 2020,
            dimension: Dimension::Race,
        }
    }
}

// ---------------------------------------------------------------------------
// Datasets – the race and age tables together
// ---------------------------------------------------------------------------

/// Both source tables, loaded once at startup and handed to whoever needs them.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub race: Dataset,
    pub age: Dataset,
}

impl Datasets {
    /// The table whose `group` column holds labels for `dimension`.
    pub fn for_dimension(&self, dimension: Dimension) -> &Dataset {
        match dimension {
            Dimension::Race => &self.race,
            Dimension::Age => &self.age,
        }
    }
}
