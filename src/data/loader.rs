use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::error::LoadError;
use super::model::{Dataset, Month, UnemploymentRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an unemployment table from a CSV file.
///
/// Expected layout: a header row naming (at least) the columns
/// `Year`, `Month`, `Group` and `Unemployment Rate`, in any order, followed by
/// one row per `(year, month, group)` observation:
///
/// ```text
/// Year,Month,Group,Unemployment Rate
/// 2020,Jan,White,0.061
/// 2020,Jan,Black,0.094
/// ```
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    read_table(reader, path)
}

/// Same as [`load_csv`] but reads from any byte source. `source` is only used
/// to label the dataset and its errors.
pub fn load_reader<R: Read>(reader: R, source: impl Into<PathBuf>) -> Result<Dataset, LoadError> {
    let source = source.into();
    read_table(reader_builder().from_reader(reader), &source)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

// ---------------------------------------------------------------------------
// Header resolution
// ---------------------------------------------------------------------------

const YEAR: &str = "Year";
const MONTH: &str = "Month";
const GROUP: &str = "Group";
const RATE: &str = "Unemployment Rate";

/// Indices of the required columns within a row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    year: usize,
    month: usize,
    group: usize,
    rate: usize,
}

/// Lower-case and drop everything but letters and digits, so
/// `Unemployment Rate`, `unemployment_rate` and `UnemploymentRate` compare equal.
fn normalize_header(h: &str) -> String {
    h.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn resolve_columns(headers: &csv::StringRecord, path: &Path) -> Result<Columns, LoadError> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
    let find = |column: &'static str| {
        let wanted = normalize_header(column);
        normalized
            .iter()
            .position(|h| *h == wanted)
            .ok_or_else(|| LoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })
    };

    Ok(Columns {
        year: find(YEAR)?,
        month: find(MONTH)?,
        group: find(GROUP)?,
        rate: find(RATE)?,
    })
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn read_table<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Dataset, LoadError> {
    let csv_error = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        line: source.position().map(csv::Position::line),
        source,
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = resolve_columns(&headers, path)?;

    let mut records = Vec::new();
    // (year, month, group) → line it first appeared on
    let mut seen: HashMap<(i32, Month, String), u64> = HashMap::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(csv_error)?;
        // Header is line 1, so the n-th data row sits on line n + 2 when
        // the reader cannot tell us.
        let line = row
            .position()
            .map(csv::Position::line)
            .unwrap_or(row_no as u64 + 2);

        let record = parse_row(&row, columns, path, line)?;

        let key = (record.year, record.month, record.group.clone());
        if let Some(&first_line) = seen.get(&key) {
            return Err(LoadError::DuplicateRow {
                path: path.to_path_buf(),
                line,
                first_line,
                year: record.year,
                month: record.month.to_string(),
                group: record.group,
            });
        }
        seen.insert(key, line);
        records.push(record);
    }

    Ok(Dataset::new(path, records))
}

fn parse_row(
    row: &csv::StringRecord,
    columns: Columns,
    path: &Path,
    line: u64,
) -> Result<UnemploymentRecord, LoadError> {
    let invalid = |column: &'static str, reason: String| LoadError::InvalidValue {
        path: path.to_path_buf(),
        line,
        column,
        reason,
    };
    let cell = |idx: usize| row.get(idx).unwrap_or("");

    let year_text = cell(columns.year);
    let year = year_text
        .parse::<i32>()
        .map_err(|_| invalid(YEAR, format!("'{year_text}' is not a year")))?;

    let month = cell(columns.month)
        .parse::<Month>()
        .map_err(|e| invalid(MONTH, e.to_string()))?;

    let group = cell(columns.group);
    if group.is_empty() {
        return Err(invalid(GROUP, "empty group label".to_string()));
    }

    let rate_text = cell(columns.rate);
    let rate = rate_text
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| invalid(RATE, format!("'{rate_text}' is not a number")))?;

    Ok(UnemploymentRecord {
        year,
        month,
        group: group.to_string(),
        rate,
    })
}
