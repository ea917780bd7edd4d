use std::path::PathBuf;

/// Why a source table could not be loaded.
///
/// Every variant names the file; row-level variants also carry the 1-based
/// line number as counted by the CSV reader (the header is line 1).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{}: cannot open file: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: malformed CSV{}: {source}", path.display(), line_suffix(*line))]
    Csv {
        path: PathBuf,
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}, line {line}: column '{column}': {reason}", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: &'static str,
        reason: String,
    },

    #[error(
        "{}, line {line}: duplicate row for {year} {month} '{group}' (first seen on line {first_line})",
        path.display()
    )]
    DuplicateRow {
        path: PathBuf,
        line: u64,
        first_line: u64,
        year: i32,
        month: String,
        group: String,
    },
}

impl LoadError {
    /// The file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Csv { path, .. }
            | LoadError::MissingColumn { path, .. }
            | LoadError::InvalidValue { path, .. }
            | LoadError::DuplicateRow { path, .. } => path,
        }
    }
}

fn line_suffix(line: Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}
