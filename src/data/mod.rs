/// Data layer: core types, loading, and chart assembly.
///
/// Architecture:
/// ```text
///  unemployment_by_race.csv   unemployment_by_age.csv
///              │                        │
///              ▼                        ▼
///         ┌──────────┐
///         │  loader   │  parse file → Dataset
///         └──────────┘
///              │
///              ▼
///         ┌──────────┐
///         │ Datasets  │  { race, age }, immutable
///         └──────────┘
///              │   (year, dimension)
///              ▼
///         ┌──────────┐     ┌──────────┐
///         │  filter   │ ──▶ │  chart    │  catalog order → Vec<ChartSeries>
///         └──────────┘     └──────────┘
/// ```

pub mod catalog;
pub mod chart;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;

use std::path::Path;

use catalog::SeriesCatalog;
use error::LoadError;
use model::{Dataset, Datasets, Dimension};

/// Load both tables. The first failure aborts.
pub fn load_datasets(race_path: &Path, age_path: &Path) -> Result<Datasets, LoadError> {
    let race = load_logged(race_path, Dimension::Race)?;
    let age = load_logged(age_path, Dimension::Age)?;
    Ok(Datasets { race, age })
}

fn load_logged(path: &Path, dimension: Dimension) -> Result<Dataset, LoadError> {
    let dataset = loader::load_csv(path)?;
    log::info!(
        "Loaded {} {} rows from {} (years {:?})",
        dataset.len(),
        dimension,
        dataset.source().display(),
        dataset.years()
    );
    for group in SeriesCatalog::unplotted_groups(dimension, &dataset) {
        log::warn!(
            "{}: group '{group}' is not a {dimension} category and will not be plotted",
            path.display()
        );
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let race = dir.path().join("unemployment_by_race.csv");
        let age = dir.path().join("unemployment_by_age.csv");
        std::fs::write(&race, "Year,Month,Group,Unemployment Rate\n2020,Jan,White,0.1\n").unwrap();
        std::fs::write(
            &age,
            "Year,Month,Group,Unemployment Rate\n2020,Jan,Youth 18-26,0.2\n2020,Feb,Youth 18-26,0.3\n",
        )
        .unwrap();

        let ds = load_datasets(&race, &age).unwrap();
        assert_eq!(ds.for_dimension(Dimension::Race).len(), 1);
        assert_eq!(ds.for_dimension(Dimension::Age).len(), 2);
    }

    #[test]
    fn missing_age_table_fails_naming_it() {
        let dir = tempfile::tempdir().unwrap();
        let race = dir.path().join("race.csv");
        std::fs::write(&race, "Year,Month,Group,Unemployment Rate\n").unwrap();
        let age = dir.path().join("age.csv");

        let err = load_datasets(&race, &age).unwrap_err();
        assert_eq!(err.path(), age.as_path());
    }
}
