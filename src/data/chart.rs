use serde::Serialize;

use super::catalog::{SeriesCatalog, SeriesStyle};
use super::filter::indices_for_year;
use super::model::{Dataset, Datasets, Dimension, Month, Selection};

// ---------------------------------------------------------------------------
// Chart description handed to the renderer
// ---------------------------------------------------------------------------

/// One bar of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub month: Month,
    /// Fractional rate, exactly as loaded.
    pub rate: f64,
}

/// One coloured group of bars across the months of the selected year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    /// `#rrggbb`
    pub color: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    fn empty(style: &SeriesStyle) -> Self {
        ChartSeries {
            name: style.display_name.to_string(),
            color: style.color.to_string(),
            points: Vec::new(),
        }
    }

    /// Rate for `month`, if the series has a bar there.
    pub fn rate_for(&self, month: Month) -> Option<f64> {
        self.points.iter().find(|p| p.month == month).map(|p| p.rate)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the grouped series for `year` under `dimension`.
///
/// The result always holds one series per catalog entry of `dimension`, in
/// catalog order, even when the year is absent and every series is empty.
/// Rows whose group is not in the catalog are dropped. Points are sorted by
/// calendar month.
pub fn build_chart(dataset: &Dataset, year: i32, dimension: Dimension) -> Vec<ChartSeries> {
    let styles = SeriesCatalog::for_dimension(dimension);
    let mut series: Vec<ChartSeries> = styles.iter().map(ChartSeries::empty).collect();

    for idx in indices_for_year(dataset, year) {
        let rec = &dataset.records[idx];
        let Some(slot) = styles.iter().position(|s| s.group == rec.group) else {
            continue;
        };
        series[slot].points.push(ChartPoint {
            month: rec.month,
            rate: rec.rate,
        });
    }

    for s in &mut series {
        s.points.sort_by_key(|p| p.month);
    }
    series
}

impl Datasets {
    /// Chart for a selection, using the table that backs its dimension.
    pub fn chart(&self, selection: Selection) -> Vec<ChartSeries> {
        build_chart(
            self.for_dimension(selection.dimension),
            selection.year,
            selection.dimension,
        )
    }
}

/// Chart for an unvalidated dimension name. An unknown dimension yields an
/// empty chart instead of an error.
pub fn chart_for_raw(datasets: &Datasets, year: i32, dimension: &str) -> Vec<ChartSeries> {
    match Dimension::parse(dimension) {
        Some(dimension) => datasets.chart(Selection { year, dimension }),
        None => {
            log::debug!("ignoring unknown dimension '{dimension}'");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;
    use crate::data::model::SELECTABLE_YEARS;

    const RACE_CSV: &str = "Year,Month,Group,Unemployment Rate\n\
        2020,Mar,White,0.12\n\
        2020,Jan,White,0.10\n\
        2020,Jan,Black,0.15\n\
        2020,Feb,White,0.11\n\
        2020,Jan,Other,0.50\n\
        2019,Jan,Asian,0.04\n\
        2019,Dec,Latinx,0.07\n\
        2019,Jun,Latinx,0.06\n";

    const AGE_CSV: &str = "Year,Month,Group,Unemployment Rate\n\
        2018,Jan,Youth 18-26,0.09\n\
        2018,Jan,Youth 27-34,0.05\n\
        2018,Jan,Total 18+,0.04\n\
        2018,Jan,Youth 35-44,0.03\n";

    fn race() -> Dataset {
        load_reader(RACE_CSV.as_bytes(), "race.csv").unwrap()
    }

    fn datasets() -> Datasets {
        Datasets {
            race: race(),
            age: load_reader(AGE_CSV.as_bytes(), "age.csv").unwrap(),
        }
    }

    fn names(series: &[ChartSeries]) -> Vec<&str> {
        series.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn race_chart_has_four_series_in_catalog_order() {
        let chart = build_chart(&race(), 2020, Dimension::Race);
        assert_eq!(names(&chart), ["White", "Black", "Hispanic/Latinx", "Asian"]);
        assert_eq!(chart[0].color, "#2c3e65");
        assert_eq!(chart[2].color, "#dd3430");
    }

    #[test]
    fn age_chart_has_three_series_in_catalog_order() {
        let ds = datasets();
        let chart = ds.chart(Selection {
            year: 2018,
            dimension: Dimension::Age,
        });
        assert_eq!(names(&chart), ["Youth 18-26", "Youth 27-34", "Adults 35-65"]);
        assert_eq!(chart[2].points, vec![ChartPoint { month: Month::Jan, rate: 0.04 }]);
    }

    #[test]
    fn series_count_is_fixed_for_every_selection() {
        let ds = datasets();
        for year in SELECTABLE_YEARS {
            for dimension in Dimension::ALL {
                let chart = ds.chart(Selection { year, dimension });
                let expected = match dimension {
                    Dimension::Race => 4,
                    Dimension::Age => 3,
                };
                assert_eq!(chart.len(), expected, "{year} {dimension}");
            }
        }
    }

    #[test]
    fn matching_rows_land_in_their_series() {
        let chart = build_chart(&race(), 2020, Dimension::Race);
        assert_eq!(chart[0].rate_for(Month::Jan), Some(0.10));
        assert_eq!(chart[1].points, vec![ChartPoint { month: Month::Jan, rate: 0.15 }]);
        // Latinx has no 2020 rows but still gets a series.
        assert!(chart[2].points.is_empty());
        assert!(chart[3].points.is_empty());
    }

    #[test]
    fn points_follow_calendar_order() {
        let chart = build_chart(&race(), 2020, Dimension::Race);
        let months: Vec<_> = chart[0].points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![Month::Jan, Month::Feb, Month::Mar]);

        let chart = build_chart(&race(), 2019, Dimension::Race);
        let months: Vec<_> = chart[2].points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![Month::Jun, Month::Dec]);

        for s in &chart {
            assert!(s.points.windows(2).all(|w| w[0].month < w[1].month));
        }
    }

    #[test]
    fn unknown_groups_are_dropped() {
        let chart = build_chart(&race(), 2020, Dimension::Race);
        let plotted: usize = chart.iter().map(|s| s.points.len()).sum();
        assert_eq!(plotted, 4);
        assert!(chart
            .iter()
            .flat_map(|s| &s.points)
            .all(|p| p.rate != 0.50));

        let ds = datasets();
        let chart = ds.chart(Selection {
            year: 2018,
            dimension: Dimension::Age,
        });
        assert_eq!(chart.iter().map(|s| s.points.len()).sum::<usize>(), 3);
    }

    #[test]
    fn absent_year_gives_empty_series() {
        let chart = build_chart(&race(), 1999, Dimension::Race);
        assert_eq!(chart.len(), 4);
        assert!(chart.iter().all(|s| s.points.is_empty()));
    }

    #[test]
    fn wrong_table_for_dimension_gives_empty_series() {
        let chart = build_chart(&race(), 2020, Dimension::Age);
        assert_eq!(chart.len(), 3);
        assert!(chart.iter().all(|s| s.points.is_empty()));
    }

    #[test]
    fn building_twice_is_identical() {
        let ds = race();
        let first = build_chart(&ds, 2020, Dimension::Race);
        let second = build_chart(&ds, 2020, Dimension::Race);
        assert_eq!(first, second);
    }

    #[test]
    fn rates_pass_through_unmodified() {
        let chart = build_chart(&race(), 2020, Dimension::Race);
        let rates: Vec<f64> = chart[0].points.iter().map(|p| p.rate).collect();
        assert_eq!(rates, vec![0.10, 0.11, 0.12]);
    }

    #[test]
    fn raw_dimension_outside_domain_is_empty() {
        let ds = datasets();
        assert!(chart_for_raw(&ds, 2020, "Income").is_empty());
        assert_eq!(chart_for_raw(&ds, 2020, "race").len(), 4);
    }

    #[test]
    fn shared_across_threads() {
        let ds = std::sync::Arc::new(datasets());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ds = std::sync::Arc::clone(&ds);
                std::thread::spawn(move || ds.chart(Selection::default()))
            })
            .collect();
        let expected = ds.chart(Selection::default());
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }

    #[test]
    fn serializes_months_as_abbreviations() {
        let chart = build_chart(&race(), 2020, Dimension::Race);
        let json = serde_json::to_value(&chart[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Black",
                "color": "#3c90ce",
                "points": [{ "month": "Jan", "rate": 0.15 }]
            })
        );
    }
}
