use super::model::Dataset;

/// Return indices of rows observed in exactly `year`.
///
/// There is no nearest-year fallback: a year the table does not cover
/// yields no rows.
pub fn indices_for_year(dataset: &Dataset, year: i32) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.year == year)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Month, UnemploymentRecord};

    fn dataset() -> Dataset {
        let rec = |year, month, group: &str| UnemploymentRecord {
            year,
            month,
            group: group.to_string(),
            rate: 0.1,
        };
        Dataset::new(
            "mem",
            vec![
                rec(2019, Month::Jan, "White"),
                rec(2020, Month::Jan, "White"),
                rec(2020, Month::Jan, "Black"),
                rec(2020, Month::Feb, "White"),
            ],
        )
    }

    #[test]
    fn year_filter_is_exact() {
        let ds = dataset();
        assert_eq!(indices_for_year(&ds, 2020), vec![1, 2, 3]);
        assert_eq!(indices_for_year(&ds, 2019), vec![0]);
        assert!(indices_for_year(&ds, 2021).is_empty());
    }
}
