use std::collections::BTreeSet;

use super::model::{Dataset, Dimension};

/// How one group of a dimension is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    /// Label as it appears in the `Group` column.
    pub group: &'static str,
    /// Legend name.
    pub display_name: &'static str,
    /// `#rrggbb` bar colour.
    pub color: &'static str,
}

const fn style(group: &'static str, display_name: &'static str, color: &'static str) -> SeriesStyle {
    SeriesStyle {
        group,
        display_name,
        color,
    }
}

const RACE: [SeriesStyle; 4] = [
    style("White", "White", "#2c3e65"),
    style("Black", "Black", "#3c90ce"),
    style("Latinx", "Hispanic/Latinx", "#dd3430"),
    style("Asian", "Asian", "#1c2d4f"),
];

const AGE: [SeriesStyle; 3] = [
    style("Youth 18-26", "Youth 18-26", "#2c3e65"),
    style("Youth 27-34", "Youth 27-34", "#3c90ce"),
    style("Total 18+", "Adults 35-65", "#dd3430"),
];

/// The fixed, ordered set of groups plotted for each dimension.
pub struct SeriesCatalog;

impl SeriesCatalog {
    /// Styles for `dimension`, in display order.
    pub fn for_dimension(dimension: Dimension) -> &'static [SeriesStyle] {
        match dimension {
            Dimension::Race => &RACE,
            Dimension::Age => &AGE,
        }
    }

    /// Look up the style of a single group label.
    pub fn style_of(dimension: Dimension, group: &str) -> Option<&'static SeriesStyle> {
        Self::for_dimension(dimension)
            .iter()
            .find(|s| s.group == group)
    }

    /// Group labels present in `dataset` that the chart will never show.
    pub fn unplotted_groups(dimension: Dimension, dataset: &Dataset) -> BTreeSet<String> {
        dataset
            .groups()
            .into_iter()
            .filter(|g| Self::style_of(dimension, g).is_none())
            .map(str::to_string)
            .collect()
    }
}
