use std::sync::Arc;

use crate::data::chart::ChartSeries;
use crate::data::model::{Datasets, Dimension, Selection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Both tables, loaded before the window opens.
    pub datasets: Arc<Datasets>,

    /// Current dropdown values.
    pub selection: Selection,

    /// Series for `selection` (cached).
    pub series: Vec<ChartSeries>,
}

impl AppState {
    pub fn new(datasets: Arc<Datasets>, selection: Selection) -> Self {
        let series = datasets.chart(selection);
        Self {
            datasets,
            selection,
            series,
        }
    }

    /// Recompute `series` after a selection change.
    fn rebuild(&mut self) {
        log::debug!(
            "selection changed: year {} by {}",
            self.selection.year,
            self.selection.dimension
        );
        self.series = self.datasets.chart(self.selection);
    }

    pub fn set_year(&mut self, year: i32) {
        if self.selection.year != year {
            self.selection.year = year;
            self.rebuild();
        }
    }

    pub fn set_dimension(&mut self, dimension: Dimension) {
        if self.selection.dimension != dimension {
            self.selection.dimension = dimension;
            self.rebuild();
        }
    }

    /// Rows in the table behind the current dimension.
    pub fn visible_table_len(&self) -> usize {
        self.datasets.for_dimension(self.selection.dimension).len()
    }

    /// Number of bars currently plotted.
    pub fn bar_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    fn state() -> AppState {
        let race = load_reader(
            "Year,Month,Group,Unemployment Rate\n\
             2020,Jan,White,0.1\n\
             2020,Feb,White,0.2\n\
             2019,Jan,Black,0.3\n"
                .as_bytes(),
            "race.csv",
        )
        .unwrap();
        let age = load_reader(
            "Year,Month,Group,Unemployment Rate\n2019,Jan,Total 18+,0.05\n".as_bytes(),
            "age.csv",
        )
        .unwrap();
        AppState::new(Arc::new(Datasets { race, age }), Selection::default())
    }

    #[test]
    fn starts_with_series_for_initial_selection() {
        let st = state();
        assert_eq!(st.series.len(), 4);
        assert_eq!(st.bar_count(), 2);
        assert_eq!(st.visible_table_len(), 3);
    }

    #[test]
    fn changing_year_rebuilds_series() {
        let mut st = state();
        st.set_year(2019);
        assert_eq!(st.selection.year, 2019);
        assert_eq!(st.bar_count(), 1);
        assert_eq!(st.series[1].points.len(), 1);
    }

    #[test]
    fn changing_dimension_switches_table() {
        let mut st = state();
        st.set_dimension(Dimension::Age);
        assert_eq!(st.series.len(), 3);
        assert_eq!(st.bar_count(), 0);
        assert_eq!(st.visible_table_len(), 1);

        st.set_year(2019);
        assert_eq!(st.series[2].points.len(), 1);
    }
}
