use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::color::series_color;
use crate::data::model::Month;
use crate::state::AppState;

/// Share of a month slot covered by its bar group; the rest is spacing.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Layout / tick helpers
// ---------------------------------------------------------------------------

/// Width of a single bar and the x offset of each series within a month slot
/// when `series_count` series are drawn side by side.
pub fn bar_layout(series_count: usize) -> (f64, Vec<f64>) {
    if series_count == 0 {
        return (GROUP_WIDTH, Vec::new());
    }
    let width = GROUP_WIDTH / series_count as f64;
    let offsets = (0..series_count)
        .map(|i| -GROUP_WIDTH / 2.0 + width * (i as f64 + 0.5))
        .collect();
    (width, offsets)
}

/// Month abbreviation for integer slots 0..12, blank elsewhere.
pub fn month_tick_label(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    Month::from_index(rounded as usize)
        .map(|m| m.abbrev().to_string())
        .unwrap_or_default()
}

/// Fraction rendered as a whole percentage, e.g. `0.125` → `"13%"`.
pub fn percent_tick_label(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Hover text for a single bar.
pub fn hover_label(rate: f64) -> String {
    format!("Unemployment Rate: {:.2}%", rate * 100.0)
}

// ---------------------------------------------------------------------------
// Grouped bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the grouped bar chart for the current selection.
pub fn unemployment_plot(ui: &mut Ui, state: &AppState) {
    if state.bar_count() == 0 {
        ui.label(format!(
            "No {} data for {}.",
            state.selection.dimension, state.selection.year
        ));
    }

    let (width, offsets) = bar_layout(state.series.len());

    let charts: Vec<BarChart> = state
        .series
        .iter()
        .zip(offsets)
        .map(|(series, offset)| {
            let bars = series
                .points
                .iter()
                .map(|p| {
                    Bar::new(p.month.index() as f64 + offset, p.rate)
                        .width(width)
                        .name(p.month.abbrev())
                })
                .collect();
            BarChart::new(bars)
                .name(&series.name)
                .color(series_color(&series.color))
                .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| hover_label(bar.value)))
        })
        .collect();

    Plot::new("unemployment_plot")
        .legend(Legend::default())
        .x_axis_label("Month")
        .y_axis_label("Unemployment Rate")
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            month_tick_label(mark.value)
        })
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            percent_tick_label(mark.value)
        })
        .include_x(-0.5)
        .include_x(Month::ALL.len() as f64 - 0.5)
        .include_y(0.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
