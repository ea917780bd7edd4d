use eframe::egui::{self, RichText, Ui};

use crate::color::series_color;
use crate::data::model::{Dimension, SELECTABLE_YEARS};
use crate::state::AppState;

pub const TITLE: &str = "Monthly Unemployment Rate for Young Adults Ages 18-34";
const SOURCE_LABEL: &str = "Source: Current Population Survey";
const SOURCE_URL: &str = "https://cps.ipums.org/cps/";

// ---------------------------------------------------------------------------
// Left side panel – selectors and legend
// ---------------------------------------------------------------------------

/// Render the left selector panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);

    ui.label("Select Characteristic of Interest:");
    let current_dimension = state.selection.dimension;
    egui::ComboBox::from_id_salt("select_dimension")
        .selected_text(current_dimension.label())
        .show_ui(ui, |ui: &mut Ui| {
            for dimension in Dimension::ALL {
                if ui
                    .selectable_label(current_dimension == dimension, dimension.label())
                    .clicked()
                {
                    state.set_dimension(dimension);
                }
            }
        });
    ui.add_space(8.0);

    ui.label("Select Year:");
    let current_year = state.selection.year;
    egui::ComboBox::from_id_salt("select_year")
        .selected_text(current_year.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for year in SELECTABLE_YEARS {
                if ui
                    .selectable_label(current_year == year, year.to_string())
                    .clicked()
                {
                    state.set_year(year);
                }
            }
        });
    ui.separator();

    // ---- Series swatches ----
    ui.strong(format!("{} groups", state.selection.dimension));
    for series in &state.series {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new("■").color(series_color(&series.color)));
            ui.label(format!("{}  ({} months)", series.name, series.points.len()));
        });
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui: &mut Ui| {
        ui.hyperlink_to(SOURCE_LABEL, SOURCE_URL);
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(TITLE);
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} rows loaded, {} bars shown",
            state.visible_table_len(),
            state.bar_count()
        ));
    });
}
