//! Youth Unemployment Viewer
//!
//! Loads monthly unemployment tables (by race and by age group) from CSV and
//! turns a `(year, dimension)` selection into grouped bar series. The egui
//! front end in [`app`] and [`ui`] is a thin caller of [`data::chart`].

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
