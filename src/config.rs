use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::model::{Dimension, Selection};

/// Monthly unemployment rates for young adults, by race and by age group
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV with the unemployment-by-race table
    #[arg(long, value_name = "PATH", default_value = "unemployment_by_race.csv")]
    pub race_csv: PathBuf,

    /// CSV with the unemployment-by-age table
    #[arg(long, value_name = "PATH", default_value = "unemployment_by_age.csv")]
    pub age_csv: PathBuf,

    /// Year shown first (or exported with --json)
    #[arg(long, default_value_t = 2020)]
    pub year: i32,

    /// Characteristic shown first (or exported with --json)
    #[arg(long, value_enum, default_value_t = DimensionArg::Race)]
    pub dimension: DimensionArg,

    /// Print the chart series as JSON and exit instead of opening a window
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionArg {
    Race,
    Age,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Race => Dimension::Race,
            DimensionArg::Age => Dimension::Age,
        }
    }
}

impl Cli {
    pub fn selection(&self) -> Selection {
        Selection {
            year: self.year,
            dimension: self.dimension.into(),
        }
    }
}
