// File: crates/engagement-core/src/charts/mod.rs
// Summary: The three chart pipelines (records -> model -> scene) and a selector over them.

pub mod barplot;
pub mod boxplot;
pub mod lineplot;

pub use barplot::{Bar, BarPlot};
pub use boxplot::{box_geometry, BoxGeometry, BoxGroup, BoxPlot};
pub use lineplot::{LinePlot, LinePoint};

use crate::config::ChartsConfig;
use crate::data::Record;
use crate::error::Result;
use crate::scene::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Box,
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Box, ChartKind::Bar, ChartKind::Line];

    pub fn mount<'a>(&self, cfg: &'a ChartsConfig) -> &'a str {
        match self {
            ChartKind::Box => &cfg.boxplot.mount,
            ChartKind::Bar => &cfg.barplot.mount,
            ChartKind::Line => &cfg.lineplot.mount,
        }
    }

    /// CSV file name this chart reads.
    pub fn input<'a>(&self, cfg: &'a ChartsConfig) -> &'a str {
        match self {
            ChartKind::Box => &cfg.boxplot.input,
            ChartKind::Bar => &cfg.barplot.input,
            ChartKind::Line => &cfg.lineplot.input,
        }
    }

    /// Fields to coerce to numbers before building.
    pub fn numeric_fields<'a>(&self, cfg: &'a ChartsConfig) -> Vec<&'a str> {
        match self {
            ChartKind::Box => vec![cfg.boxplot.value_field.as_str()],
            ChartKind::Bar => vec![cfg.barplot.value_field.as_str()],
            ChartKind::Line => vec![cfg.lineplot.value_field.as_str()],
        }
    }

    pub fn scene(&self, records: &[Record], cfg: &ChartsConfig) -> Result<Scene> {
        Ok(match self {
            ChartKind::Box => BoxPlot::build(records, &cfg.boxplot)?.scene(&cfg.boxplot),
            ChartKind::Bar => BarPlot::build(records, &cfg.barplot)?.scene(&cfg.barplot),
            ChartKind::Line => LinePlot::build(records, &cfg.lineplot)?.scene(&cfg.lineplot),
        })
    }
}

/// `(key, value)` per record; values that never became numbers read as `NaN`.
pub(crate) fn keyed_values<'a>(records: &'a [Record], key: &str, value: &str) -> Result<Vec<(&'a str, f64)>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| Ok((r.category(key, i + 1)?, r.number(value).unwrap_or(f64::NAN))))
        .collect()
}
