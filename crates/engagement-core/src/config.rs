// File: crates/engagement-core/src/config.rs
// Summary: Per-chart settings (inputs, fields, frames, paddings, colors, titles) with TOML loading.
//
// Defaults reproduce the reference page. A TOML file overrides individual keys;
// anything it leaves out keeps the chart's own default, nested tables included:
//
//   [barplot]
//   palette = ["#e15759", "#59a14f", "#4e79a7"]
//
//   [lineplot.frame]
//   width = 960.0
//   margin = { bottom = 120.0 }

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::Result;
use crate::types::{Frame, Margin};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartsConfig {
    pub boxplot: BoxPlotConfig,
    pub barplot: BarPlotConfig,
    pub lineplot: LinePlotConfig,
}

impl ChartsConfig {
    /// Parse overrides and lay them over [`ChartsConfig::default`].
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let overrides: toml::Table = toml::from_str(s)?;
        let mut merged = match toml::Value::try_from(Self::default())? {
            toml::Value::Table(t) => t,
            _ => toml::Table::new(),
        };
        overlay(&mut merged, overrides);
        let config: Self = toml::Value::Table(merged).try_into()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}

/// Deep merge: tables merge key by key, any other value replaces the base.
fn overlay(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(o) if matches!(base.get(&key), Some(toml::Value::Table(_))) => {
                if let Some(toml::Value::Table(b)) = base.get_mut(&key) {
                    overlay(b, o);
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Axis titles and where they sit inside the margins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Titles {
    pub x: String,
    pub y: String,
    /// Distance of the x title baseline above the bottom edge of the surface.
    pub x_lift: f64,
    /// Distance of the y title baseline from the left edge of the surface.
    pub y_inset: f64,
    pub size: f64,
    pub y_size: f64,
    pub y_bold: bool,
}

impl Default for Titles {
    fn default() -> Self {
        Self {
            x: String::new(),
            y: String::new(),
            x_lift: 10.0,
            y_inset: 15.0,
            size: 16.0,
            y_size: 16.0,
            y_bold: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxPlotConfig {
    pub mount: String,
    pub input: String,
    pub frame: Frame,
    pub padding: f64,
    pub category_field: String,
    pub value_field: String,
    pub titles: Titles,
    pub box_fill: Rgba,
    pub stroke: Rgba,
}

impl Default for BoxPlotConfig {
    fn default() -> Self {
        Self {
            mount: "boxplot".into(),
            input: "socialMedia.csv".into(),
            frame: Frame::new(600.0, 400.0, Margin::new(50.0, 50.0, 50.0, 60.0)),
            padding: 0.3,
            category_field: "Platform".into(),
            value_field: "Likes".into(),
            titles: Titles {
                x: "Platform".into(),
                y: "Number of Likes".into(),
                ..Titles::default()
            },
            box_fill: Rgba::named("lightblue"),
            stroke: Rgba::BLACK,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegendConfig {
    /// Gap between the plot's right edge and the legend.
    pub x_gap: f64,
    pub y: f64,
    pub swatch: f64,
    pub row_height: f64,
    pub text_x: f64,
    pub text_dy: f64,
    pub font_size: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { x_gap: 20.0, y: 10.0, swatch: 18.0, row_height: 25.0, text_x: 25.0, text_dy: 14.0, font_size: 14.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarPlotConfig {
    pub mount: String,
    pub input: String,
    pub frame: Frame,
    /// Padding of the primary (category) bands.
    pub padding: f64,
    /// Padding of the secondary (group) bands inside each category.
    pub group_padding: f64,
    pub category_field: String,
    pub group_field: String,
    pub value_field: String,
    pub titles: Titles,
    pub palette: Vec<Rgba>,
    pub legend: LegendConfig,
}

impl Default for BarPlotConfig {
    fn default() -> Self {
        Self {
            mount: "barplot".into(),
            input: "socialMediaAvg.csv".into(),
            frame: Frame::new(600.0, 450.0, Margin::new(50.0, 180.0, 80.0, 70.0)),
            padding: 0.2,
            group_padding: 0.05,
            category_field: "Platform".into(),
            group_field: "PostType".into(),
            value_field: "AvgLikes".into(),
            titles: Titles {
                x: "Platform".into(),
                y: "Average Number of likes".into(),
                x_lift: 40.0,
                y_inset: 20.0,
                ..Titles::default()
            },
            palette: ["pink", "green", "lightblue"].into_iter().map(Rgba::named).collect(),
            legend: LegendConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinePlotConfig {
    pub mount: String,
    pub input: String,
    pub frame: Frame,
    pub padding: f64,
    pub category_field: String,
    pub value_field: String,
    pub titles: Titles,
    pub stroke: Rgba,
    pub stroke_width: f64,
    pub tick_rotation: f64,
    pub y_tick_size: f64,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            mount: "lineplot".into(),
            input: "socialMediaTime.csv".into(),
            frame: Frame::new(800.0, 500.0, Margin::new(30.0, 30.0, 100.0, 50.0)),
            padding: 0.1,
            category_field: "Date".into(),
            value_field: "AvgLikes".into(),
            titles: Titles {
                x: "Date".into(),
                y: "Average Number of Likes".into(),
                x_lift: 40.0,
                y_inset: 10.0,
                y_bold: true,
                ..Titles::default()
            },
            stroke: Rgba::named("magenta"),
            stroke_width: 2.0,
            tick_rotation: -25.0,
            y_tick_size: 12.0,
        }
    }
}
