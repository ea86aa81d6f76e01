// File: crates/engagement-core/src/types.rs
// Summary: Shared frame types (plot size and margins) used by scenes and config.

use serde::{Deserialize, Serialize};

/// Space around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

/// Plot area size plus the margins drawn around it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Frame {
    pub const fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self { width, height, margin }
    }
    /// Width of the whole drawing surface.
    pub fn outer_width(&self) -> f64 { self.width + self.margin.hsum() }
    /// Height of the whole drawing surface.
    pub fn outer_height(&self) -> f64 { self.height + self.margin.vsum() }
}
