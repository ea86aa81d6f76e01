// File: crates/engagement-core/src/color.rs
// Summary: 8-bit RGBA color parsed from CSS color strings.

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse any CSS color: names (`"lightblue"`), hex, `rgb()`, `hsl()`.
    pub fn parse(value: &str) -> Result<Self, ChartError> {
        let c = csscolorparser::parse(value).map_err(|e| ChartError::Color {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        let [r, g, b, a] = c.to_rgba8();
        Ok(Self { r, g, b, a })
    }

    /// Parse a color known to be valid, e.g. a built-in default name.
    pub(crate) fn named(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::BLACK)
    }

    pub fn is_transparent(&self) -> bool { self.a == 0 }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let rgb = format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        if self.a == 255 { rgb } else { format!("{rgb}{:02x}", self.a) }
    }
}

impl FromStr for Rgba {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl TryFrom<String> for Rgba {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Self::parse(&s) }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
