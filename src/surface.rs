//! Drawing seam between the simulation and whatever paints the frame.
//!
//! The simulation only ever sets a fill colour and fills axis-aligned
//! rectangles in canvas coordinates, so that is all a surface must offer.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::GameError;

/// A 24-bit colour, written as `#rrggbb` in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| GameError::InvalidColor(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| GameError::InvalidColor(s.to_string()))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Anything the simulation can paint onto.
pub trait Surface {
    /// Colour used by subsequent `fill_rect` calls.
    fn set_fill(&mut self, color: Rgb);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}
