//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HubError, Result};

use super::Hsl;

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a 6-digit hex colour string.
    ///
    /// The leading `#` is optional and digits are case-insensitive. Shorthand
    /// (`#RGB`) and alpha forms are rejected.
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // from_str_radix accepts a leading '+', so check the digits up front
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HubError::invalid_colour(s));
        }

        let r = parse_hex_byte(&hex[0..2], s)?;
        let g = parse_hex_byte(&hex[2..4], s)?;
        let b = parse_hex_byte(&hex[4..6], s)?;
        Ok(Self::rgb(r, g, b))
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("{:x}", self)
    }

    /// Convert to integer HSL.
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_colour(self)
    }

    /// Perceived brightness in [0, 1] using the Rec. 601 weights.
    pub fn luma(self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    /// Black or white, whichever reads better on top of this colour.
    pub fn contrast(self) -> Colour {
        if self.luma() > 0.5 {
            Colour::BLACK
        } else {
            Colour::WHITE
        }
    }
}

impl FromStr for Colour {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::UpperHex for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::LowerHex for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(byte: &str, input: &str) -> Result<u8> {
    u8::from_str_radix(byte, 16).map_err(|_| HubError::invalid_colour(input))
}
