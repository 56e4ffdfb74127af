//! HSL colours and hex conversion.
//!
//! Hue is in degrees, saturation and lightness in percent. The float maths is
//! done by the `palette` crate.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl as PaletteHsl, IntoColor, Srgb};

use crate::error::{HubError, Result};

use super::Colour;

/// A colour in HSL space.
///
/// `hue` is always in `[0, 360)`, `saturation` and `lightness` in `[0, 100]`.
/// Components keep full precision so that a hex round trip lands back on the
/// same channels; [`Hsl::rounded`] gives the whole-number form for display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Create an HSL value, wrapping the hue and clamping the percentages.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Convert an RGB colour to HSL.
    pub fn from_colour(colour: Colour) -> Self {
        let rgb: Srgb<f32> = Srgb::new(
            colour.r as f32 / 255.0,
            colour.g as f32 / 255.0,
            colour.b as f32 / 255.0,
        );
        let hsl: PaletteHsl = rgb.into_color();

        // Achromatic: no hue to speak of
        if colour.r == colour.g && colour.g == colour.b {
            return Self::new(0.0, 0.0, hsl.lightness * 100.0);
        }

        Self::new(
            hsl.hue.into_positive_degrees(),
            hsl.saturation * 100.0,
            hsl.lightness * 100.0,
        )
    }

    /// Convert back to RGB.
    pub fn to_colour(self) -> Colour {
        hsl_to_colour(self.hue, self.saturation, self.lightness)
    }

    /// Whole-number `(hue, saturation, lightness)`.
    ///
    /// A hue that rounds up to 360 wraps to 0.
    pub fn rounded(self) -> (u16, u8, u8) {
        (
            (self.hue.round() as u16) % 360,
            self.saturation.round() as u8,
            self.lightness.round() as u8,
        )
    }

    /// Same saturation and lightness, hue rotated by `degrees`.
    pub fn rotate(self, degrees: f32) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.lightness)
    }

    /// Same hue and saturation, different lightness.
    pub fn with_lightness(self, lightness: f32) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hue, saturation, lightness) = self.rounded();
        write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness)
    }
}

impl FromStr for Hsl {
    type Err = HubError;

    /// Parse `h,s,l` or `hsl(h, s%, l%)`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(HubError::Parse {
                message: format!("Invalid HSL value: {}", s),
                help: Some("Use h,s,l such as 204,70,53 or hsl(204, 70%, 53%)".to_string()),
            });
        }

        let mut values = [0f32; 3];
        for (value, part) in values.iter_mut().zip(&parts) {
            let number = part.trim_end_matches('%');
            let invalid = || HubError::Parse {
                message: format!("Invalid HSL component: {}", part),
                help: Some("HSL components must be finite numbers".to_string()),
            };
            let parsed: f32 = number.parse().map_err(|_| invalid())?;
            if !parsed.is_finite() {
                return Err(invalid());
            }
            *value = parsed;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

/// Parse a hex colour and convert it to HSL.
///
/// Components keep full `f32` precision so that converting back with
/// [`hsl_to_hex`] lands within one step of every channel; [`Hsl::rounded`]
/// gives the whole-number triplet for display. Palettes derived from these
/// values can differ by a channel from ones built on rounded HSL: the first
/// lighter step of `#3498DB` is `#75b9e7`.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Colour::from_hex(hex).map(Hsl::from_colour)
}

/// Convert HSL to a lowercase `#rrggbb` string.
///
/// `h` may be any real number and is wrapped into `[0, 360)`.
pub fn hsl_to_hex(h: f32, s: f32, l: f32) -> String {
    hsl_to_colour(h, s, l).to_hex()
}

/// Convert HSL to an RGB colour.
///
/// `h` is wrapped into `[0, 360)`; `s` and `l` are percentages clamped to `[0, 100]`.
pub fn hsl_to_colour(h: f32, s: f32, l: f32) -> Colour {
    let hue = wrap_hue(h);
    let saturation = s.clamp(0.0, 100.0) / 100.0;
    let lightness = l.clamp(0.0, 100.0) / 100.0;

    let hsl: PaletteHsl = PaletteHsl::new(hue, saturation, lightness);
    let rgb: Srgb<f32> = hsl.into_color();

    Colour::rgb(
        to_channel(rgb.red),
        to_channel(rgb.green),
        to_channel(rgb.blue),
    )
}

/// Wrap a hue in degrees into `[0, 360)`.
fn wrap_hue(degrees: f32) -> f32 {
    let hue = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if hue >= 360.0 {
        hue - 360.0
    } else {
        hue
    }
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
