//! Core domain types for hub.
//!
//! - `Colour` - RGB colour values, parsed from and printed as hex
//! - `Hsl` - the same colour in hue/saturation/lightness space
//! - `PaletteKind` - the strategy used to derive a palette
//! - `Palette` - an ordered list of generated colours

mod colour;
mod hsl;
mod kind;
mod palette;

pub use colour::Colour;
pub use hsl::{hex_to_hsl, hsl_to_colour, hsl_to_hex, Hsl};
pub use kind::PaletteKind;
pub use palette::Palette;
