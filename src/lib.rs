//! hub - Creative Tools Hub palette engine
//!
//! Converts colours between hex and HSL and derives palettes from a base
//! colour using one of five strategies.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod output;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use engine::{generate_from_colour, generate_palette, generate_palette_named, generate_palette_with_rng};
pub use error::{HubError, Result};
pub use export::{to_json, to_text, write_swatch_png, ExportFormat};
pub use types::{hex_to_hsl, hsl_to_colour, hsl_to_hex, Colour, Hsl, Palette, PaletteKind};
