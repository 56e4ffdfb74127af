//! Palette export.
//!
//! Renders a generated palette as plain text (the format the site's export
//! button downloaded), JSON, or a PNG strip of swatches.

mod json;
mod png;
mod text;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use json::{to_json, write_json};
pub use png::{render_swatches, write_swatch_png, DEFAULT_SWATCH_SIZE};
pub use text::{to_text, write_text, TEXT_HEADER};

/// How `hub generate` prints a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Coloured terminal swatches
    #[default]
    Swatch,
    /// "Color N: #RRGGBB" lines
    Text,
    /// JSON object with kind and colours
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Swatch => "swatch",
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}
