//! Plain-text palette export.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{HubError, Result};
use crate::types::Palette;

/// First line of every text export.
pub const TEXT_HEADER: &str = "Color Palette";

/// Render a palette as a header, a blank line, and one `Color N: #RRGGBB`
/// line per colour (numbered from 1).
pub fn to_text(palette: &Palette) -> String {
    let mut out = format!("{}\n\n", TEXT_HEADER);
    for (i, colour) in palette.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "Color {}: {}", i + 1, colour);
    }
    out
}

/// Write the text export to `path`.
pub fn write_text(palette: &Palette, path: &Path) -> Result<()> {
    fs::write(path, to_text(palette)).map_err(|e| HubError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write palette: {}", e),
    })
}
