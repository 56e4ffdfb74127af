//! JSON palette export.

use std::fs;
use std::path::Path;

use crate::error::{HubError, Result};
use crate::types::Palette;

/// Render a palette as pretty-printed JSON: `{"kind": ..., "colors": [...]}`.
pub fn to_json(palette: &Palette) -> Result<String> {
    serde_json::to_string_pretty(palette).map_err(|e| HubError::Export {
        message: format!("Failed to serialize palette: {}", e),
        help: None,
    })
}

/// Write the JSON export to `path`.
pub fn write_json(palette: &Palette, path: &Path) -> Result<()> {
    let json = to_json(palette)?;
    fs::write(path, json).map_err(|e| HubError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write JSON: {}", e),
    })
}
