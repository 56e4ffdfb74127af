//! Project configuration (hub.yaml) parsing.
//!
//! The config supplies defaults for `hub generate`: base colour, palette
//! kind, output format and PNG swatch size. Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HubError, Result};
use crate::export::{ExportFormat, DEFAULT_SWATCH_SIZE};
use crate::types::{Colour, PaletteKind};

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "hub.yaml";

/// Base colour used when neither the command line nor hub.yaml gives one.
pub const DEFAULT_BASE: Colour = Colour::rgb(0x34, 0x98, 0xdb);

/// Project config loaded from hub.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default base colour.
    pub base: Colour,

    /// Default palette kind.
    pub kind: PaletteKind,

    /// Default output format for `hub generate`.
    pub format: ExportFormat,

    /// Swatch edge length for PNG output, in pixels.
    pub swatch_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            kind: PaletteKind::default(),
            format: ExportFormat::default(),
            swatch_size: DEFAULT_SWATCH_SIZE,
        }
    }
}

impl Config {
    /// Load config from a hub.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HubError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `dir/hub.yaml` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| HubError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Render as YAML, as written by `hub init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| HubError::Export {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}
