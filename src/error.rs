use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hub operations
#[derive(Error, Diagnostic, Debug)]
pub enum HubError {
    #[error("Invalid colour: {input:?}")]
    #[diagnostic(
        code(hub::invalid_color_format),
        help("Use a 6-digit hex colour such as #3498DB")
    )]
    InvalidColorFormat { input: String },

    #[error("Unknown palette kind: {input:?}")]
    #[diagnostic(
        code(hub::unknown_palette_kind),
        help("Available kinds: monochromatic, analogous, complementary, triadic, random")
    )]
    UnknownPaletteKind { input: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(hub::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(hub::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(hub::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(hub::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl HubError {
    pub(crate) fn invalid_colour(input: &str) -> Self {
        HubError::InvalidColorFormat {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
