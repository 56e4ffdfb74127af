//! Palette kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HubError, Result};

/// How a palette relates its colours to the base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PaletteKind {
    /// One hue, lighter and darker steps.
    #[default]
    Monochromatic,
    /// Neighbouring hues at 30 degree steps.
    Analogous,
    /// The base hue and its opposite, with lighter steps of each.
    Complementary,
    /// Three hues 120 degrees apart, with lighter steps of each.
    Triadic,
    /// Ten unrelated colours; the base colour is ignored.
    Random,
}

impl PaletteKind {
    /// Every kind, in menu order.
    pub const ALL: [PaletteKind; 5] = [
        PaletteKind::Monochromatic,
        PaletteKind::Analogous,
        PaletteKind::Complementary,
        PaletteKind::Triadic,
        PaletteKind::Random,
    ];

    /// Lowercase name, as accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Monochromatic => "monochromatic",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Complementary => "complementary",
            PaletteKind::Triadic => "triadic",
            PaletteKind::Random => "random",
        }
    }

    /// Number of colours a palette of this kind contains.
    pub fn colour_count(self) -> usize {
        match self {
            PaletteKind::Monochromatic | PaletteKind::Analogous | PaletteKind::Triadic => 9,
            PaletteKind::Complementary | PaletteKind::Random => 10,
        }
    }

    /// Whether the base colour influences the output.
    pub fn uses_base(self) -> bool {
        self != PaletteKind::Random
    }
}

impl FromStr for PaletteKind {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HubError::UnknownPaletteKind {
                input: s.to_string(),
            })
    }
}

impl TryFrom<String> for PaletteKind {
    type Error = HubError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
