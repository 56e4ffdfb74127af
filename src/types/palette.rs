//! Palette type for generated colour lists.

use serde::{Deserialize, Serialize};

use super::{Colour, PaletteKind};

/// An ordered list of colours produced by one generation call.
///
/// Order is significant: for every kind except `Random` the first entry is
/// the base colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Strategy that produced the colours
    pub kind: PaletteKind,

    /// Colours in generation order
    #[serde(rename = "colors")]
    colours: Vec<Colour>,
}

impl Palette {
    /// Wrap an already generated list of colours.
    pub fn new(kind: PaletteKind, colours: Vec<Colour>) -> Self {
        Self { kind, colours }
    }

    /// Get the colour at `index`.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// All colours in order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Iterate over the colours in order.
    pub fn iter(&self) -> impl Iterator<Item = Colour> + '_ {
        self.colours.iter().copied()
    }

    /// Lowercase `#rrggbb` strings in order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.iter().map(Colour::to_hex).collect()
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Take ownership of the colour list.
    pub fn into_colours(self) -> Vec<Colour> {
        self.colours
    }
}

impl IntoIterator for Palette {
    type Item = Colour;
    type IntoIter = std::vec::IntoIter<Colour>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_colours().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let palette = Palette::new(
            PaletteKind::Analogous,
            vec![Colour::BLACK, Colour::rgb(0x34, 0x98, 0xdb)],
        );
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(1), Some(Colour::rgb(0x34, 0x98, 0xdb)));
        assert_eq!(palette.get(2), None);
        assert_eq!(palette.to_hex_strings(), vec!["#000000", "#3498db"]);
        assert_eq!(palette.colours(), &[Colour::BLACK, Colour::rgb(0x34, 0x98, 0xdb)]);
        assert_eq!(palette.into_colours().len(), 2);
    }

    #[test]
    fn test_into_iter_preserves_order() {
        let colours = vec![Colour::WHITE, Colour::BLACK, Colour::rgb(1, 2, 3)];
        let palette = Palette::new(PaletteKind::Random, colours.clone());
        let collected: Vec<Colour> = palette.into_iter().collect();
        assert_eq!(collected, colours);
    }
}
