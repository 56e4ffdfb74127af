//! Palette generation.
//!
//! Validates the base colour, converts it to HSL once, and dispatches to the
//! strategy for the requested [`PaletteKind`]. Every call builds a fresh
//! [`Palette`]; nothing is retained between calls.

mod strategy;

use rand::Rng;

use crate::error::Result;
use crate::types::{Colour, Palette, PaletteKind};

pub use strategy::{
    analogous, complementary, monochromatic, random, triadic, LIGHTNESS_CEILING,
    LIGHTNESS_FLOOR,
};

/// Generate a palette from a hex base colour.
///
/// The base colour is validated for every kind. `Random` never reads it,
/// but a malformed base is still rejected with `InvalidColorFormat` rather
/// than accepted as an unused argument, so `generate_palette("not-a-color",
/// PaletteKind::Random)` is an error.
pub fn generate_palette(base: &str, kind: PaletteKind) -> Result<Palette> {
    generate_palette_with_rng(base, kind, &mut rand::thread_rng())
}

/// Generate a palette, drawing `Random` colours from `rng`.
pub fn generate_palette_with_rng<R: Rng + ?Sized>(
    base: &str,
    kind: PaletteKind,
    rng: &mut R,
) -> Result<Palette> {
    let base = Colour::from_hex(base)?;
    Ok(generate_from_colour(base, kind, rng))
}

/// Generate a palette from a kind given by name, e.g. from a form field.
///
/// Unknown names are rejected rather than treated as `Random`.
pub fn generate_palette_named(base: &str, kind: &str) -> Result<Palette> {
    let base = Colour::from_hex(base)?;
    let kind: PaletteKind = kind.parse()?;
    Ok(generate_from_colour(base, kind, &mut rand::thread_rng()))
}

/// Generate a palette from an already validated colour.
pub fn generate_from_colour<R: Rng + ?Sized>(
    base: Colour,
    kind: PaletteKind,
    rng: &mut R,
) -> Palette {
    let colours = match kind {
        PaletteKind::Monochromatic => monochromatic(base),
        PaletteKind::Analogous => analogous(base),
        PaletteKind::Complementary => complementary(base),
        PaletteKind::Triadic => triadic(base),
        PaletteKind::Random => random(rng),
    };
    Palette::new(kind, colours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_lengths() {
        for kind in PaletteKind::ALL {
            let palette = generate_palette("#3498DB", kind).unwrap();
            assert_eq!(palette.len(), kind.colour_count(), "{}", kind);
            assert_eq!(palette.kind, kind);
        }
    }

    #[test]
    fn test_base_colour_first() {
        for kind in PaletteKind::ALL.into_iter().filter(|k| k.uses_base()) {
            let palette = generate_palette("3498db", kind).unwrap();
            assert_eq!(palette.to_hex_strings()[0], "#3498db", "{}", kind);
        }
    }

    #[test]
    fn test_invalid_base_rejected_for_every_kind() {
        for kind in PaletteKind::ALL {
            match generate_palette("not-a-color", kind) {
                Err(HubError::InvalidColorFormat { input }) => assert_eq!(input, "not-a-color"),
                other => panic!("expected InvalidColorFormat for {}, got {:?}", kind, other),
            }
        }
    }

    #[test]
    fn test_named_kind() {
        let palette = generate_palette_named("#3498db", "Triadic").unwrap();
        assert_eq!(palette.kind, PaletteKind::Triadic);

        assert!(matches!(
            generate_palette_named("#3498db", "sepia"),
            Err(HubError::UnknownPaletteKind { .. })
        ));
        // Colour is checked before the kind
        assert!(matches!(
            generate_palette_named("#zz", "sepia"),
            Err(HubError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = generate_palette_with_rng("#000000", PaletteKind::Random, &mut StdRng::seed_from_u64(7))
            .unwrap();
        let b = generate_palette_with_rng("#ffffff", PaletteKind::Random, &mut StdRng::seed_from_u64(7))
            .unwrap();
        // Same seed, different base: the base is ignored
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic_kinds_ignore_rng() {
        let a = generate_palette_with_rng("#3498db", PaletteKind::Analogous, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let b = generate_palette_with_rng("#3498db", PaletteKind::Analogous, &mut StdRng::seed_from_u64(2))
            .unwrap();
        assert_eq!(a, b);
    }
}
