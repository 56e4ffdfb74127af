//! The five palette strategies.
//!
//! Each works on the HSL form of the base colour and returns colours in
//! display order.

use rand::Rng;

use crate::types::{Colour, Hsl};

/// Lightest value a "lighter" step may reach.
pub const LIGHTNESS_CEILING: f32 = 90.0;

/// Darkest value a "darker" step may reach.
pub const LIGHTNESS_FLOOR: f32 = 10.0;

const STEPS: [f32; 4] = [1.0, 2.0, 3.0, 4.0];

fn lighter(hsl: Hsl, step: f32, amount: f32) -> Colour {
    hsl.with_lightness((hsl.lightness + step * amount).min(LIGHTNESS_CEILING))
        .to_colour()
}

fn darker(hsl: Hsl, step: f32, amount: f32) -> Colour {
    hsl.with_lightness((hsl.lightness - step * amount).max(LIGHTNESS_FLOOR))
        .to_colour()
}

/// Base, four lighter steps, four darker steps (15% apart).
pub fn monochromatic(base: Colour) -> Vec<Colour> {
    let hsl = base.to_hsl();

    let mut colours = Vec::with_capacity(9);
    colours.push(base);
    colours.extend(STEPS.iter().map(|&i| lighter(hsl, i, 15.0)));
    colours.extend(STEPS.iter().map(|&i| darker(hsl, i, 15.0)));
    colours
}

/// Base, four hues clockwise then four anticlockwise (30 degrees apart).
pub fn analogous(base: Colour) -> Vec<Colour> {
    let hsl = base.to_hsl();

    let mut colours = Vec::with_capacity(9);
    colours.push(base);
    colours.extend(STEPS.iter().map(|&i| hsl.rotate(i * 30.0).to_colour()));
    colours.extend(STEPS.iter().map(|&i| hsl.rotate(-i * 30.0).to_colour()));
    colours
}

/// Base, its complement, then four lighter steps of each.
pub fn complementary(base: Colour) -> Vec<Colour> {
    let hsl = base.to_hsl();
    let complement = hsl.rotate(180.0);

    let mut colours = Vec::with_capacity(10);
    colours.push(base);
    colours.push(complement.to_colour());
    colours.extend(STEPS.iter().map(|&i| lighter(hsl, i, 15.0)));
    colours.extend(STEPS.iter().map(|&i| lighter(complement, i, 15.0)));
    colours
}

/// Base and its two triads, then two lighter rounds of all three (20% apart).
pub fn triadic(base: Colour) -> Vec<Colour> {
    let hsl = base.to_hsl();
    let hues = [hsl, hsl.rotate(120.0), hsl.rotate(240.0)];

    let mut colours = Vec::with_capacity(9);
    colours.push(base);
    colours.push(hues[1].to_colour());
    colours.push(hues[2].to_colour());
    for step in [1.0, 2.0] {
        // The lightness target comes from the base; all three hues share it
        let lightness = (hsl.lightness + step * 20.0).min(LIGHTNESS_CEILING);
        colours.extend(hues.iter().map(|h| h.with_lightness(lightness).to_colour()));
    }
    colours
}

/// Ten independent colours: any hue, saturation 50-100%, lightness 40-80%.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Vec<Colour> {
    (0..10)
        .map(|_| {
            let hue = rng.gen_range(0u16..360);
            let saturation = rng.gen_range(50u8..=100);
            let lightness = rng.gen_range(40u8..=80);
            Hsl::new(f32::from(hue), f32::from(saturation), f32::from(lightness)).to_colour()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BASE: Colour = Colour::rgb(0x34, 0x98, 0xdb);

    /// Signed shortest distance between two hues in degrees.
    fn hue_delta(a: f32, b: f32) -> f32 {
        let d = (b - a).rem_euclid(360.0);
        if d > 180.0 {
            d - 360.0
        } else {
            d
        }
    }

    fn assert_hue_near(actual: f32, expected: f32, tolerance: f32) {
        let delta = hue_delta(actual, expected).abs();
        assert!(
            delta <= tolerance,
            "hue {} not within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_monochromatic_shape() {
        let colours = monochromatic(BASE);
        assert_eq!(colours.len(), 9);
        assert_eq!(colours[0], BASE);

        let base = BASE.to_hsl();
        for (i, colour) in colours.iter().enumerate().skip(1) {
            let hsl = colour.to_hsl();
            assert_hue_near(hsl.hue, base.hue, 3.0);
            assert!((hsl.saturation - base.saturation).abs() <= 3.0, "entry {}", i);
            if i <= 4 {
                assert!(hsl.lightness > base.lightness, "entry {} should be lighter", i);
            } else {
                assert!(hsl.lightness < base.lightness, "entry {} should be darker", i);
            }
        }
    }

    #[test]
    fn test_monochromatic_lightness_steps() {
        // #3498DB sits at 53% lightness
        let colours = monochromatic(BASE);
        let lightness: Vec<f32> = colours.iter().map(|c| c.to_hsl().lightness).collect();
        let expected = [53.0, 68.0, 83.0, 90.0, 90.0, 38.0, 23.0, 10.0, 10.0];
        for (i, (actual, want)) in lightness.iter().zip(expected).enumerate() {
            assert!(
                (actual - want).abs() <= 1.0,
                "entry {}: lightness {} expected about {}",
                i,
                actual,
                want
            );
        }
    }

    #[test]
    fn test_monochromatic_uses_unrounded_hsl() {
        // Rounding the base to hsl(204, 70%, 53%) first would give #74B9E7
        assert_eq!(monochromatic(BASE)[1], Colour::rgb(0x75, 0xb9, 0xe7));
    }

    #[test]
    fn test_monochromatic_clamps_extremes() {
        // Near-white bases never exceed the ceiling; near-black never drop below the floor
        let light = monochromatic(Colour::rgb(0xf0, 0xf8, 0xff));
        for colour in &light[1..5] {
            assert!(colour.to_hsl().lightness <= LIGHTNESS_CEILING + 0.5);
        }
        let dark = monochromatic(Colour::rgb(0x10, 0x08, 0x00));
        for colour in &dark[5..] {
            assert!(colour.to_hsl().lightness >= LIGHTNESS_FLOOR - 0.5);
        }
        assert_ne!(dark[8], Colour::BLACK);
    }

    #[test]
    fn test_analogous_hues() {
        let colours = analogous(BASE);
        assert_eq!(colours.len(), 9);
        assert_eq!(colours[0], BASE);

        let base = BASE.to_hsl();
        for i in 1..=4 {
            assert_hue_near(colours[i].to_hsl().hue, base.hue + 30.0 * i as f32, 1.0);
            assert_hue_near(colours[4 + i].to_hsl().hue, base.hue - 30.0 * i as f32, 1.0);
        }
    }

    #[test]
    fn test_analogous_wraps_below_zero() {
        // Red at hue 0 walks backwards through 330, 300, 270, 240
        let colours = analogous(Colour::rgb(255, 0, 0));
        assert_eq!(colours[2], Colour::rgb(255, 255, 0));
        assert_eq!(colours[4], Colour::rgb(0, 255, 0));
        assert_eq!(colours[6], Colour::rgb(255, 0, 255));
        assert_eq!(colours[8], Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_complementary_shape() {
        let colours = complementary(BASE);
        assert_eq!(colours.len(), 10);
        assert_eq!(colours[0], BASE);

        let base = BASE.to_hsl();
        let complement = colours[1].to_hsl();
        assert_hue_near(complement.hue, base.hue + 180.0, 1.0);

        for colour in &colours[2..6] {
            assert_hue_near(colour.to_hsl().hue, base.hue, 3.0);
            assert!(colour.to_hsl().lightness > base.lightness);
        }
        for colour in &colours[6..10] {
            assert_hue_near(colour.to_hsl().hue, base.hue + 180.0, 3.0);
            assert!(colour.to_hsl().lightness > base.lightness);
        }
    }

    #[test]
    fn test_complementary_of_red_is_cyan() {
        let colours = complementary(Colour::rgb(255, 0, 0));
        assert_eq!(colours[1], Colour::rgb(0, 255, 255));
    }

    #[test]
    fn test_triadic_hues() {
        let colours = triadic(BASE);
        assert_eq!(colours.len(), 9);
        assert_eq!(colours[0], BASE);

        let h0 = colours[0].to_hsl().hue;
        let h1 = colours[1].to_hsl().hue;
        let h2 = colours[2].to_hsl().hue;
        assert_hue_near(h1, h0 + 120.0, 1.0);
        assert_hue_near(h2, h0 + 240.0, 1.0);
        assert_hue_near(h2, h1 + 120.0, 1.0);
    }

    #[test]
    fn test_triadic_lighter_rounds() {
        let colours = triadic(Colour::rgb(255, 0, 0));
        assert_eq!(colours[1], Colour::rgb(0, 255, 0));
        assert_eq!(colours[2], Colour::rgb(0, 0, 255));
        // Round one at 70% lightness, round two at 90%
        assert_eq!(colours[3], Colour::rgb(255, 102, 102));
        assert_eq!(colours[4], Colour::rgb(102, 255, 102));
        assert_eq!(colours[5], Colour::rgb(102, 102, 255));
        assert_eq!(colours[6], Colour::rgb(255, 204, 204));
        assert_eq!(colours[8], Colour::rgb(204, 204, 255));
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let colours = random(&mut rng);
            assert_eq!(colours.len(), 10);
            for colour in colours {
                let hsl = colour.to_hsl();
                assert!(hsl.saturation >= 49.0, "saturation {}", hsl.saturation);
                assert!(
                    (39.0..=81.0).contains(&hsl.lightness),
                    "lightness {}",
                    hsl.lightness
                );
            }
        }
    }

    #[test]
    fn test_random_differs_between_calls() {
        let mut rng = rand::thread_rng();
        assert_ne!(random(&mut rng), random(&mut rng));
    }
}
