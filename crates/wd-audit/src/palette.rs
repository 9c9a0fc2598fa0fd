//! Accessible palette synthesis: from one seed color to every passing pair.
//!
//! The seed yields three foreground variants (itself, a darker and a lighter
//! shift). Each is tried against a fixed set of canonical backgrounds and
//! only the pairs that classify as accessible are kept:
//!
//! ```text
//! for bg in backgrounds          (outer)
//!     for fg in [seed, darker, lighter]   (inner)
//!         skip if (fg, bg) already emitted
//!         keep if check_wcag_compliance(fg, bg).is_accessible
//! ```
//!
//! Output order is exactly this enumeration order, so a given seed always
//! produces the same sequence.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use wd_color::{Rgb, parse_hex};

use crate::compliance::check_wcag_compliance;

/// Default per-channel shift for the darker/lighter variants.
pub const DEFAULT_SHIFT: u8 = 40;

/// Canonical backgrounds, light to dark.
pub const DEFAULT_BACKGROUNDS: [&str; 6] =
    ["#ffffff", "#f8f9fa", "#e9ecef", "#dee2e6", "#212529", "#000000"];

// ---------------------------------------------------------------------------
// ColorInput
// ---------------------------------------------------------------------------

/// One candidate palette: a foreground drawn on a background.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorInput {
    pub foreground: String,
    pub background: String,
}

impl ColorInput {
    #[must_use]
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }

    /// Case-insensitive identity used for deduplication.
    #[must_use]
    pub fn key(&self) -> (String, String) {
        (self.foreground.to_ascii_lowercase(), self.background.to_ascii_lowercase())
    }
}

// ---------------------------------------------------------------------------
// PaletteOptions
// ---------------------------------------------------------------------------

/// Tunable inputs of the synthesizer.
///
/// The shift of 40 is a heuristic, not a WCAG constant, so it is exposed
/// here along with the background set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteOptions {
    /// Amount added to / subtracted from every channel for the variants.
    pub shift: u8,
    /// Backgrounds tried, in order.
    pub backgrounds: Vec<String>,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
            backgrounds: DEFAULT_BACKGROUNDS.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}

impl PaletteOptions {
    /// The three foreground variants for `seed`: itself, darker, lighter.
    #[must_use]
    pub const fn variants(&self, seed: Rgb) -> [Rgb; 3] {
        [seed, seed.darken(self.shift), seed.lighten(self.shift)]
    }
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Every accessible pair derived from `seed` with the default options.
///
/// Returns an empty vector if `seed` is not a valid hex color, or if no
/// candidate passes.
///
/// ```
/// use wd_audit::palette::generate_accessible_palette;
///
/// let pairs = generate_accessible_palette("#1976d2");
/// assert_eq!(pairs[0].foreground, "#1976d2");
/// assert_eq!(pairs[0].background, "#ffffff");
/// assert!(generate_accessible_palette("not-a-color").is_empty());
/// ```
#[must_use]
pub fn generate_accessible_palette(seed: &str) -> Vec<ColorInput> {
    generate_accessible_palette_with(seed, &PaletteOptions::default())
}

/// [`generate_accessible_palette`] with explicit options.
#[must_use]
pub fn generate_accessible_palette_with(seed: &str, options: &PaletteOptions) -> Vec<ColorInput> {
    let Some(rgb) = parse_hex(seed) else {
        log::debug!("palette seed {seed:?} is not a hex color");
        return Vec::new();
    };

    let variants = options.variants(rgb).map(Rgb::to_hex);
    let mut seen = HashSet::new();
    let mut palette = Vec::new();

    for bg in &options.backgrounds {
        for fg in &variants {
            let candidate = ColorInput::new(fg.as_str(), bg.to_ascii_lowercase());
            if seen.contains(&candidate.key()) {
                continue;
            }

            let result = check_wcag_compliance(&candidate.foreground, &candidate.background);
            if result.is_accessible {
                log::trace!("keep {fg} on {bg} ({}:1 {})", result.contrast_ratio, result.level);
                seen.insert(candidate.key());
                palette.push(candidate);
            } else {
                log::trace!("drop {fg} on {bg} ({}:1)", result.contrast_ratio);
            }
        }
    }

    log::debug!("palette for {seed}: {} accessible pairs", palette.len());
    palette
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(list: &[(&str, &str)]) -> Vec<ColorInput> {
        list.iter().map(|&(fg, bg)| ColorInput::new(fg, bg)).collect()
    }

    #[test]
    fn material_blue_palette() {
        let expected = pairs(&[
            ("#1976d2", "#ffffff"),
            ("#004eaa", "#ffffff"),
            ("#004eaa", "#f8f9fa"),
            ("#004eaa", "#e9ecef"),
            ("#004eaa", "#dee2e6"),
            ("#419efa", "#212529"),
            ("#1976d2", "#000000"),
            ("#419efa", "#000000"),
        ]);
        assert_eq!(generate_accessible_palette("#1976d2"), expected);
    }

    #[test]
    fn gray_seed_palette() {
        let expected = pairs(&[
            ("#4f4f4f", "#ffffff"),
            ("#4f4f4f", "#f8f9fa"),
            ("#4f4f4f", "#e9ecef"),
            ("#4f4f4f", "#dee2e6"),
            ("#9f9f9f", "#212529"),
            ("#777777", "#000000"),
            ("#9f9f9f", "#000000"),
        ]);
        assert_eq!(generate_accessible_palette("#777777"), expected);
    }

    #[test]
    fn white_seed_collapses_duplicate_variant() {
        // Lightening white is still white; the duplicate pair is emitted once.
        let expected = pairs(&[
            ("#ffffff", "#212529"),
            ("#d7d7d7", "#212529"),
            ("#ffffff", "#000000"),
            ("#d7d7d7", "#000000"),
        ]);
        assert_eq!(generate_accessible_palette("#ffffff"), expected);
    }

    #[test]
    fn every_pair_is_accessible() {
        for seed in ["#1976d2", "#2e7d32", "#d32f2f", "#f57c00", "#9c27b0", "#808080"] {
            for pair in generate_accessible_palette(seed) {
                let r = check_wcag_compliance(&pair.foreground, &pair.background);
                assert!(r.is_accessible, "{seed}: {pair:?} is {}", r.level);
            }
        }
    }

    #[test]
    fn no_duplicate_keys() {
        for seed in ["#1976d2", "#000000", "#ffffff", "#ABCDEF"] {
            let palette = generate_accessible_palette(seed);
            let keys: HashSet<_> = palette.iter().map(ColorInput::key).collect();
            assert_eq!(keys.len(), palette.len(), "duplicates for {seed}");
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(generate_accessible_palette("#1976d2"), generate_accessible_palette("#1976d2"));
    }

    #[test]
    fn seed_case_and_shorthand_normalize() {
        assert_eq!(generate_accessible_palette("#1976D2"), generate_accessible_palette("#1976d2"));
        assert_eq!(generate_accessible_palette("#FFF"), generate_accessible_palette("#ffffff"));
    }

    #[test]
    fn invalid_seed_is_empty() {
        assert!(generate_accessible_palette("not-a-color").is_empty());
        assert!(generate_accessible_palette("1976d2").is_empty());
        assert!(generate_accessible_palette("").is_empty());
    }

    #[test]
    fn custom_backgrounds_dedup_case_insensitively() {
        let options = PaletteOptions {
            shift: DEFAULT_SHIFT,
            backgrounds: vec!["#FFFFFF".into(), "#ffffff".into()],
        };
        let palette = generate_accessible_palette_with("#000000", &options);
        assert_eq!(palette, pairs(&[("#000000", "#ffffff"), ("#282828", "#ffffff")]));
    }

    #[test]
    fn zero_shift_keeps_only_seed() {
        let options = PaletteOptions {
            shift: 0,
            ..PaletteOptions::default()
        };
        let palette = generate_accessible_palette_with("#000000", &options);
        assert!(palette.iter().all(|p| p.foreground == "#000000"));
        assert_eq!(palette.len(), 4);
    }

    #[test]
    fn shorthand_seed_is_emitted_in_long_form() {
        let palette = generate_accessible_palette("#FFF");
        assert_eq!(palette[0], ColorInput::new("#ffffff", "#212529"));
    }
}
