//! Predefined palettes: curated foreground/background pairs by category.
//!
//! Static data only. Nothing here is computed until a caller asks for an
//! [`PredefinedPalette::evaluate`], which runs the regular classifier.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::compliance::{Level, check_wcag_compliance};

/// Catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    WarmNeutrals,
    ModernPastels,
    SoftEarthTones,
    MinimalistBluesGrays,
    BlackWhiteAccent,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::WarmNeutrals,
        Self::ModernPastels,
        Self::SoftEarthTones,
        Self::MinimalistBluesGrays,
        Self::BlackWhiteAccent,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WarmNeutrals => "Warm Neutrals",
            Self::ModernPastels => "Modern Pastels",
            Self::SoftEarthTones => "Soft Earth Tones",
            Self::MinimalistBluesGrays => "Minimalist Blues and Grays",
            Self::BlackWhiteAccent => "Black/White with Accent",
        }
    }

    /// Kebab-case key, used for lookup and palette ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::WarmNeutrals => "warm-neutrals",
            Self::ModernPastels => "modern-pastels",
            Self::SoftEarthTones => "soft-earth-tones",
            Self::MinimalistBluesGrays => "minimalist-blues-grays",
            Self::BlackWhiteAccent => "black-white-accent",
        }
    }

    /// Palettes in this category, in catalog order.
    #[must_use]
    pub const fn palettes(self) -> &'static [PredefinedPalette] {
        match self {
            Self::WarmNeutrals => WARM_NEUTRALS,
            Self::ModernPastels => MODERN_PASTELS,
            Self::SoftEarthTones => SOFT_EARTH_TONES,
            Self::MinimalistBluesGrays => MINIMALIST_BLUES_GRAYS,
            Self::BlackWhiteAccent => BLACK_WHITE_ACCENT,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error for an unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the kebab-case key or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// A named catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PredefinedPalette {
    pub name: &'static str,
    pub foreground: &'static str,
    pub background: &'static str,
}

/// A catalog entry together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub id: String,
    pub name: String,
    pub foreground: String,
    pub background: String,
    pub contrast_ratio: f64,
    pub wcag_level: Level,
    pub is_accessible: bool,
}

impl PredefinedPalette {
    const fn new(name: &'static str, foreground: &'static str, background: &'static str) -> Self {
        Self {
            name,
            foreground,
            background,
        }
    }

    /// Classify this entry. `index` is its position within `category` and
    /// forms the id, e.g. `warm-neutrals-0`.
    #[must_use]
    pub fn evaluate(&self, category: Category, index: usize) -> ColorPalette {
        let result = check_wcag_compliance(self.foreground, self.background);
        ColorPalette {
            id: format!("{}-{index}", category.key()),
            name: self.name.to_owned(),
            foreground: self.foreground.to_owned(),
            background: self.background.to_owned(),
            contrast_ratio: result.contrast_ratio,
            wcag_level: result.level,
            is_accessible: result.is_accessible,
        }
    }
}

/// Classify every palette in `category`.
#[must_use]
pub fn evaluate_category(category: Category) -> Vec<ColorPalette> {
    category
        .palettes()
        .iter()
        .enumerate()
        .map(|(i, p)| p.evaluate(category, i))
        .collect()
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

type P = PredefinedPalette;

const WARM_NEUTRALS: &[P] = &[
    P::new("Wood for Winter", "#DCCCBD", "#021825"),
    P::new("La Renard", "#CCBCAD", "#383931"),
    P::new("Library Leather", "#F7E7CE", "#59372B"),
    P::new("Put It in Neutral", "#EDE3D9", "#1C2915"),
    P::new("Champagne Crystal", "#D6CFBF", "#4E4D49"),
    P::new("Taupe Minimal", "#C8BFB8", "#4E311D"),
];

const MODERN_PASTELS: &[P] = &[
    P::new("Lavender Meadow", "#EBE6F5", "#463769"),
    P::new("Coastal Breeze", "#F8F9FA", "#0A2E4E"),
    P::new("Twilight Garden", "#FFF4E0", "#3D3232"),
    P::new("Tropical Morning", "#F9F9F1", "#354E67"),
    P::new("Blossoms", "#F7F7EE", "#2F4027"),
    P::new("Serenity", "#F5F1E1", "#7D6754"),
];

const SOFT_EARTH_TONES: &[P] = &[
    P::new("Bohemian Sun", "#FFF8F0", "#685555"),
    P::new("Nautilus Fossil", "#CBC7BB", "#42201F"),
    P::new("Vintage Vault", "#CECDC9", "#180B02"),
    P::new("Gray + Gold Gears", "#F6EEE3", "#3F3832"),
    P::new("Oatmeal Sweater", "#F1E3BC", "#574748"),
    P::new("Slug Bug", "#D3DCDB", "#2B3029"),
];

const MINIMALIST_BLUES_GRAYS: &[P] = &[
    P::new("Forest Mist", "#EEF3F9", "#001B2E"),
    P::new("La Luna", "#E9E8EE", "#101B39"),
    P::new("Muted Grays & Blues", "#000000", "#B3CDD7"),
    P::new("Blue Gray Scheme", "#FFFFFF", "#003B6D"),
    P::new("UVA Cool Contrast", "#F1F1EF", "#232D4B"),
    P::new("Muted Grey Blue", "#000000", "#BFDFE7"),
];

const BLACK_WHITE_ACCENT: &[P] = &[
    P::new("Urban Chic", "#000000", "#FFFFFF"),
    P::new("Frosted Noir", "#FFFFFF", "#000000"),
    P::new("Classic Contrast", "#000000", "#C0C0C0"),
    P::new("Vintage Film", "#000000", "#D9D9D9"),
    P::new("Minimal Brass Accent", "#1C1C1C", "#FEFDFB"),
    P::new("Powerful B&W", "#FFFFFF", "#000000"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
