//! WCAG compliance classification.
//!
//! Maps a contrast ratio to the four text-size checks, folds those into a
//! single conformance [`Level`], and explains failures with ordered
//! [`Recommendation`]s.
//!
//! | Check            | Threshold |
//! |------------------|-----------|
//! | normal text AA   | ≥ 4.5     |
//! | normal text AAA  | ≥ 7.0     |
//! | large text AA    | ≥ 3.0     |
//! | large text AAA   | ≥ 4.5     |
//!
//! Thresholds apply to the raw ratio; only the reported
//! [`WcagResult::contrast_ratio`] is rounded.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use wd_color::{parse_hex, relative_luminance};

use crate::contrast::ratio_from_luminance;

/// Normal text, level AA.
pub const NORMAL_AA: f64 = 4.5;
/// Normal text, level AAA.
pub const NORMAL_AAA: f64 = 7.0;
/// Large text, level AA.
pub const LARGE_AA: f64 = 3.0;
/// Large text, level AAA.
pub const LARGE_AAA: f64 = 4.5;

// ---------------------------------------------------------------------------
// AccessibilityCheck
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// Which WCAG text-size checks a ratio passes.
    ///
    /// ```
    /// use wd_audit::compliance::AccessibilityCheck;
    ///
    /// let check = AccessibilityCheck::from_ratio(5.0);
    /// assert!(check.normal_aa() && check.large_aaa());
    /// assert!(!check.normal_aaa());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct AccessibilityCheck: u8 {
        const NORMAL_AA  = 1 << 0;
        const NORMAL_AAA = 1 << 1;
        const LARGE_AA   = 1 << 2;
        const LARGE_AAA  = 1 << 3;
    }
}

impl AccessibilityCheck {
    /// Evaluate every threshold against `ratio`.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        let mut check = Self::empty();
        check.set(Self::NORMAL_AA, ratio >= NORMAL_AA);
        check.set(Self::NORMAL_AAA, ratio >= NORMAL_AAA);
        check.set(Self::LARGE_AA, ratio >= LARGE_AA);
        check.set(Self::LARGE_AAA, ratio >= LARGE_AAA);
        check
    }

    #[must_use]
    pub const fn normal_aa(self) -> bool {
        self.contains(Self::NORMAL_AA)
    }

    #[must_use]
    pub const fn normal_aaa(self) -> bool {
        self.contains(Self::NORMAL_AAA)
    }

    #[must_use]
    pub const fn large_aa(self) -> bool {
        self.contains(Self::LARGE_AA)
    }

    #[must_use]
    pub const fn large_aaa(self) -> bool {
        self.contains(Self::LARGE_AAA)
    }
}

/// One text-size row (`{"aa": .., "aaa": ..}`) of the serialized check.
#[derive(Serialize)]
struct SizeCheck {
    aa: bool,
    aaa: bool,
}

impl Serialize for AccessibilityCheck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AccessibilityCheck", 2)?;
        s.serialize_field(
            "normalText",
            &SizeCheck {
                aa: self.normal_aa(),
                aaa: self.normal_aaa(),
            },
        )?;
        s.serialize_field(
            "largeText",
            &SizeCheck {
                aa: self.large_aa(),
                aaa: self.large_aaa(),
            },
        )?;
        s.end()
    }
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// WCAG conformance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Fail,
    Aa,
    Aaa,
}

impl Level {
    /// Fold the four checks into a tier. AAA needs both AAA checks, AA
    /// needs both AA checks.
    #[must_use]
    pub const fn from_check(check: AccessibilityCheck) -> Self {
        if check.normal_aaa() && check.large_aaa() {
            Self::Aaa
        } else if check.normal_aa() && check.large_aa() {
            Self::Aa
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn is_accessible(self) -> bool {
        !matches!(self, Self::Fail)
    }

    /// Short uppercase label: `FAIL`, `AA`, `AAA`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// One-line verdict for reports.
    #[must_use]
    pub const fn status_text(self) -> &'static str {
        match self {
            Self::Aaa => "Excellent - Complies AAA",
            Self::Aa => "Good - Complies AA",
            Self::Fail => "Not Accessible",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Advice attached to a failing result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Ratio below 3:1; not even large text passes.
    LowContrast,
    /// Ratio in [3, 4.5): large text passes AA, normal text does not.
    LargeTextOnly,
    /// Foreground is the lighter color; moving it darker widens the gap.
    DarkenForeground,
    /// Foreground is the darker (or equal) color.
    LightenForeground,
}

impl Recommendation {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LowContrast => {
                "Contrast is too low. Increase the difference between the text and background colors."
            }
            Self::LargeTextOnly => {
                "This contrast is only acceptable for large text (18pt, or 14pt bold, and above)."
            }
            Self::DarkenForeground => "Darken the text color to increase contrast.",
            Self::LightenForeground => "Lighten the text color to increase contrast.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// WcagResult
// ---------------------------------------------------------------------------

/// Outcome of checking one foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagResult {
    /// Contrast ratio rounded to two decimals; `0.0` when a color did not parse.
    pub contrast_ratio: f64,
    pub level: Level,
    pub is_accessible: bool,
    /// `Some` and non-empty exactly when the pair is not accessible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
    pub accessibility: AccessibilityCheck,
}

impl WcagResult {
    /// Coarse 0–100 progress figure: 100 for AAA, 75 for AA, 50 for a
    /// failing pair that still reaches 3:1, 25 below that.
    #[must_use]
    pub fn compliance_score(&self) -> u8 {
        match self.level {
            Level::Aaa => 100,
            Level::Aa => 75,
            Level::Fail if self.contrast_ratio >= LARGE_AA => 50,
            Level::Fail => 25,
        }
    }

    /// A zero ratio only comes from an unparsable color.
    #[must_use]
    pub fn is_incomputable(&self) -> bool {
        self.contrast_ratio == 0.0
    }
}

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// Check a foreground/background pair against WCAG.
///
/// Never panics on malformed input: an unparsable color yields a `FAIL`
/// result with ratio `0.0` and only the ratio-based recommendation.
#[must_use]
pub fn check_wcag_compliance(foreground: &str, background: &str) -> WcagResult {
    let luminance = parse_hex(foreground)
        .zip(parse_hex(background))
        .map(|(fg, bg)| (relative_luminance(fg), relative_luminance(bg)));

    let ratio = luminance.map_or(0.0, |(fg, bg)| ratio_from_luminance(fg, bg));
    let accessibility = AccessibilityCheck::from_ratio(ratio);
    let level = Level::from_check(accessibility);
    let is_accessible = level.is_accessible();

    let recommendations = (!is_accessible).then(|| {
        let mut recs = Vec::with_capacity(2);
        if ratio < LARGE_AA {
            recs.push(Recommendation::LowContrast);
        } else if ratio < NORMAL_AA {
            recs.push(Recommendation::LargeTextOnly);
        }
        if let Some((fg, bg)) = luminance {
            recs.push(if fg > bg {
                Recommendation::DarkenForeground
            } else {
                Recommendation::LightenForeground
            });
        }
        recs
    });

    log::trace!("{foreground} on {background}: ratio {ratio:.4}, {level}");

    WcagResult {
        contrast_ratio: round_ratio(ratio),
        level,
        is_accessible,
        recommendations,
        accessibility,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
