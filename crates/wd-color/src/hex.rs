// SPDX-License-Identifier: MIT
//
// Hex color codec.
//
// One contract for every entry point: a color is `#` followed by exactly
// three or six hex digits, case-insensitive. `parse_hex` and
// `is_valid_hex_color` accept precisely the same strings. The regex is
// the published definition, the byte parser is the fast path that
// actually decodes.
//
// The 3-digit shorthand duplicates each nibble: `#abc` is `#aabbcc`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rgb::Rgb;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color pattern compiles")
});

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Decode `#RRGGBB` or `#RGB` into an exact RGB triple.
///
/// Returns `None` for anything else: a missing `#`, surrounding
/// whitespace, a wrong digit count, or a non-hex character.
///
/// # Examples
///
/// ```
/// use wd_color::{Rgb, parse_hex};
///
/// assert_eq!(parse_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
/// assert_eq!(parse_hex("#f80"), Some(Rgb::new(255, 136, 0)));
/// assert_eq!(parse_hex("ff8000"), None);
/// ```
#[must_use]
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let digits = input.strip_prefix('#')?.as_bytes();

    match digits.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(digits[0])?;
            let g = parse_hex_digit(digits[1])?;
            let b = parse_hex_digit(digits[2])?;
            Some(Rgb::new((r << 4) | r, (g << 4) | g, (b << 4) | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(digits[0], digits[1])?;
            let g = parse_hex_byte(digits[2], digits[3])?;
            let b = parse_hex_byte(digits[4], digits[5])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

/// Whether `text` is a well-formed `#RGB` / `#RRGGBB` color.
#[must_use]
pub fn is_valid_hex_color(text: &str) -> bool {
    HEX_COLOR.is_match(text)
}

/// Expand the `#abc` shorthand to `#aabbcc`.
///
/// Only a `#` followed by three characters is rewritten; every other input
/// comes back unchanged. No validation happens here, so `#xyz` expands to
/// `#xxyyzz` and the caller's validity check rejects it later.
#[must_use]
pub fn normalize_hex_color(input: &str) -> String {
    let Some(rest) = input.strip_prefix('#') else {
        return input.to_owned();
    };

    let mut chars = rest.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(g), Some(b), None) => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in [r, g, b] {
                out.push(c);
                out.push(c);
            }
            out
        }
        _ => input.to_owned(),
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
const fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    match (parse_hex_digit(hi), parse_hex_digit(lo)) {
        (Some(hi), Some(lo)) => Some((hi << 4) | lo),
        _ => None,
    }
}

// ─── HexColor ────────────────────────────────────────────────────────────────

/// Error produced when a string is not a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}' (expected #RGB or #RRGGBB)")]
    InvalidHex(String),
}

/// A validated color, stored as lower-case `#rrggbb`.
///
/// Parsing goes through [`normalize_hex_color`] and [`parse_hex`], so the
/// shorthand and upper-case forms all land on the same canonical string.
///
/// ```
/// use wd_color::HexColor;
///
/// let c: HexColor = "#ABC".parse().unwrap();
/// assert_eq!(c.as_str(), "#aabbcc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    hex: String,
    rgb: Rgb,
}

impl HexColor {
    /// The canonical `#rrggbb` form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
        }
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
            .map(Self::from)
            .ok_or_else(|| ColorError::InvalidHex(s.to_owned()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.hex
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── parse_hex ────────────────────────────────────────────────────────

    #[test]
    fn parse_rrggbb() {
        assert_eq!(parse_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(parse_hex("#1976D2"), Some(Rgb::new(0x19, 0x76, 0xd2)));
    }

    #[test]
    fn parse_short_duplicates_nibbles() {
        assert_eq!(parse_hex("#f80"), Some(Rgb::new(0xff, 0x88, 0x00)));
        assert_eq!(parse_hex("#FFF"), Some(Rgb::WHITE));
    }

    #[test]
    fn parse_requires_hash() {
        assert_eq!(parse_hex("00ff00"), None);
        assert_eq!(parse_hex("abc"), None);
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in [
            "", "#", "#12345", "#1234567", "#gggggg", " #ffffff", "#ffffff ", "#ff ff0", "#ffff",
            "##fff", "#ffé",
        ] {
            assert_eq!(parse_hex(bad), None, "accepted {bad:?}");
        }
    }

    // ── is_valid_hex_color ───────────────────────────────────────────────

    #[test]
    fn validity_examples() {
        assert!(is_valid_hex_color("#FFF"));
        assert!(is_valid_hex_color("#ffffff"));
        assert!(is_valid_hex_color("#1976d2"));
        assert!(!is_valid_hex_color("abc123"));
        assert!(!is_valid_hex_color("#12345"));
        assert!(!is_valid_hex_color("#gggggg"));
        assert!(!is_valid_hex_color("#ffffff\n"));
    }

    #[test]
    fn validity_agrees_with_parser() {
        for s in [
            "#000", "#000000", "#AbCdEf", "#abc", "abc", "#ab", "#abcd", "#abcde", "#abcdeff",
            "#xyz", "#12 456", "", "#",
        ] {
            assert_eq!(is_valid_hex_color(s), parse_hex(s).is_some(), "disagree on {s:?}");
        }
    }

    // ── normalize_hex_color ──────────────────────────────────────────────

    #[test]
    fn normalize_expands_shorthand() {
        assert_eq!(normalize_hex_color("#abc"), "#aabbcc");
        assert_eq!(normalize_hex_color("#F0A"), "#FF00AA");
    }

    #[test]
    fn normalize_is_idempotent() {
        assert_eq!(normalize_hex_color("#aabbcc"), "#aabbcc");
        let once = normalize_hex_color("#123");
        assert_eq!(normalize_hex_color(&once), once);
    }

    #[test]
    fn normalize_passes_other_lengths_through() {
        assert_eq!(normalize_hex_color(""), "");
        assert_eq!(normalize_hex_color("#12345"), "#12345");
        assert_eq!(normalize_hex_color("abc"), "abc");
        assert_eq!(normalize_hex_color("abcd"), "abcd");
    }

    #[test]
    fn normalize_does_not_validate() {
        assert_eq!(normalize_hex_color("#xyz"), "#xxyyzz");
    }

    // ── HexColor ─────────────────────────────────────────────────────────

    #[test]
    fn hex_color_canonicalizes() {
        let a: HexColor = "#ABC".parse().unwrap();
        let b: HexColor = "#aabbcc".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "#aabbcc");
        assert_eq!(a.rgb(), Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn hex_color_error_names_input() {
        let err = "teal".parse::<HexColor>().unwrap_err();
        assert_eq!(err, ColorError::InvalidHex("teal".into()));
        assert!(err.to_string().contains("'teal'"));
    }

    #[test]
    fn hex_color_from_rgb() {
        let c = HexColor::from(Rgb::new(1, 2, 3));
        assert_eq!(c.as_str(), "#010203");
    }
}
