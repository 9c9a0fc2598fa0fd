//! WCAG contrast ratio between two colors.
//!
//! ```text
//! ratio = (L_lighter + 0.05) / (L_darker + 0.05)
//! ```
//!
//! The ratio lives in [1.0, 21.0] and does not depend on argument order.
//! The string entry point returns `0.0` when either color fails to parse:
//! a value no real pair can produce, so callers can tell "incomputable"
//! apart from "low contrast".

use wd_color::{Rgb, parse_hex, relative_luminance};

/// Contrast ratio of two luminance values, in either order.
#[must_use]
pub fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two decoded colors.
fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio between two hex colors.
///
/// Returns `0.0` if either string is not a valid `#RGB` / `#RRGGBB` color.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    match (parse_hex(a), parse_hex(b)) {
        (Some(a), Some(b)) => contrast_ratio_rgb(a, b),
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
