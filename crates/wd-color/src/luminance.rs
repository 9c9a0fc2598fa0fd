// SPDX-License-Identifier: MIT
//
// WCAG 2.x relative luminance.
//
// The sRGB transfer function is removed per channel, then the linear
// channels are weighted by the Rec. 709 luma coefficients. The linearization
// threshold is WCAG's 0.03928, not the IEC 0.04045. No 8-bit channel value
// falls between the two, so the choice never changes a result here.

use crate::rgb::Rgb;

/// Below this (normalized) value the sRGB curve is linear.
pub const LINEAR_THRESHOLD: f64 = 0.039_28;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Convert a normalized sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light of an 8-bit channel.
#[inline]
#[must_use]
pub fn channel_to_linear(c: u8) -> f64 {
    srgb_to_linear(f64::from(c) / 255.0)
}

/// Relative luminance of a color, in [0.0, 1.0].
///
/// ```text
/// L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin
/// ```
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r = channel_to_linear(rgb.r);
    let g = channel_to_linear(rgb.g);
    let b = channel_to_linear(rgb.b);
    RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b
}
