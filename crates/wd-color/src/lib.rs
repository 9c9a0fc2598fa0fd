// SPDX-License-Identifier: MIT
//
// wd-color — Color codec and luminance for wcag-design.
//
// The leaf of the pipeline. Everything downstream (contrast, compliance,
// palette synthesis) starts from a hex string that this crate decodes into
// an exact 8-bit RGB triple, and from the WCAG relative luminance computed
// on that triple.
//
// Malformed input is never an error here: parsing returns `None` and the
// caller decides what an unparsable color means. The only fallible type is
// `HexColor`, the validated newtype for callers that want a checked value
// up front.

pub mod hex;
pub mod luminance;
pub mod rgb;

pub use hex::{ColorError, HexColor, is_valid_hex_color, normalize_hex_color, parse_hex};
pub use luminance::relative_luminance;
pub use rgb::Rgb;
