//! # wd-audit — WCAG compliance engine
//!
//! Decides whether a text color is readable on a background, explains why
//! not, and proposes pairs that are.
//!
//! # Architecture
//!
//! ```text
//! "#fg", "#bg"
//!     │
//!     ▼
//! wd-color:       hex → Rgb → relative luminance
//!     │
//!     ▼
//! contrast.rs:    (L_lighter + 0.05) / (L_darker + 0.05)
//!     │
//!     ▼
//! compliance.rs:  ratio → AA/AAA checks → Level + recommendations
//!     │
//!     ▼
//! palette.rs:     seed → variants × backgrounds → accessible pairs
//! ```
//!
//! `catalog.rs` and `seeds.rs` are static data that feed the same pipeline.
//!
//! Every function is pure. Malformed colors never panic: they come back as
//! a `0.0` ratio, a `FAIL` result, or an empty palette.

// Thresholds are exact constants; comparing against them is the point.
#![allow(clippy::float_cmp)]
// Modulo of a u32 into a short slice index.
#![allow(clippy::cast_possible_truncation)]

pub mod catalog;
pub mod compliance;
pub mod contrast;
pub mod palette;
pub mod seeds;

pub use compliance::{AccessibilityCheck, Level, Recommendation, WcagResult, check_wcag_compliance};
pub use contrast::contrast_ratio;
pub use palette::{ColorInput, PaletteOptions, generate_accessible_palette};
pub use wd_color::{is_valid_hex_color, normalize_hex_color};
