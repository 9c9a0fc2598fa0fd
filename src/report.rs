// SPDX-License-Identifier: MIT
//
// Text and JSON rendering of audit results.
//
// Everything writes to an `impl Write` so tests can render into a Vec. Text
// columns are padded by display width rather than byte length, since the
// verdict glyphs (✓ ✗) are multi-byte. Swatches are truecolor SGR
// sequences (38;2 / 48;2) and are only emitted when `Style::color` is set.

use std::io::{self, Write};

use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use wd_audit::catalog::{Category, ColorPalette};
use wd_audit::{ColorInput, WcagResult, check_wcag_compliance};
use wd_color::{HexColor, Rgb, parse_hex};

const LABEL_WIDTH: usize = 14;
const VERDICT_WIDTH: usize = 20;
const NAME_WIDTH: usize = 22;
const SAMPLE_TEXT: &str = " Aa Bb Cc  Example Text ";

const COMPLIES: &str = "✓ Complies";
const NOT_COMPLIES: &str = "✗ Does not comply";

/// Output switches shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Emit ANSI truecolor swatches.
    pub color: bool,
}

// ─── JSON shapes ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport<'a> {
    pub foreground: &'a str,
    pub background: &'a str,
    #[serde(flatten)]
    pub result: &'a WcagResult,
    pub compliance_score: u8,
}

#[derive(Serialize)]
pub struct PaletteReport<'a> {
    pub seed: &'a HexColor,
    pub shift: u8,
    pub pairs: &'a [ColorInput],
}

#[derive(Serialize)]
pub struct CatalogSection {
    pub key: &'static str,
    pub category: &'static str,
    pub palettes: Vec<ColorPalette>,
}

impl CatalogSection {
    pub fn new(category: Category, palettes: Vec<ColorPalette>) -> Self {
        Self {
            key: category.key(),
            category: category.display_name(),
            palettes,
        }
    }
}

#[derive(Serialize)]
pub struct ValidateReport<'a> {
    pub input: &'a str,
    pub valid: bool,
    pub normalized: String,
}

/// Pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(w: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Left-align `text` in `width` terminal columns.
pub fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// `text` drawn in `fg` on `bg`, then reset.
pub fn write_swatch(w: &mut impl Write, fg: Rgb, bg: Rgb, text: &str) -> io::Result<()> {
    write!(
        w,
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{text}\x1b[0m",
        fg.r, fg.g, fg.b, bg.r, bg.g, bg.b
    )
}

/// Swatch for two hex strings when color is on and both parse; nothing
/// otherwise.
fn write_pair_swatch(
    w: &mut impl Write,
    style: Style,
    foreground: &str,
    background: &str,
    text: &str,
) -> io::Result<bool> {
    if !style.color {
        return Ok(false);
    }
    match (parse_hex(foreground), parse_hex(background)) {
        (Some(fg), Some(bg)) => write_swatch(w, fg, bg, text).map(|()| true),
        _ => Ok(false),
    }
}

const fn verdict(pass: bool) -> &'static str {
    if pass { COMPLIES } else { NOT_COMPLIES }
}

fn write_field(w: &mut impl Write, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(w, "{}{value}", pad(label, LABEL_WIDTH))
}

// ─── Renderers ───────────────────────────────────────────────────────────────

/// Full report for one pair.
pub fn write_check(
    w: &mut impl Write,
    foreground: &str,
    background: &str,
    result: &WcagResult,
    style: Style,
) -> io::Result<()> {
    if write_pair_swatch(w, style, foreground, background, SAMPLE_TEXT)? {
        writeln!(w)?;
        writeln!(w)?;
    }

    write_field(w, "Text Color", foreground)?;
    write_field(w, "Background", background)?;
    write_field(w, "Contrast", format_args!("{:.2}:1", result.contrast_ratio))?;
    write_field(
        w,
        "Level",
        format_args!("{} ({})", result.level, result.level.status_text()),
    )?;
    write_field(w, "Score", format_args!("{}%", result.compliance_score()))?;
    writeln!(w)?;

    let check = result.accessibility;
    writeln!(w, "{}{}AAA", pad("", LABEL_WIDTH), pad("AA", VERDICT_WIDTH))?;
    writeln!(
        w,
        "{}{}{}",
        pad("Normal Text", LABEL_WIDTH),
        pad(verdict(check.normal_aa()), VERDICT_WIDTH),
        verdict(check.normal_aaa()),
    )?;
    writeln!(
        w,
        "{}{}{}",
        pad("Large Text", LABEL_WIDTH),
        pad(verdict(check.large_aa()), VERDICT_WIDTH),
        verdict(check.large_aaa()),
    )?;

    if let Some(recs) = &result.recommendations {
        writeln!(w)?;
        writeln!(w, "Recommendations")?;
        for rec in recs {
            writeln!(w, "  - {rec}")?;
        }
    }
    Ok(())
}

/// Accessible pairs derived from `seed`.
pub fn write_palette(
    w: &mut impl Write,
    seed: &str,
    pairs: &[ColorInput],
    style: Style,
) -> io::Result<()> {
    if pairs.is_empty() {
        writeln!(w, "No accessible palettes found with the selected base color.")?;
        return writeln!(w, "Try a different color or manually adjust the colors.");
    }

    writeln!(w, "Accessible pairs for {seed} ({})", pairs.len())?;
    writeln!(w)?;
    for pair in pairs {
        let result = check_wcag_compliance(&pair.foreground, &pair.background);
        write!(w, "  ")?;
        if write_pair_swatch(w, style, &pair.foreground, &pair.background, " Aa ")? {
            write!(w, " ")?;
        }
        writeln!(
            w,
            "{} on {}  {:>6.2}:1  {}",
            pair.foreground, pair.background, result.contrast_ratio, result.level
        )?;
    }
    Ok(())
}

/// Predefined palettes, grouped by category.
pub fn write_catalog(w: &mut impl Write, sections: &[CatalogSection], style: Style) -> io::Result<()> {
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        writeln!(w, "{} [{}]", section.category, section.key)?;
        for p in &section.palettes {
            write!(w, "  ")?;
            if write_pair_swatch(w, style, &p.foreground, &p.background, " Aa ")? {
                write!(w, " ")?;
            }
            writeln!(
                w,
                "{}{} on {}  {:>6.2}:1  {}",
                pad(&p.name, NAME_WIDTH),
                p.foreground,
                p.background,
                p.contrast_ratio,
                p.wcag_level
            )?;
        }
    }
    Ok(())
}

/// One-line validity verdict.
pub fn write_validate(w: &mut impl Write, report: &ValidateReport<'_>) -> io::Result<()> {
    if report.valid {
        writeln!(w, "{} is a valid hex color ({})", report.input, report.normalized)
    } else {
        writeln!(w, "{:?} is not a valid hex color", report.input)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
