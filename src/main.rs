// SPDX-License-Identifier: MIT
//
// wcag-design — WCAG contrast checker and accessible palette generator.
//
// This is the binary that wires the crates to a command line:
//
//   wd-color → hex parsing, RGB, relative luminance
//   wd-audit → contrast ratio, compliance level, palettes, catalog
//
// Each invocation flows through:
//
//   argv → cli::parse_args → Command
//   settings.json → Settings (shift, backgrounds, color)
//   Command → wd-audit → report (text or JSON) → stdout
//
// Exit status: 0 on success, 1 on a usage error or invalid color, 2 when
// `check` (or `random`) finds a pair that is not accessible.

mod cli;
mod report;
mod settings;

use std::env;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use wd_audit::catalog::{Category, evaluate_category};
use wd_audit::palette::generate_accessible_palette_with;
use wd_audit::seeds::random_pair;
use wd_audit::{check_wcag_compliance, is_valid_hex_color, normalize_hex_color};

use cli::{Command, Invocation, USAGE, parse_color};
use report::{CatalogSection, CheckReport, PaletteReport, Style, ValidateReport};
use settings::Settings;

const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_INACCESSIBLE: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let code = match run(env::args().skip(1)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("wcag-design: {e:#}");
            EXIT_INVALID
        }
    };
    process::exit(code);
}

fn run(args: impl IntoIterator<Item = String>) -> Result<i32> {
    let invocation = cli::parse_args(args)?;
    log::debug!("{invocation:?}");

    let settings = Settings::load();
    let style = Style {
        color: settings.color && !invocation.no_color && env::var_os("NO_COLOR").is_none(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let code = execute(&mut out, &invocation, &settings, style)?;
    out.flush().context("failed to write output")?;
    Ok(code)
}

/// Run one command against `out`. Separated from `run` so it can be driven
/// with an in-memory writer.
fn execute(
    out: &mut impl Write,
    invocation: &Invocation,
    settings: &Settings,
    style: Style,
) -> Result<i32> {
    let json = invocation.json;

    match &invocation.command {
        Command::Help => {
            writeln!(out, "{USAGE}")?;
            Ok(EXIT_OK)
        }

        Command::Check {
            foreground,
            background,
        } => {
            let foreground = parse_color(foreground)?;
            let background = parse_color(background)?;
            check(out, foreground.as_str(), background.as_str(), json, style)
        }

        Command::Random { seed } => {
            let seed = seed.unwrap_or_else(clock_seed);
            let pair = random_pair(seed);
            log::info!("random seed {seed} picked {}", pair.foreground);
            check(out, &pair.foreground, &pair.background, json, style)
        }

        Command::Palette { seed, shift } => {
            let seed = parse_color(seed)?;
            let options = settings.palette_options(*shift);
            let pairs = generate_accessible_palette_with(seed.as_str(), &options);
            if json {
                report::write_json(
                    out,
                    &PaletteReport {
                        seed: &seed,
                        shift: options.shift,
                        pairs: &pairs,
                    },
                )?;
            } else {
                report::write_palette(out, seed.as_str(), &pairs, style)?;
            }
            Ok(EXIT_OK)
        }

        Command::Catalog { category } => {
            let categories = category.map_or_else(|| Category::ALL.to_vec(), |c| vec![c]);
            let sections: Vec<_> = categories
                .into_iter()
                .map(|c| CatalogSection::new(c, evaluate_category(c)))
                .collect();
            if json {
                report::write_json(out, &sections)?;
            } else {
                report::write_catalog(out, &sections, style)?;
            }
            Ok(EXIT_OK)
        }

        Command::Validate { color } => {
            let valid = is_valid_hex_color(color);
            let normalized = if valid {
                normalize_hex_color(color).to_ascii_lowercase()
            } else {
                color.clone()
            };
            let verdict = ValidateReport {
                input: color,
                valid,
                normalized,
            };
            if json {
                report::write_json(out, &verdict)?;
            } else {
                report::write_validate(out, &verdict)?;
            }
            Ok(if valid { EXIT_OK } else { EXIT_INVALID })
        }
    }
}

fn check(
    out: &mut impl Write,
    foreground: &str,
    background: &str,
    json: bool,
    style: Style,
) -> Result<i32> {
    let result = check_wcag_compliance(foreground, background);
    if json {
        report::write_json(
            out,
            &CheckReport {
                foreground,
                background,
                result: &result,
                compliance_score: result.compliance_score(),
            },
        )?;
    } else {
        report::write_check(out, foreground, background, &result, style)?;
    }

    if result.is_accessible {
        Ok(EXIT_OK)
    } else {
        log::info!("{foreground} on {background} fails at {}:1", result.contrast_ratio);
        Ok(EXIT_INACCESSIBLE)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.subsec_nanos())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
