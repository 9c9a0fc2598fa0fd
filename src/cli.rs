// SPDX-License-Identifier: MIT
//
// Command-line parsing.
//
// Hand-rolled over `env::args`: five subcommands, four flags. Flags may
// appear anywhere after the subcommand; everything else is positional.
//
//   wcag-design check <FG> <BG>      [--json] [--no-color]
//   wcag-design palette <SEED>       [--shift N] [--json] [--no-color]
//   wcag-design catalog [CATEGORY]   [--json] [--no-color]
//   wcag-design random               [--seed N] [--json] [--no-color]
//   wcag-design validate <HEX>
//   wcag-design help

use thiserror::Error;
use wd_audit::catalog::{Category, UnknownCategory};
use wd_audit::normalize_hex_color;
use wd_color::{ColorError, HexColor};

pub const USAGE: &str = "\
usage: wcag-design <command> [options]

commands:
  check <FG> <BG>       classify a text color on a background
  palette <SEED>        list accessible pairs derived from a seed color
  catalog [CATEGORY]    show the predefined palettes
  random                pick a seed color and check it on white
  validate <HEX>        report whether a string is a hex color
  help                  show this message

options:
  --json                print JSON instead of text
  --no-color            disable ANSI color swatches
  --shift N             channel shift for palette variants (0-255)
  --seed N              seed for the random pick

Colors are #RGB or #RRGGBB; a missing leading # is added.
Logging goes to stderr and follows RUST_LOG.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing command (try 'wcag-design help')")]
    MissingCommand,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' needs a value")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for '{option}'")]
    InvalidValue { option: &'static str, value: String },

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Category(#[from] UnknownCategory),
}

/// What to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check { foreground: String, background: String },
    Palette { seed: String, shift: Option<u8> },
    Catalog { category: Option<Category> },
    Random { seed: Option<u32> },
    Validate { color: String },
    Help,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub json: bool,
    pub no_color: bool,
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let name = args.next().ok_or(CliError::MissingCommand)?;

    let mut json = false;
    let mut no_color = false;
    let mut shift = None;
    let mut seed = None;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--no-color" => no_color = true,
            "--shift" => shift = Some(parse_value("--shift", args.next())?),
            "--seed" => seed = Some(parse_value("--seed", args.next())?),
            s if s.starts_with("--") => return Err(CliError::UnknownOption(arg)),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match name.as_str() {
        "check" => {
            let (Some(foreground), Some(background)) = (positional.next(), positional.next())
            else {
                return Err(CliError::MissingArgument {
                    command: "check",
                    expected: "a foreground and a background color",
                });
            };
            Command::Check {
                foreground,
                background,
            }
        }
        "palette" => Command::Palette {
            seed: positional.next().ok_or(CliError::MissingArgument {
                command: "palette",
                expected: "a seed color",
            })?,
            shift,
        },
        "catalog" => Command::Catalog {
            category: positional.next().map(|s| s.parse::<Category>()).transpose()?,
        },
        "random" => Command::Random { seed },
        "validate" => Command::Validate {
            color: positional.next().ok_or(CliError::MissingArgument {
                command: "validate",
                expected: "a color",
            })?,
        },
        "help" | "-h" | "--help" => Command::Help,
        _ => return Err(CliError::UnknownCommand(name)),
    };

    if let Some(extra) = positional.next() {
        return Err(CliError::UnexpectedArgument(extra));
    }

    Ok(Invocation {
        command,
        json,
        no_color,
    })
}

fn parse_value<T: std::str::FromStr>(
    option: &'static str,
    value: Option<String>,
) -> Result<T, CliError> {
    let value = value.ok_or(CliError::MissingValue(option))?;
    value
        .parse()
        .map_err(|_| CliError::InvalidValue { option, value })
}

/// Parse user input into a validated color. The error names the input as
/// typed, not the prepared form.
pub fn parse_color(raw: &str) -> Result<HexColor, CliError> {
    prepare_color(raw)
        .parse::<HexColor>()
        .map_err(|_| ColorError::InvalidHex(raw.trim().to_owned()).into())
}

/// Turn user input into the canonical `#rrggbb` the core expects.
///
/// Trims whitespace, adds a missing `#`, expands `#abc`, and lower-cases.
/// Returns the prepared string even when it is still not a valid color.
fn prepare_color(raw: &str) -> String {
    let raw = raw.trim();
    let prefixed = if raw.starts_with('#') || raw.is_empty() {
        raw.to_owned()
    } else {
        format!("#{raw}")
    };
    normalize_hex_color(&prefixed).to_ascii_lowercase()
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Invocation, CliError> {
        parse_args(args.iter().map(|&s| s.to_owned()))
    }

    fn command(args: &[&str]) -> Command {
        parse(args).unwrap().command
    }

    #[test]
    fn check_takes_two_colors() {
        assert_eq!(
            command(&["check", "#000", "#fff"]),
            Command::Check {
                foreground: "#000".into(),
                background: "#fff".into(),
            }
        );
    }

    #[test]
    fn flags_anywhere() {
        let inv = parse(&["check", "--json", "#000", "--no-color", "#fff"]).unwrap();
        assert!(inv.json);
        assert!(inv.no_color);
        assert!(matches!(inv.command, Command::Check { .. }));
    }

    #[test]
    fn palette_with_shift() {
        assert_eq!(
            command(&["palette", "#1976d2", "--shift", "24"]),
            Command::Palette {
                seed: "#1976d2".into(),
                shift: Some(24),
            }
        );
        assert_eq!(
            command(&["palette", "#1976d2"]),
            Command::Palette {
                seed: "#1976d2".into(),
                shift: None,
            }
        );
    }

    #[test]
    fn catalog_category_is_optional() {
        assert_eq!(command(&["catalog"]), Command::Catalog { category: None });
        assert_eq!(
            command(&["catalog", "modern-pastels"]),
            Command::Catalog {
                category: Some(Category::ModernPastels),
            }
        );
    }

    #[test]
    fn random_with_seed() {
        assert_eq!(command(&["random", "--seed", "9"]), Command::Random { seed: Some(9) });
        assert_eq!(command(&["random"]), Command::Random { seed: None });
    }

    #[test]
    fn help_aliases() {
        for a in ["help", "-h", "--help"] {
            assert_eq!(command(&[a]), Command::Help);
        }
    }

    #[test]
    fn errors() {
        assert_eq!(parse(&[]), Err(CliError::MissingCommand));
        assert_eq!(parse(&["paint"]), Err(CliError::UnknownCommand("paint".into())));
        assert!(matches!(
            parse(&["check", "#000"]),
            Err(CliError::MissingArgument { command: "check", .. })
        ));
        assert_eq!(
            parse(&["validate", "#000", "#fff"]),
            Err(CliError::UnexpectedArgument("#fff".into()))
        );
        assert_eq!(parse(&["check", "--loud"]), Err(CliError::UnknownOption("--loud".into())));
        assert_eq!(parse(&["palette", "#000", "--shift"]), Err(CliError::MissingValue("--shift")));
        assert_eq!(
            parse(&["palette", "#000", "--shift", "300"]),
            Err(CliError::InvalidValue {
                option: "--shift",
                value: "300".into(),
            })
        );
        assert_eq!(
            parse(&["catalog", "neon"]),
            Err(CliError::Category(UnknownCategory("neon".into())))
        );
    }

    #[test]
    fn prepare_color_canonicalizes() {
        assert_eq!(prepare_color("#ABC"), "#aabbcc");
        assert_eq!(prepare_color("1976D2"), "#1976d2");
        assert_eq!(prepare_color("  fff "), "#ffffff");
        assert_eq!(prepare_color("teal"), "#teal");
        assert_eq!(prepare_color(""), "");
    }

    #[test]
    fn parse_color_accepts_loose_input() {
        assert_eq!(parse_color(" 1976D2 ").unwrap().as_str(), "#1976d2");
        assert_eq!(parse_color("#FFF").unwrap().rgb(), wd_color::Rgb::WHITE);
    }

    #[test]
    fn parse_color_error_names_raw_input() {
        let err = parse_color("teal").unwrap_err();
        assert_eq!(err, CliError::Color(ColorError::InvalidHex("teal".into())));
        assert_eq!(err.to_string(), "invalid hex color 'teal' (expected #RGB or #RRGGBB)");
    }
}
