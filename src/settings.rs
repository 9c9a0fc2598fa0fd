// SPDX-License-Identifier: MIT
//
// User settings: an optional JSON file under the platform config directory.
//
//   Linux:   ~/.config/wcag-design/settings.json
//   macOS:   ~/Library/Application Support/wcag-design/settings.json
//   Windows: %APPDATA%\wcag-design\settings.json
//
// Every field has a default, so a partial file is fine and a missing or
// broken file falls back to defaults with a log line. The file is only
// ever read.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wd_audit::palette::{DEFAULT_BACKGROUNDS, DEFAULT_SHIFT, PaletteOptions};

use crate::cli::parse_color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Channel shift for the darker/lighter palette variants.
    #[serde(default = "default_shift")]
    pub shift: u8,
    /// Backgrounds tried by the palette synthesizer, in order.
    #[serde(default = "default_backgrounds")]
    pub backgrounds: Vec<String>,
    /// ANSI color swatches in text output.
    #[serde(default = "default_true")]
    pub color: bool,
}

const fn default_shift() -> u8 {
    DEFAULT_SHIFT
}

fn default_backgrounds() -> Vec<String> {
    DEFAULT_BACKGROUNDS.iter().map(|&s| s.to_owned()).collect()
}

const fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shift: default_shift(),
            backgrounds: default_backgrounds(),
            color: true,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("wcag-design").join("settings.json")
    }

    /// Load from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Canonicalize backgrounds and drop the ones that are not colors.
    /// An empty list falls back to the defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.backgrounds = self
            .backgrounds
            .iter()
            .filter_map(|raw| match parse_color(raw) {
                Ok(bg) => Some(bg.into()),
                Err(e) => {
                    log::warn!("Ignoring background in settings: {e}");
                    None
                }
            })
            .collect();
        if self.backgrounds.is_empty() {
            self.backgrounds = default_backgrounds();
        }
        self
    }

    /// Synthesizer options, with an optional `--shift` override.
    #[must_use]
    pub fn palette_options(&self, shift: Option<u8>) -> PaletteOptions {
        PaletteOptions {
            shift: shift.unwrap_or(self.shift),
            backgrounds: self.backgrounds.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_synthesizer() {
        let s = Settings::default();
        assert_eq!(s.shift, 40);
        assert!(s.color);
        assert_eq!(s.palette_options(None), PaletteOptions::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "shift": 24 }"#).unwrap();
        assert_eq!(s.shift, 24);
        assert_eq!(s.backgrounds, default_backgrounds());
        assert!(s.color);
    }

    #[test]
    fn serde_roundtrip() {
        let s = Settings {
            shift: 10,
            backgrounds: vec!["#101010".into()],
            color: false,
        };
        let json = serde_json::to_string(&s).unwrap();
        let s2: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, s2);
    }

    #[test]
    fn shift_override_wins() {
        let s = Settings::default();
        assert_eq!(s.palette_options(Some(8)).shift, 8);
    }

    #[test]
    fn sanitized_cleans_backgrounds() {
        let s = Settings {
            backgrounds: vec!["FFF".into(), "nope".into(), "#212529".into()],
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(s.backgrounds, vec!["#ffffff".to_owned(), "#212529".to_owned()]);
    }

    #[test]
    fn sanitized_never_leaves_empty() {
        let s = Settings {
            backgrounds: vec!["nope".into()],
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(s.backgrounds, default_backgrounds());
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load_from(&dir.path().join("absent.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn load_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r##"{ "shift": 60, "backgrounds": ["#000"], "color": false }"##)
            .unwrap();
        let s = Settings::load_from(&path);
        assert_eq!(s.shift, 60);
        assert_eq!(s.backgrounds, vec!["#000000".to_owned()]);
        assert!(!s.color);
    }
}
