//! Display settings, optionally loaded from a TOML file

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
const SETTINGS_FILE: &str = "checkers.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ANSI colors on the board
    pub color: bool,
    /// Unicode piece glyphs; letters otherwise
    pub unicode_pieces: bool,
    /// Clear the terminal before each frame
    pub clear_screen: bool,
    /// Pause before auto-playing a forced selection, in milliseconds
    pub auto_move_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            unicode_pieces: true,
            clear_screen: true,
            auto_move_delay_ms: 1000,
        }
    }
}

impl Settings {
    /// Load from `path` if given, else from `checkers.toml` if present,
    /// else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(SETTINGS_FILE).exists() => Path::new(SETTINGS_FILE),
            None => return Ok(Self::default()),
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
