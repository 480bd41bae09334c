use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Error types for settings file loading
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Appearance knobs. Colors are packed ARGB (`0xAARRGGBB`), which TOML can
/// spell as hex integers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub cursor_radius: f32,
    pub line_width: f32,
    pub segment_color: u32,
    pub cursor_ring_color: u32,
    pub cursor_fill_color: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cursor_radius: 15.0,
            line_width: 2.5,
            // opaque red segments and ring, half-alpha blue-gray fill
            segment_color: 0xFF_FF0000,
            cursor_ring_color: 0xFF_FF0000,
            cursor_fill_color: 0x80_4D6699,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load from a file when one is given; fall back to defaults (with a
    /// warning) when it is absent or unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to load settings from {}, using defaults: {}", path.display(), e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
