//! Game settings
//!
//! Persisted as JSON. The composition root loads them once and passes them
//! down; nothing reads configuration from ambient globals.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Arena;

/// Settings/leaderboard file errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width in cells
    pub arena_width: i32,
    /// Arena height in cells
    pub arena_height: i32,
    /// Base cell span in pixels (rendered at twice this size)
    pub cell_span: u32,
    /// Directory holding textures; renderers fall back to flat colors when missing
    pub asset_root: PathBuf,
    /// Frames per step with no speed input, clamped to 2..=10 when used
    pub move_interval: u32,
    /// Fixed run seed (random when absent)
    pub seed: Option<u64>,
    /// Route pickup feedback to a rumble device
    pub haptics: bool,
    /// Where the leaderboard is stored
    pub highscores_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            cell_span: CELL_SPAN,
            asset_root: PathBuf::from("assets"),
            move_interval: DEFAULT_MOVE_INTERVAL,
            seed: None,
            haptics: true,
            highscores_path: PathBuf::from("highscores.json"),
        }
    }
}

impl Settings {
    /// Resize the arena to fill a window at the configured cell span
    pub fn fit_window(&mut self, width_px: u32, height_px: u32) {
        let arena = Arena::from_window(width_px, height_px, self.cell_pixels());
        self.arena_width = arena.width;
        self.arena_height = arena.height;
    }

    /// Window size in pixels that fits the arena exactly
    pub fn window_size(&self) -> (u32, u32) {
        let arena = self.arena();
        let px = self.cell_pixels();
        (arena.width as u32 * px, arena.height as u32 * px)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Rendered size of one cell in pixels
    pub fn cell_pixels(&self) -> u32 {
        self.cell_span * CELL_PIXEL_SCALE
    }

    /// Resting move interval, kept inside the supported range
    pub fn resting_move_interval(&self) -> u32 {
        self.move_interval.clamp(MIN_MOVE_INTERVAL, DEFAULT_MOVE_INTERVAL)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, logging and falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_full_hd_window() {
        let settings = Settings::default();
        assert_eq!(settings.arena(), Arena::new(48, 27));
        assert_eq!(settings.cell_pixels(), 40);
        assert_eq!(settings.window_size(), (1920, 1080));

        let mut fitted = Settings::default();
        fitted.fit_window(1920, 1080);
        assert_eq!(fitted, settings);
    }

    #[test]
    fn test_fit_window_uses_configured_span() {
        let mut settings = Settings {
            cell_span: 10,
            ..Settings::default()
        };
        settings.fit_window(1920, 1080);
        assert_eq!(settings.arena(), Arena::new(96, 54));
        assert_eq!(settings.window_size(), (1920, 1080));
    }

    #[test]
    fn test_move_interval_clamped() {
        let mut settings = Settings::default();
        assert_eq!(settings.resting_move_interval(), DEFAULT_MOVE_INTERVAL);
        settings.move_interval = 0;
        assert_eq!(settings.resting_move_interval(), MIN_MOVE_INTERVAL);
        settings.move_interval = 99;
        assert_eq!(settings.resting_move_interval(), DEFAULT_MOVE_INTERVAL);
        settings.move_interval = 5;
        assert_eq!(settings.resting_move_interval(), 5);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "arena_width": 12, "seed": 7 }"#).unwrap();
        assert_eq!(settings.arena(), Arena::new(12, ARENA_HEIGHT));
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.asset_root, PathBuf::from("assets"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("torus_snake_missing_settings.json");
        let _ = fs::remove_file(&path);
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("torus_snake_settings_test.json");
        let settings = Settings {
            asset_root: PathBuf::from("/opt/snake/assets"),
            haptics: false,
            move_interval: 6,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
        let _ = fs::remove_file(&path);
    }
}
