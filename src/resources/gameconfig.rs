//! Game configuration.
//!
//! Window settings loaded from an INI configuration file, with defaults for
//! safe startup when the file is absent.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! ```

use std::path::PathBuf;

use configparser::ini::Ini;
use log::info;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and pacing configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second for the outer loop.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        GameConfig {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        GameConfig {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("failed to load {}: {e}", self.config_path.display()))?;

        if let Ok(Some(width)) = config.getuint("window", "width") {
            self.window_width = width as u32;
        }
        if let Ok(Some(height)) = config.getuint("window", "height") {
            self.window_height = height as u32;
        }
        if let Ok(Some(fps)) = config.getuint("window", "target_fps") {
            self.target_fps = fps as u32;
        }

        info!(
            "config loaded from {}: {}x{} @ {} fps",
            self.config_path.display(),
            self.window_width,
            self.window_height,
            self.target_fps
        );
        Ok(())
    }
}
