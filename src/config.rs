//! Application configuration loaded from a TOML file.
//!
//! Configuration covers only timings and appearance; view state is never
//! persisted. Loading is fail-safe: a missing or malformed file degrades
//! to defaults with a warning rather than preventing startup.

use crate::pager::DEFAULT_TRANSITION;
use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pager timing configuration shared by every carousel instance.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PagerTimings {
    /// Visual transition window in milliseconds
    pub transition_ms: u64,
    /// Auto-advance interval in milliseconds (insights carousel)
    pub auto_advance_ms: u64,
}

impl Default for PagerTimings {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION.as_millis() as u64,
            auto_advance_ms: 1000,
        }
    }
}

/// Color scheme stored as RGB tuples for direct Color32 compatibility.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ThemeColors {
    pub background: (u8, u8, u8),
    pub panel: (u8, u8, u8),
    pub border: (u8, u8, u8),
    pub accent: (u8, u8, u8),
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: (24, 26, 30),
            panel: (32, 35, 41),
            border: (58, 62, 70),
            accent: (120, 156, 255),
        }
    }
}

/// UI configuration: rendering rate and theme.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct UiSettings {
    /// Target frames per second for repaint scheduling
    pub fps: u8,
    pub theme: ThemeColors,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            fps: 30,
            theme: ThemeColors::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct AppConfig {
    pub pager: PagerTimings,
    pub ui: UiSettings,
}

impl AppConfig {
    /// Location of the config file under the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("wealthdeck").join("config.toml"))
            .ok_or_else(|| eyre!("no platform config directory available"))
    }

    /// Writes a default config file if none exists yet.
    pub fn ensure_default_config() -> Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            debug!("Config file present at {:?}", path);
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(&AppConfig::default())?;
        fs::write(&path, rendered)?;
        info!("Wrote default config to {:?}", path);
        Ok(())
    }

    /// Loads the config, degrading to defaults on any failure.
    pub fn load() -> AppConfig {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Using default config: {}", e);
                return AppConfig::default();
            }
        };

        match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Malformed config at {:?}, using defaults: {}", path, e);
                    AppConfig::default()
                }
            },
            Err(e) => {
                warn!("Could not read config at {:?}, using defaults: {}", path, e);
                AppConfig::default()
            }
        }
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.pager.transition_ms)
    }

    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.pager.auto_advance_ms)
    }

    pub fn frame_budget(&self) -> Duration {
        let fps = self.ui.fps.max(1) as u64;
        Duration::from_millis(1000 / fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let rendered = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.pager.transition_ms, 500);
        assert_eq!(parsed.pager.auto_advance_ms, 1000);
        assert_eq!(parsed.ui.fps, 30);
    }

    #[test]
    fn frame_budget_tolerates_a_zero_fps_setting() {
        let mut config = AppConfig::default();
        config.ui.fps = 0;
        assert_eq!(config.frame_budget(), Duration::from_millis(1000));
    }
}
