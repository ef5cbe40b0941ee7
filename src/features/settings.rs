//! Demo settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::density::Density;
use super::style::RingStyle;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Restore the last ring state on launch
    #[serde(default = "default_true")]
    pub restore_on_launch: bool,
    /// Initial ring style, used when there is no snapshot to restore
    #[serde(default = "default_style")]
    pub style: RingStyle,
}

/// Style of the ring on first launch
fn default_style() -> RingStyle {
    RingStyle {
        total_color: Some("#33888888".to_string()),
        progress_color: Some("pink".to_string()),
        progress_value: Some(35),
        progress_round_cap: Some(true),
        progress_text_enabled: Some(true),
        progress_text_size: Some(28.0),
        progress_text_color: Some("white".to_string()),
        ..Default::default()
    }
}

fn default_true() -> bool {
    true
}

fn default_scale() -> f32 {
    1.0
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language
    pub language: String,
    /// Physical pixels per DP
    #[serde(default = "default_scale")]
    pub density: f32,
    /// Extra scale for text sizes
    #[serde(default = "default_scale")]
    pub font_scale: f32,
}

impl DisplaySettings {
    /// Density to use for DP/SP conversion
    pub fn density(&self) -> Density {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 1.0 };
        Density::new(sanitize(self.density), sanitize(self.font_scale))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
            restore_on_launch: true,
            style: default_style(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
            density: 1.0,
            font_scale: 1.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ring", "Ring")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.display.language = "zh".to_string();
        settings.style.total_value = Some(60);
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.display.language, "zh");
        assert_eq!(loaded.style.total_value, Some(60));
        assert!(loaded.restore_on_launch);
    }

    #[test]
    fn test_older_file_without_new_keys() {
        let json = r#"{ "display": { "dark_mode": false, "language": "en" } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.density, 1.0);
        assert!(settings.restore_on_launch);
        assert_eq!(settings.style, default_style());
    }

    #[test]
    fn test_invalid_density_is_sanitized() {
        let display = DisplaySettings {
            density: 0.0,
            font_scale: f32::NAN,
            ..Default::default()
        };
        assert_eq!(display.density(), Density::default());
    }
}
