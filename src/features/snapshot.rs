//! Ring state snapshot
//!
//! A flat record of every ring property, captured before the ring is torn
//! down and applied to a fresh ring afterwards. The host can nest its own
//! opaque state under `host_state`; it is handed back after the ring fields
//! have been applied.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::interpolator::InterpolatorId;

/// Colour as stored in a snapshot: `[r, g, b, a]`
pub type StoredColor = [f32; 4];

pub fn store_color(color: iced::Color) -> StoredColor {
    [color.r, color.g, color.b, color.a]
}

pub fn load_color([r, g, b, a]: StoredColor) -> iced::Color {
    iced::Color::from_rgba(r, g, b, a)
}

/// Saved ring state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSnapshot {
    pub total_value: i32,
    pub total_color: StoredColor,
    pub total_width: f32,

    pub progress_value: i32,
    pub progress_color: StoredColor,
    pub progress_width: f32,
    pub progress_round_cap: bool,
    pub progress_interpolator: InterpolatorId,

    pub progress_text_enabled: bool,
    pub progress_text_type: i32,
    pub progress_text_size: f32,
    pub progress_text_color: StoredColor,

    pub fill_color: StoredColor,
    pub start_angle: f32,
    pub animate: bool,
    pub animate_duration: u64,

    /// Host-owned state, restored after the ring itself
    #[serde(default)]
    pub host_state: Option<serde_json::Value>,
}

impl RingSnapshot {
    /// Get the default snapshot file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ring", "Ring")
            .map(|dirs| dirs.config_dir().join("ring_state.json"))
    }

    /// Load the snapshot from the default file, if there is one
    pub fn load() -> Option<Self> {
        let path = Self::file_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(&path) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!("Discarding ring snapshot at {:?}: {}", path, e);
                None
            }
        }
    }

    /// Load a snapshot from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SnapshotError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SnapshotError::Parse(e.to_string()))
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Parse(e.to_string()))
    }

    /// Save the snapshot to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SnapshotError::Io(e.to_string()))?;
        }
        std::fs::write(path, self.to_json()?).map_err(|e| SnapshotError::Io(e.to_string()))
    }
}

/// Errors that can occur reading or writing a snapshot
#[derive(Debug, Clone)]
pub enum SnapshotError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "IO error: {}", e),
            SnapshotError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RingSnapshot {
        RingSnapshot {
            total_value: 80,
            total_color: store_color(iced::Color::from_rgba(0.1, 0.2, 0.3, 0.4)),
            total_width: 12.5,
            progress_value: 33,
            progress_color: [1.0, 0.0, 0.0, 1.0],
            progress_width: 7.0,
            progress_round_cap: true,
            progress_interpolator: InterpolatorId::Bounce,
            progress_text_enabled: true,
            progress_text_type: 1,
            progress_text_size: 18.0,
            progress_text_color: [0.0, 0.0, 0.0, 1.0],
            fill_color: [0.0, 0.0, 0.0, 0.0],
            start_angle: 123.456,
            animate: true,
            animate_duration: 1000,
            host_state: Some(serde_json::json!({ "scroll": 42.0 })),
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ring_state.json");

        let snapshot = sample();
        snapshot.save_to_file(&path).unwrap();
        let loaded = RingSnapshot::load_from_file(&path).unwrap();

        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.start_angle.to_bits(), snapshot.start_angle.to_bits());
    }

    #[test]
    fn test_color_storage_is_lossless() {
        let color = iced::Color::from_rgba(0.123_456_78, 0.5, 0.333_333_34, 0.9);
        let stored = store_color(color);
        let json = serde_json::to_string(&stored).unwrap();
        let back: StoredColor = serde_json::from_str(&json).unwrap();
        assert_eq!(load_color(back), color);
    }

    #[test]
    fn test_missing_host_state_is_none() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value.as_object_mut().unwrap().remove("host_state");
        let snapshot: RingSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(snapshot.host_state, None);
    }

    #[test]
    fn test_load_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            RingSnapshot::load_from_file(&missing),
            Err(SnapshotError::Io(_))
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            RingSnapshot::load_from_file(&broken),
            Err(SnapshotError::Parse(_))
        ));
    }
}
