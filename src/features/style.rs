//! Style declarations for a progress ring
//!
//! A [`RingStyle`] is the key/value form of a ring's initial appearance, as
//! written in a settings file. Every key is optional; absent keys fall back to
//! the ring defaults. Dimensions are in DP (widths) and SP (text size).

use serde::{Deserialize, Serialize};

use super::interpolator::InterpolatorId;
use super::palette::Palette;

/// Declarative ring style, deserializable from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingStyle {
    pub total_value: Option<i32>,
    pub total_color: Option<String>,
    pub total_width: Option<f32>,

    pub progress_value: Option<i32>,
    pub progress_color: Option<String>,
    pub progress_width: Option<f32>,
    pub progress_round_cap: Option<bool>,
    pub progress_interpolator: Option<String>,

    pub progress_text_enabled: Option<bool>,
    pub progress_text_type: Option<i32>,
    pub progress_text_size: Option<f32>,
    pub progress_text_color: Option<String>,

    pub fill_color: Option<String>,
    pub start_angle: Option<f32>,
    pub animate: Option<bool>,
    pub animate_duration: Option<u64>,
}

impl RingStyle {
    /// Parse a style from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve the interpolator key, falling back to linear for unknown names
    pub fn interpolator(&self) -> InterpolatorId {
        match self.progress_interpolator.as_deref() {
            None => InterpolatorId::default(),
            Some(name) => InterpolatorId::from_name(name).unwrap_or_else(|| {
                tracing::warn!("Unknown interpolator {:?}, using linear", name);
                InterpolatorId::default()
            }),
        }
    }
}

/// Resolve a colour value, logging and dropping values that do not parse
pub fn resolve_color(key: &str, value: Option<&str>, palette: &Palette) -> Option<iced::Color> {
    let raw = value?;
    let resolved = palette.parse(raw);
    if resolved.is_none() {
        tracing::warn!("Ignoring unparsable colour for {}: {:?}", key, raw);
    }
    resolved
}
