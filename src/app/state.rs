//! Application state definitions

use serde::{Deserialize, Serialize};

use crate::features::{Density, Palette, RingSnapshot, Settings};
use crate::i18n::{Language, Locale};
use crate::ui::primitives::RingProgress;

/// Main application state
pub struct App {
    /// The ring being demonstrated
    pub ring: RingProgress,
    /// Persisted preferences
    pub settings: Settings,
    pub locale: Locale,
    /// Colours offered by the swatch rows
    pub palette: Palette,
    /// Slider positions in the units they are shown in
    pub controls: ControlsState,
}

/// The demo's own UI state, saved nested inside the ring snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlsState {
    pub total_width_dp: i32,
    pub progress_width_dp: i32,
    pub text_size_sp: i32,
}

impl ControlsState {
    /// Derive slider positions from a ring's pixel values
    pub fn from_ring(ring: &RingProgress, density: Density) -> Self {
        let state = ring.state();
        let scale = density.scale;
        let text_scale = density.scale * density.font_scale;
        Self {
            total_width_dp: (state.total_width / scale).round() as i32,
            progress_width_dp: (state.progress_width / scale).round() as i32,
            text_size_sp: (state.progress_text_size / text_scale).round() as i32,
        }
    }
}

impl App {
    /// Build the demo from settings and an optional snapshot to restore
    pub fn build(settings: Settings, snapshot: Option<RingSnapshot>) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        let density = settings.display.density();
        let palette = Palette::material();

        let mut ring = RingProgress::from_style(&settings.style, &palette, density).with_locale(locale);
        let mut controls = ControlsState::from_ring(&ring, density);

        if let Some(snapshot) = snapshot {
            tracing::info!("Restoring ring state");
            let host_state = ring.restore_state(snapshot);
            controls = host_state
                .and_then(|value| serde_json::from_value(value).ok())
                .unwrap_or_else(|| ControlsState::from_ring(&ring, density));
        }

        Self {
            ring,
            settings,
            locale,
            palette,
            controls,
        }
    }
}
