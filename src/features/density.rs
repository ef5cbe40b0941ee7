//! Density-independent unit conversion

use serde::{Deserialize, Serialize};

/// Display density used to turn DP/SP values into physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density {
    /// Physical pixels per DP
    pub scale: f32,
    /// Extra multiplier applied to SP values (user font size preference)
    pub font_scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_scale: 1.0,
        }
    }
}

impl Density {
    pub fn new(scale: f32, font_scale: f32) -> Self {
        Self { scale, font_scale }
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.scale
    }

    pub fn sp_to_px(&self, sp: f32) -> f32 {
        sp * self.scale * self.font_scale
    }
}
