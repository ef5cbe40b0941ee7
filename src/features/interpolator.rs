//! Easing curves for progress animation
//!
//! A curve is referenced by an [`InterpolatorId`], which is what gets stored
//! in the ring state and snapshots. [`InterpolatorId::resolve`] turns the id
//! into an [`Interpolator`] that maps elapsed fraction to animated fraction.
//!
//! ## Curves
//!
//! | Id | f(t) |
//! |----|------|
//! | `linear` | `t` |
//! | `accelerate` | `t^2` |
//! | `decelerate` | `1 - (1 - t)^2` |
//! | `accelerate_decelerate` | `cos((t + 1) * PI) / 2 + 0.5` |
//! | `anticipate` | `t^2 * ((T + 1) * t - T)`, T = 2 |
//! | `overshoot` | `(t-1)^2 * ((T + 1) * (t-1) + T) + 1`, T = 2 |
//! | `anticipate_overshoot` | piecewise, T = 3 |
//! | `bounce` | piecewise parabolas |
//! | `cycle` | `sin(2 * PI * t)` |
//!
//! `anticipate` dips below 0 and `overshoot` rises above 1, so consumers must
//! clamp animated values to their own bounds.

use std::f32::consts::PI;
use std::time::Duration;

use iced_anim::transition::{Curve, Easing};
use serde::{Deserialize, Serialize};

const ANTICIPATE_TENSION: f32 = 2.0;
const OVERSHOOT_TENSION: f32 = 2.0;
const ANTICIPATE_OVERSHOOT_TENSION: f32 = 2.0 * 1.5;

/// Identifier of an easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterpolatorId {
    #[default]
    Linear,
    Accelerate,
    Decelerate,
    AccelerateDecelerate,
    Anticipate,
    Overshoot,
    AnticipateOvershoot,
    Bounce,
    Cycle,
}

impl InterpolatorId {
    /// All known curves, in display order
    pub fn all() -> &'static [InterpolatorId] {
        &[
            InterpolatorId::Linear,
            InterpolatorId::Accelerate,
            InterpolatorId::Decelerate,
            InterpolatorId::AccelerateDecelerate,
            InterpolatorId::Anticipate,
            InterpolatorId::Overshoot,
            InterpolatorId::AnticipateOvershoot,
            InterpolatorId::Bounce,
            InterpolatorId::Cycle,
        ]
    }

    /// Stable name used in style declarations
    pub fn name(&self) -> &'static str {
        match self {
            InterpolatorId::Linear => "linear",
            InterpolatorId::Accelerate => "accelerate",
            InterpolatorId::Decelerate => "decelerate",
            InterpolatorId::AccelerateDecelerate => "accelerate_decelerate",
            InterpolatorId::Anticipate => "anticipate",
            InterpolatorId::Overshoot => "overshoot",
            InterpolatorId::AnticipateOvershoot => "anticipate_overshoot",
            InterpolatorId::Bounce => "bounce",
            InterpolatorId::Cycle => "cycle",
        }
    }

    /// Look up a curve by its style name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.name() == name)
    }

    /// Build the curve this id refers to
    pub fn resolve(self) -> Interpolator {
        let curve: fn(f32) -> f32 = match self {
            InterpolatorId::Linear => linear,
            InterpolatorId::Accelerate => accelerate,
            InterpolatorId::Decelerate => decelerate,
            InterpolatorId::AccelerateDecelerate => accelerate_decelerate,
            InterpolatorId::Anticipate => anticipate,
            InterpolatorId::Overshoot => overshoot,
            InterpolatorId::AnticipateOvershoot => anticipate_overshoot,
            InterpolatorId::Bounce => bounce_out,
            InterpolatorId::Cycle => cycle,
        };
        Interpolator { id: self, curve }
    }
}

impl std::fmt::Display for InterpolatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A resolved easing curve
#[derive(Debug, Clone, Copy)]
pub struct Interpolator {
    id: InterpolatorId,
    curve: fn(f32) -> f32,
}

impl PartialEq for Interpolator {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        InterpolatorId::Linear.resolve()
    }
}

impl Interpolator {
    /// The id this curve was resolved from
    pub fn id(&self) -> InterpolatorId {
        self.id
    }

    /// Map an elapsed fraction (0..=1) to an animated fraction
    pub fn interpolate(&self, t: f32) -> f32 {
        (self.curve)(t.clamp(0.0, 1.0))
    }

    /// Exact animated fraction once the full duration has elapsed
    ///
    /// `cycle` returns to where it started, every other curve lands on 1.
    pub fn end_fraction(&self) -> f32 {
        match self.id {
            InterpolatorId::Cycle => 0.0,
            _ => 1.0,
        }
    }

    /// Transition easing following this curve over `duration`
    pub fn easing(&self, duration: Duration) -> Easing {
        Easing::new(Curve::Custom(self.curve)).with_duration(duration)
    }
}

fn linear(t: f32) -> f32 {
    t
}

fn accelerate(t: f32) -> f32 {
    t * t
}

fn decelerate(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn accelerate_decelerate(t: f32) -> f32 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

fn anticipate(t: f32) -> f32 {
    anticipate_with(t, ANTICIPATE_TENSION)
}

fn overshoot(t: f32) -> f32 {
    overshoot_with(t - 1.0, OVERSHOOT_TENSION) + 1.0
}

fn anticipate_overshoot(t: f32) -> f32 {
    let tension = ANTICIPATE_OVERSHOOT_TENSION;
    if t < 0.5 {
        0.5 * anticipate_with(t * 2.0, tension)
    } else {
        0.5 * (overshoot_with(t * 2.0 - 2.0, tension) + 2.0)
    }
}

fn cycle(t: f32) -> f32 {
    (2.0 * PI * t).sin()
}

fn anticipate_with(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t - tension)
}

fn overshoot_with(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t + tension)
}

fn bounce_out(t: f32) -> f32 {
    fn parabola(t: f32) -> f32 {
        t * t * 8.0
    }

    let t = t * 1.1226;
    if t < 0.3535 {
        parabola(t)
    } else if t < 0.7408 {
        parabola(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        parabola(t - 0.8526) + 0.9
    } else {
        parabola(t - 1.0435) + 0.95
    }
}
