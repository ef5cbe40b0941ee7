//! Ring state and the draw styles derived from it

use iced::{Color, Rectangle, Size};

use crate::features::InterpolatorId;

/// Default denominator of the progress
pub const DEFAULT_TOTAL: i32 = 100;
/// Default stroke width of both rings, in pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 16.0;
/// Default start angle: top of the circle (0 is 3 o'clock, clockwise)
pub const DEFAULT_START_ANGLE: f32 = 270.0;
/// Default animation duration in milliseconds
pub const DEFAULT_ANIMATE_DURATION: u64 = 300;

/// What the centred label shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextType {
    /// The raw progress value
    #[default]
    Progress,
    /// Progress over total as a percentage
    Percent,
}

impl TextType {
    pub const PROGRESS: i32 = 0;
    pub const PERCENT: i32 = 1;

    /// Map a raw type code; unknown codes become [`TextType::Progress`]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            Self::PERCENT => TextType::Percent,
            _ => TextType::Progress,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            TextType::Progress => Self::PROGRESS,
            TextType::Percent => Self::PERCENT,
        }
    }
}

/// Every property of a ring. Widths and text size are physical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RingState {
    pub total_value: i32,
    pub total_color: Color,
    pub total_width: f32,

    pub progress_value: i32,
    pub progress_color: Color,
    pub progress_width: f32,
    pub progress_round_cap: bool,
    pub progress_interpolator: InterpolatorId,

    pub progress_text_enabled: bool,
    pub progress_text_type: TextType,
    pub progress_text_size: f32,
    pub progress_text_color: Color,

    pub fill_color: Color,
    pub start_angle: f32,
    pub animate: bool,
    pub animate_duration: u64,
}

impl Default for RingState {
    fn default() -> Self {
        Self {
            total_value: DEFAULT_TOTAL,
            total_color: Color::TRANSPARENT,
            total_width: DEFAULT_STROKE_WIDTH,
            progress_value: 0,
            progress_color: Color::TRANSPARENT,
            progress_width: DEFAULT_STROKE_WIDTH,
            progress_round_cap: false,
            progress_interpolator: InterpolatorId::Linear,
            progress_text_enabled: false,
            progress_text_type: TextType::Progress,
            progress_text_size: 0.0,
            progress_text_color: Color::TRANSPARENT,
            fill_color: Color::TRANSPARENT,
            start_angle: DEFAULT_START_ANGLE,
            animate: false,
            animate_duration: DEFAULT_ANIMATE_DURATION,
        }
    }
}

impl RingState {
    /// Clamp a progress value into `[0, total]`, lower bound first
    pub fn valid_progress(&self, input: i32) -> i32 {
        if input < 0 {
            0
        } else if input > self.total_value {
            self.total_value
        } else {
            input
        }
    }
}

/// Stroke end style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePaint {
    pub color: Color,
    pub width: f32,
    pub cap: Cap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    pub size: f32,
}

/// Draw styles, kept in sync with [`RingState`] by the setters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPaints {
    pub total: StrokePaint,
    pub progress: StrokePaint,
    pub text: TextPaint,
    pub fill: Color,
}

impl RingPaints {
    /// Build every paint from scratch
    pub fn from_state(state: &RingState) -> Self {
        Self {
            total: StrokePaint {
                color: state.total_color,
                width: state.total_width,
                cap: Cap::Butt,
            },
            progress: StrokePaint {
                color: state.progress_color,
                width: state.progress_width,
                cap: if state.progress_round_cap {
                    Cap::Round
                } else {
                    Cap::Butt
                },
            },
            text: TextPaint {
                color: state.progress_text_color,
                size: state.progress_text_size,
            },
            fill: state.fill_color,
        }
    }
}

/// Rectangle the rings are inscribed in, inset so the thicker stroke fits
pub fn circle_bounds(size: Size, total_width: f32, progress_width: f32) -> Rectangle {
    let padding = total_width.max(progress_width) / 2.0;
    Rectangle {
        x: padding,
        y: padding,
        width: size.width - padding * 2.0,
        height: size.height - padding * 2.0,
    }
}
