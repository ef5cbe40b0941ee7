//! Application messages

use iced::Color;

use crate::features::InterpolatorId;
use crate::i18n::Language;
use crate::ui::primitives::TextType;

/// Which ring colour a swatch row edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Total,
    Progress,
    Text,
    Fill,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Ring ============
    /// Jump to a random progress in `[1, total - 1]`
    UpdateRandom,
    TotalChanged(i32),
    /// Width in DP
    TotalWidthChanged(i32),
    /// Set directly from the slider, never animated
    ProgressChanged(i32),
    /// Width in DP
    ProgressWidthChanged(i32),
    /// Size in SP
    TextSizeChanged(i32),
    StartAngleChanged(i32),
    ColorPicked(ColorTarget, Color),
    ColorRandom(ColorTarget),
    ColorCleared(ColorTarget),
    RoundCapToggled(bool),
    TextEnabledToggled(bool),
    TextTypeSelected(TextType),
    AnimateToggled(bool),
    /// Duration in milliseconds
    DurationSelected(u64),
    InterpolatorSelected(InterpolatorId),

    // ============ Settings ============
    DarkModeToggled(bool),
    LanguageSelected(Language),
    SaveSettings,

    // ============ Window ============
    /// Frame tick while the ring animates
    AnimationTick,
    CloseRequested(iced::window::Id),
    /// State was written on close, safe to exit
    Persisted,
}
