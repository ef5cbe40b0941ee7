//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "Ring");

    // Sections
    m.insert(Key::SectionTotal, "Total");
    m.insert(Key::SectionProgress, "Progress");
    m.insert(Key::SectionText, "Progress Text");
    m.insert(Key::SectionAppearance, "Appearance");
    m.insert(Key::SectionAnimation, "Animation");
    m.insert(Key::SectionDisplay, "Display");

    // Controls
    m.insert(Key::UpdateButton, "Update Progress");
    m.insert(Key::RandomColor, "Random");
    m.insert(Key::ClearColor, "None");
    m.insert(Key::Total, "Total value");
    m.insert(Key::TotalColor, "Total color");
    m.insert(Key::TotalWidth, "Total width");
    m.insert(Key::Progress, "Progress value");
    m.insert(Key::ProgressColor, "Progress color");
    m.insert(Key::ProgressWidth, "Progress width");
    m.insert(Key::ProgressRoundCap, "Round cap");
    m.insert(Key::TextEnabled, "Show text");
    m.insert(Key::TextType, "Text type");
    m.insert(Key::TextTypeProgress, "Progress");
    m.insert(Key::TextTypePercent, "Percent");
    m.insert(Key::TextSize, "Text size");
    m.insert(Key::TextColor, "Text color");
    m.insert(Key::FillColor, "Fill color");
    m.insert(Key::StartAngle, "Start angle");
    m.insert(Key::Animate, "Animate");
    m.insert(Key::AnimateDuration, "Duration");
    m.insert(Key::Interpolator, "Interpolator");
    m.insert(Key::DarkMode, "Dark mode");
    m.insert(Key::Language, "Language");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
