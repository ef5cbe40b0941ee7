//! Internationalization (i18n) support for the demo
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale), translation lookup and
//!   number formatting
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a language code, defaulting to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AppName,

    // Sections
    SectionTotal,
    SectionProgress,
    SectionText,
    SectionAppearance,
    SectionAnimation,
    SectionDisplay,

    // Controls
    UpdateButton,
    RandomColor,
    ClearColor,
    Total,
    TotalColor,
    TotalWidth,
    Progress,
    ProgressColor,
    ProgressWidth,
    ProgressRoundCap,
    TextEnabled,
    TextType,
    TextTypeProgress,
    TextTypePercent,
    TextSize,
    TextColor,
    FillColor,
    StartAngle,
    Animate,
    AnimateDuration,
    Interpolator,
    DarkMode,
    Language,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Format a ratio as a whole percentage, rounding half to even
pub fn format_percent(lang: Language, ratio: f64) -> String {
    let ratio = if ratio.is_finite() { ratio } else { 0.0 };
    let percent = (ratio * 100.0).round_ties_even() as i64;
    match lang {
        Language::English | Language::Chinese => format!("{}%", percent),
    }
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Format a ratio as a percentage in this locale
    pub fn percent(&self, ratio: f64) -> String {
        format_percent(self.language, ratio)
    }
}
