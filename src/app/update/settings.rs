// src/app/update/settings.rs
//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DarkModeToggled(dark) => {
                self.settings.display.dark_mode = *dark;
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::LanguageSelected(language) => {
                self.settings.display.language = language.code().to_string();
                self.locale = Locale::new(*language);
                self.ring.set_locale(self.locale);
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::SaveSettings => {
                if let Err(e) = self.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                } else {
                    tracing::info!("Settings saved successfully");
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::i18n::Language;

    #[test]
    fn test_language_switch_updates_ring_locale() {
        let mut app = App::build(Settings::default(), None);
        let before = app.ring.generation();
        let _ = app.handle_settings(&Message::LanguageSelected(Language::Chinese));
        assert_eq!(app.settings.display.language, "zh");
        assert_eq!(app.locale.language, Language::Chinese);
        assert!(app.ring.generation() > before);
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut app = App::build(Settings::default(), None);
        let _ = app.handle_settings(&Message::DarkModeToggled(false));
        assert!(!app.settings.display.dark_mode);
    }

    #[test]
    fn test_other_messages_pass_through() {
        let mut app = App::build(Settings::default(), None);
        assert!(app.handle_settings(&Message::AnimationTick).is_none());
    }
}
