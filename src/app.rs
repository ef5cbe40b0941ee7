//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{RingSnapshot, Settings};
use crate::i18n::Key;
pub use message::{ColorTarget, Message};
pub use state::{App, ControlsState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale and density
        let settings = Settings::load();

        // 2. Restore the last ring state if enabled
        let snapshot = if settings.restore_on_launch {
            RingSnapshot::load()
        } else {
            None
        };

        let app = Self::build(settings, snapshot);

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1000.0, 760.0),
            min_size: Some(iced::Size::new(760.0, 520.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "ring".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        self.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for animation frames and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Window events
        let close_request_sub = iced::window::close_requests().map(Message::CloseRequested);

        // 2. Animation subscription (vsync rate while the ring animates)
        let animation_sub = if self.ring.is_animating() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([close_request_sub, animation_sub])
    }
}
