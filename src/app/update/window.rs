// src/app/update/window.rs
//! Window, animation and exit message handlers

use std::time::Instant;

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                self.ring.tick(Instant::now());
                Some(Task::none())
            }

            Message::CloseRequested(id) => {
                tracing::info!("Close requested for window {:?}", id);
                self.ring.on_detached();

                let host_state = serde_json::to_value(self.controls)
                    .map_err(|e| tracing::warn!("Failed to encode controls state: {}", e))
                    .ok();
                let snapshot = self.ring.save_state(host_state);
                let settings = self.settings.clone();

                Some(Task::perform(
                    helpers::persist(snapshot, settings),
                    |result| {
                        if let Err(e) = result {
                            tracing::warn!("Failed to persist state on close: {:#}", e);
                        }
                        Message::Persisted
                    },
                ))
            }

            Message::Persisted => Some(iced::exit()),

            _ => None,
        }
    }
}
