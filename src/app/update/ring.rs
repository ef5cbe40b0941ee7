// src/app/update/ring.rs
//! Ring control message handlers

use iced::{Color, Task};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::app::message::{ColorTarget, Message};
use crate::app::state::App;

impl App {
    /// Handle messages that edit the ring
    pub fn handle_ring(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateRandom => {
                let total = self.ring.total();
                if total < 2 {
                    tracing::debug!("Total {} too small for a random update", total);
                } else {
                    let progress = rand::rng().random_range(1..total);
                    self.ring.set_progress(progress);
                }
            }
            Message::TotalChanged(total) => self.ring.set_total(*total),
            Message::TotalWidthChanged(dp) => {
                self.controls.total_width_dp = *dp;
                self.ring.set_total_width(*dp as f32);
            }
            Message::ProgressChanged(progress) => self.ring.set_progress_with(*progress, false),
            Message::ProgressWidthChanged(dp) => {
                self.controls.progress_width_dp = *dp;
                self.ring.set_progress_width(*dp as f32);
            }
            Message::TextSizeChanged(sp) => {
                self.controls.text_size_sp = *sp;
                self.ring.set_progress_text_size(*sp as f32);
            }
            Message::StartAngleChanged(angle) => self.ring.set_start_angle(*angle as f32),
            Message::ColorPicked(target, color) => self.apply_color(*target, *color),
            Message::ColorRandom(target) => {
                let swatches: Vec<Color> = self.palette.swatches().collect();
                if let Some(color) = swatches.choose(&mut rand::rng()) {
                    self.apply_color(*target, *color);
                }
            }
            Message::ColorCleared(target) => self.apply_color(*target, Color::TRANSPARENT),
            Message::RoundCapToggled(round) => self.ring.set_progress_round_cap(*round),
            Message::TextEnabledToggled(enabled) => self.ring.set_progress_text_enabled(*enabled),
            Message::TextTypeSelected(text_type) => {
                self.ring.set_progress_text_type(text_type.as_raw())
            }
            Message::AnimateToggled(animate) => self.ring.set_animate(*animate),
            Message::DurationSelected(ms) => self.ring.set_animate_duration(*ms),
            Message::InterpolatorSelected(id) => self.ring.set_progress_interpolator(*id),
            _ => return None,
        }
        Some(Task::none())
    }

    fn apply_color(&mut self, target: ColorTarget, color: Color) {
        match target {
            ColorTarget::Total => self.ring.set_total_color(color),
            ColorTarget::Progress => self.ring.set_progress_color(color),
            ColorTarget::Text => self.ring.set_progress_text_color(color),
            ColorTarget::Fill => self.ring.set_fill_color(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{InterpolatorId, Settings};
    use crate::ui::primitives::TextType;

    fn app() -> App {
        App::build(Settings::default(), None)
    }

    #[test]
    fn test_random_update_stays_inside_ring() {
        let mut app = app();
        app.ring.set_animate(false);
        app.ring.set_total(10);
        for _ in 0..50 {
            let _ = app.update(Message::UpdateRandom);
            let progress = app.ring.progress();
            assert!((1..10).contains(&progress), "progress {}", progress);
        }
    }

    #[test]
    fn test_random_update_ignored_for_tiny_total() {
        let mut app = app();
        app.ring.set_total(1);
        let before = app.ring.progress();
        let _ = app.update(Message::UpdateRandom);
        assert_eq!(app.ring.progress(), before);
        assert!(!app.ring.is_animating());
    }

    #[test]
    fn test_random_update_animates_when_enabled() {
        let mut app = app();
        let _ = app.update(Message::AnimateToggled(true));
        let _ = app.update(Message::UpdateRandom);
        assert!(app.ring.is_animating());
    }

    #[test]
    fn test_progress_slider_never_animates() {
        let mut app = app();
        let _ = app.update(Message::AnimateToggled(true));
        let _ = app.update(Message::ProgressChanged(70));
        assert_eq!(app.ring.progress(), 70);
        assert!(!app.ring.is_animating());
    }

    #[test]
    fn test_width_sliders_track_controls() {
        let mut app = app();
        let _ = app.update(Message::TotalWidthChanged(8));
        let _ = app.update(Message::ProgressWidthChanged(24));
        let _ = app.update(Message::TextSizeChanged(40));
        assert_eq!(app.controls.total_width_dp, 8);
        assert_eq!(app.controls.progress_width_dp, 24);
        assert_eq!(app.controls.text_size_sp, 40);
        assert_eq!(app.ring.state().total_width, 8.0);
        assert_eq!(app.ring.state().progress_width, 24.0);
        assert_eq!(app.ring.state().progress_text_size, 40.0);
    }

    #[test]
    fn test_colour_messages() {
        let mut app = app();
        let _ = app.update(Message::ColorPicked(ColorTarget::Fill, Color::WHITE));
        assert_eq!(app.ring.state().fill_color, Color::WHITE);

        let _ = app.update(Message::ColorCleared(ColorTarget::Fill));
        assert_eq!(app.ring.state().fill_color, Color::TRANSPARENT);

        let _ = app.update(Message::ColorRandom(ColorTarget::Progress));
        let picked = app.ring.state().progress_color;
        assert!(app.palette.swatches().any(|c| c == picked));
    }

    #[test]
    fn test_pick_lists() {
        let mut app = app();
        let _ = app.update(Message::TextTypeSelected(TextType::Percent));
        let _ = app.update(Message::DurationSelected(1000));
        let _ = app.update(Message::InterpolatorSelected(InterpolatorId::Overshoot));
        assert_eq!(app.ring.state().progress_text_type, TextType::Percent);
        assert_eq!(app.ring.state().animate_duration, 1000);
        assert_eq!(app.ring.interpolator().id(), InterpolatorId::Overshoot);
        assert_eq!(app.ring.label().as_deref(), Some("35%"));
    }
}
