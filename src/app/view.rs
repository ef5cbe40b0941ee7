//! Application view rendering

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Fill, Length};

use super::App;
use super::message::{ColorTarget, Message};
use crate::features::InterpolatorId;
use crate::i18n::{Key, Language};
use crate::ui::primitives::{TextType, view_progress_ring};
use crate::ui::widgets::{self, Choice, divider, pick_row, slider_row, swatch_row, toggle_row};
use crate::ui::theme;

/// Largest side of the ring preview
const RING_MAX_SIZE: f32 = 360.0;

/// Width of the control panel
const PANEL_WIDTH: f32 = 460.0;

/// Total slider upper bound
const TOTAL_MAX: i32 = 200;

/// Width and text size slider upper bounds
const WIDTH_MAX_DP: i32 = 40;
const TEXT_SIZE_MAX_SP: i32 = 64;

const DURATIONS: [(u64, &str); 5] = [
    (100, "100 ms"),
    (300, "300 ms"),
    (500, "500 ms"),
    (1000, "1000 ms"),
    (2000, "2000 ms"),
];

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let content = row![self.view_preview(), self.view_panel()]
            .spacing(24)
            .padding(24)
            .height(Fill);

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }

    fn view_preview(&self) -> Element<'_, Message> {
        let update_btn = button(text(self.locale.get(Key::UpdateButton)).size(15))
            .padding([10, 32])
            .style(theme::primary_button)
            .on_press_maybe((self.ring.total() >= 2).then_some(Message::UpdateRandom));

        let preview = column![
            view_progress_ring(&self.ring, RING_MAX_SIZE),
            Space::new().height(24),
            update_btn,
        ]
        .align_x(Alignment::Center)
        .padding(32)
        .max_width(RING_MAX_SIZE + 64.0);

        container(preview)
            .center_x(Fill)
            .center_y(Fill)
            .style(theme::preview)
            .into()
    }

    fn view_panel(&self) -> Element<'_, Message> {
        let body = column![
            self.view_total_section(),
            self.view_progress_section(),
            self.view_text_section(),
            self.view_appearance_section(),
            self.view_animation_section(),
            self.view_display_section(),
        ]
        .spacing(24)
        .padding([16, 20]);

        container(
            scrollable(body)
                .height(Fill)
                .style(theme::panel_scrollable),
        )
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Fill)
        .style(theme::panel)
        .into()
    }

    fn color_row(&self, key: Key, target: ColorTarget, current: Color) -> Element<'_, Message> {
        swatch_row(
            self.locale.get(key),
            self.palette.swatches().collect(),
            current,
            move |color| Message::ColorPicked(target, color),
            (self.locale.get(Key::RandomColor), Message::ColorRandom(target)),
            (self.locale.get(Key::ClearColor), Message::ColorCleared(target)),
        )
    }

    fn view_total_section(&self) -> Element<'_, Message> {
        let state = self.ring.state();
        column![
            widgets::section_header::view(self.locale.get(Key::SectionTotal), None),
            slider_row(
                self.locale.get(Key::Total),
                0..=TOTAL_MAX,
                state.total_value.clamp(0, TOTAL_MAX),
                state.total_value.to_string(),
                Message::TotalChanged,
            ),
            divider(),
            slider_row(
                self.locale.get(Key::TotalWidth),
                0..=WIDTH_MAX_DP,
                self.controls.total_width_dp,
                format!("{} DP", self.controls.total_width_dp),
                Message::TotalWidthChanged,
            ),
            divider(),
            self.color_row(Key::TotalColor, ColorTarget::Total, state.total_color),
        ]
        .into()
    }

    fn view_progress_section(&self) -> Element<'_, Message> {
        let state = self.ring.state();
        let total = state.total_value.max(0);
        column![
            widgets::section_header::view(
                self.locale.get(Key::SectionProgress),
                Some((self.locale.get(Key::UpdateButton), Message::UpdateRandom)),
            ),
            slider_row(
                self.locale.get(Key::Progress),
                0..=total,
                state.progress_value.clamp(0, total),
                state.progress_value.to_string(),
                Message::ProgressChanged,
            ),
            divider(),
            slider_row(
                self.locale.get(Key::ProgressWidth),
                0..=WIDTH_MAX_DP,
                self.controls.progress_width_dp,
                format!("{} DP", self.controls.progress_width_dp),
                Message::ProgressWidthChanged,
            ),
            divider(),
            toggle_row(
                self.locale.get(Key::ProgressRoundCap),
                state.progress_round_cap,
                Message::RoundCapToggled,
            ),
            divider(),
            self.color_row(Key::ProgressColor, ColorTarget::Progress, state.progress_color),
        ]
        .into()
    }

    fn view_text_section(&self) -> Element<'_, Message> {
        let state = self.ring.state();
        let text_types = vec![
            Choice::new(TextType::Progress, self.locale.get(Key::TextTypeProgress)),
            Choice::new(TextType::Percent, self.locale.get(Key::TextTypePercent)),
        ];
        let selected = text_types
            .iter()
            .copied()
            .find(|choice| choice.value == state.progress_text_type);

        column![
            widgets::section_header::view(self.locale.get(Key::SectionText), None),
            toggle_row(
                self.locale.get(Key::TextEnabled),
                state.progress_text_enabled,
                Message::TextEnabledToggled,
            ),
            divider(),
            pick_row(
                self.locale.get(Key::TextType),
                text_types,
                selected,
                |choice: Choice<TextType>| Message::TextTypeSelected(choice.value),
            ),
            divider(),
            slider_row(
                self.locale.get(Key::TextSize),
                0..=TEXT_SIZE_MAX_SP,
                self.controls.text_size_sp,
                format!("{} SP", self.controls.text_size_sp),
                Message::TextSizeChanged,
            ),
            divider(),
            self.color_row(Key::TextColor, ColorTarget::Text, state.progress_text_color),
        ]
        .into()
    }

    fn view_appearance_section(&self) -> Element<'_, Message> {
        let state = self.ring.state();
        let angle = state.start_angle.round() as i32;
        column![
            widgets::section_header::view(self.locale.get(Key::SectionAppearance), None),
            self.color_row(Key::FillColor, ColorTarget::Fill, state.fill_color),
            divider(),
            slider_row(
                self.locale.get(Key::StartAngle),
                0..=360,
                angle.clamp(0, 360),
                format!("{}°", angle),
                Message::StartAngleChanged,
            ),
        ]
        .into()
    }

    fn view_animation_section(&self) -> Element<'_, Message> {
        let state = self.ring.state();
        let durations: Vec<Choice<u64>> = DURATIONS
            .iter()
            .map(|(ms, label)| Choice::new(*ms, *label))
            .collect();
        let selected = durations
            .iter()
            .copied()
            .find(|choice| choice.value == state.animate_duration);

        column![
            widgets::section_header::view(self.locale.get(Key::SectionAnimation), None),
            toggle_row(
                self.locale.get(Key::Animate),
                state.animate,
                Message::AnimateToggled,
            ),
            divider(),
            pick_row(
                self.locale.get(Key::AnimateDuration),
                durations,
                selected,
                |choice: Choice<u64>| Message::DurationSelected(choice.value),
            ),
            divider(),
            pick_row(
                self.locale.get(Key::Interpolator),
                InterpolatorId::all().to_vec(),
                Some(state.progress_interpolator),
                Message::InterpolatorSelected,
            ),
        ]
        .into()
    }

    fn view_display_section(&self) -> Element<'_, Message> {
        column![
            widgets::section_header::view(self.locale.get(Key::SectionDisplay), None),
            toggle_row(
                self.locale.get(Key::DarkMode),
                self.settings.display.dark_mode,
                Message::DarkModeToggled,
            ),
            divider(),
            pick_row(
                self.locale.get(Key::Language),
                Language::all().to_vec(),
                Some(self.locale.language),
                Message::LanguageSelected,
            ),
        ]
        .into()
    }
}
