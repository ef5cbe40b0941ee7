//! Labelled control rows for the demo panel
//!
//! Every row has the label on the left and the control on the right, with an
//! optional value readout under the label.

use std::fmt;
use std::ops::RangeInclusive;

use iced::widget::{Space, button, column, container, pick_list, row, slider, text, toggler};
use iced::{Alignment, Color, Element, Fill, Length};

use crate::ui::theme;

/// Width of the control column
const CONTROL_WIDTH: f32 = 220.0;

/// A pick list entry carrying a value and its display label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice<T> {
    pub value: T,
    pub label: &'static str,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: &'static str) -> Self {
        Self { value, label }
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Row with label on left and control on right
pub fn row_with<'a, Message: 'a>(
    label: &'a str,
    value: Option<String>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let label_section: Element<'a, Message> = match value {
        Some(value) => column![
            text(label).size(14).style(|theme| text::Style {
                color: Some(theme::text_primary(theme))
            }),
            text(value).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme))
            }),
        ]
        .spacing(2)
        .into(),
        None => text(label)
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .into(),
    };

    container(
        row![label_section, Space::new().width(Fill), control]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding([10, 0])
    .into()
}

/// Integer slider row with the current value shown under the label
pub fn slider_row<'a, Message: Clone + 'a>(
    label: &'a str,
    range: RangeInclusive<i32>,
    value: i32,
    readout: String,
    on_change: impl Fn(i32) -> Message + 'a,
) -> Element<'a, Message> {
    let control = slider(range, value, on_change)
        .width(Length::Fixed(CONTROL_WIDTH))
        .style(theme::accent_slider);
    row_with(label, Some(readout), control.into())
}

pub fn toggle_row<'a, Message: 'a>(
    label: &'a str,
    checked: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    let control = toggler(checked).on_toggle(on_toggle).size(22);
    row_with(label, None, control.into())
}

/// Dropdown row using the shared pick list style
pub fn pick_row<'a, T, Message>(
    label: &'a str,
    options: Vec<T>,
    selected: Option<T>,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
    Message: Clone + 'a,
{
    let control = pick_list(options, selected, on_select)
        .text_size(13)
        .padding([6, 12])
        .width(Length::Fixed(CONTROL_WIDTH))
        .style(theme::styled_pick_list)
        .menu_style(theme::styled_pick_list_menu);
    row_with(label, None, control.into())
}

/// Colour swatches followed by "random" and "none" buttons
pub fn swatch_row<'a, Message: Clone + 'a>(
    label: &'a str,
    swatches: Vec<Color>,
    current: Color,
    on_pick: impl Fn(Color) -> Message + 'a,
    random: (&'a str, Message),
    clear: (&'a str, Message),
) -> Element<'a, Message> {
    let dots = row(swatches.into_iter().map(|color| {
        button(Space::new().width(14).height(14))
            .padding(0)
            .style(theme::swatch_button(color, color == current))
            .on_press(on_pick(color))
            .into()
    }))
    .spacing(6)
    .wrap();

    let (random_label, random_msg) = random;
    let (clear_label, clear_msg) = clear;
    let actions = row![
        button(text(random_label).size(12))
            .padding([4, 10])
            .style(theme::secondary_button)
            .on_press(random_msg),
        button(text(clear_label).size(12))
            .padding([4, 10])
            .style(theme::secondary_button)
            .on_press(clear_msg),
    ]
    .spacing(8);

    container(
        column![
            text(label).size(14).style(|theme| text::Style {
                color: Some(theme::text_primary(theme))
            }),
            dots,
            actions,
        ]
        .spacing(8),
    )
    .padding([10, 0])
    .into()
}

/// Thin horizontal rule between rows
pub fn divider<'a, Message: 'a>() -> Element<'a, Message> {
    container(Space::new().height(1))
        .width(Fill)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::divider(theme))),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_displays_label() {
        let choice = Choice::new(300u64, "300 ms");
        assert_eq!(choice.to_string(), "300 ms");
        assert_eq!(choice, Choice::new(300u64, "300 ms"));
    }
}
