//! Section header widget
//!
//! Displays a section title with an optional trailing action button.
//! This is a reusable widget that does not depend on application-specific types.

use iced::widget::{Space, button, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme;

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `action` - Optional label and message for a button on the right
pub fn view<'a, Message: Clone + 'a>(
    title: &'a str,
    action: Option<(&'a str, Message)>,
) -> Element<'a, Message> {
    let title_text = text(title).size(18).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let action_btn: Element<'a, Message> = if let Some((label, msg)) = action {
        button(text(label).size(13))
            .padding([4, 12])
            .style(theme::secondary_button)
            .on_press(msg)
            .into()
    } else {
        Space::new().width(0).into()
    };

    row![title_text, Space::new().width(Fill), action_btn]
        .align_y(Alignment::Center)
        .into()
}
