use digiclock_proto::config::{Appearance, HourFormat};
use iced::{
    Alignment, Element, Font, Length,
    font::{Style, Weight},
    widget::{button, column, container, row, text},
};

use super::Message;
use crate::style::{backdrop_style, card_style, format_button_style, panel_style};

const TITLE: &str = "Digital Clock";
const DESCRIPTION: &str = "Display current time in hours, minutes, and seconds.";
const FORMATS: [HourFormat; 2] = [HourFormat::TwentyFourHour, HourFormat::TwelveHour];

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

const ITALIC: Font = Font {
    style: Style::Italic,
    ..Font::DEFAULT
};

/// Renders the clock card: title, description, time and the format toggles.
pub fn build_clock_view<'a>(
    formatted_time: String,
    active: HourFormat,
    appearance: &Appearance,
) -> Element<'a, Message> {
    let buttons = toggle_states(active).map(|(format, selected)| format_button(format, selected));
    let toggles = row(buttons)
        .spacing(8)
        .align_y(Alignment::Center);

    let panel = container(
        column![
            text(TITLE).size(24).font(BOLD),
            text(DESCRIPTION).size(14).font(ITALIC),
            text(formatted_time)
                .size(appearance.time_text_size)
                .font(BOLD)
                .color(appearance.text_color.base()),
            toggles,
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .style(panel_style);

    let card = container(panel).padding(32).style(card_style);

    container(card)
        .center(Length::Fill)
        .style(backdrop_style)
        .into()
}

/// Each toggle in display order, paired with whether it is highlighted.
fn toggle_states(active: HourFormat) -> [(HourFormat, bool); 2] {
    FORMATS.map(|format| (format, format == active))
}

fn format_button<'a>(format: HourFormat, selected: bool) -> Element<'a, Message> {
    button(text(format.label()).font(BOLD))
        .padding([8, 16])
        .on_press(Message::SelectFormat(format))
        .style(format_button_style(selected))
        .into()
}
