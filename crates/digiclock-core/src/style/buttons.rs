use iced::{
    Border, Theme,
    widget::button::{Status, Style},
};

const RADIUS: f32 = 6.0;

/// Style for an hour format toggle.
///
/// The format on screen is filled with the primary colour. The other one is
/// drawn as an outline on the card and darkens on hover.
#[must_use]
pub fn format_button_style(selected: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let hovered = matches!(status, Status::Hovered);

        let (fill, text, edge) = if selected {
            let fill = if hovered {
                palette.primary.weak.color
            } else {
                palette.primary.base.color
            };
            (fill, palette.primary.base.text, fill)
        } else {
            let fill = if hovered {
                palette.secondary.base.color
            } else {
                palette.secondary.strong.color
            };
            (fill, palette.primary.base.color, palette.primary.weak.color)
        };

        Style {
            background: Some(fill.into()),
            text_color: text,
            border: Border {
                width:  1.0,
                radius: RADIUS.into(),
                color:  edge,
            },
            ..Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::{Background, Color};

    use super::*;

    fn fill(style: &Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn selected_toggle_is_filled_with_primary() {
        let theme = Theme::default();
        let palette = theme.extended_palette();
        let style = format_button_style(true);

        let active = style(&theme, Status::Active);
        assert_eq!(fill(&active), palette.primary.base.color);
        assert_eq!(active.text_color, palette.primary.base.text);
        assert_eq!(active.border.color, palette.primary.base.color);

        let hovered = style(&theme, Status::Hovered);
        assert_eq!(fill(&hovered), palette.primary.weak.color);
    }

    #[test]
    fn unselected_toggle_is_outlined_on_the_card() {
        let theme = Theme::default();
        let palette = theme.extended_palette();
        let style = format_button_style(false);

        let active = style(&theme, Status::Active);
        assert_eq!(fill(&active), palette.secondary.strong.color);
        assert_eq!(active.text_color, palette.primary.base.color);
        assert_eq!(active.border.color, palette.primary.weak.color);
        assert_eq!(active.border.radius, RADIUS.into());

        let hovered = style(&theme, Status::Hovered);
        assert_eq!(fill(&hovered), palette.secondary.base.color);
    }
}
