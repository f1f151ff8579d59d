use iced::{
    Border, Color, Shadow, Theme, Vector,
    widget::container::Style,
};

/// Full-window backdrop behind the card.
pub fn backdrop_style(theme: &Theme) -> Style {
    Style {
        background: Some(theme.palette().background.into()),
        ..Style::default()
    }
}

/// Outer card with a soft drop shadow.
pub fn card_style(theme: &Theme) -> Style {
    Style {
        background: Some(theme.extended_palette().secondary.strong.color.into()),
        border: Border {
            color:  Color::TRANSPARENT,
            width:  0.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color:       Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset:      Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Style::default()
    }
}

/// Inner panel holding the clock face and the format buttons.
pub fn panel_style(theme: &Theme) -> Style {
    Style {
        background: Some(theme.extended_palette().secondary.base.color.into()),
        text_color: Some(theme.palette().text),
        border: Border {
            color:  Color::TRANSPARENT,
            width:  0.0,
            radius: 12.0.into(),
        },
        ..Style::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;

    use super::*;

    fn color(background: Option<Background>) -> Color {
        match background.expect("background should be set") {
            Background::Color(color) => color,
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn backdrop_uses_theme_background() {
        let theme = Theme::default();
        let style = backdrop_style(&theme);

        assert_eq!(color(style.background), theme.palette().background);
    }

    #[test]
    fn card_is_rounded_with_shadow() {
        let theme = Theme::default();
        let style = card_style(&theme);

        assert_eq!(style.border.radius, 16.0.into());
        assert!(style.shadow.blur_radius > 0.0);
        assert_eq!(
            color(style.background),
            theme.extended_palette().secondary.strong.color
        );
    }

    #[test]
    fn panel_carries_text_color() {
        let theme = Theme::default();
        let style = panel_style(&theme);

        assert_eq!(style.text_color, Some(theme.palette().text));
        assert_eq!(style.border.radius, 12.0.into());
    }
}
