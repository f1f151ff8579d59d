use iced::{
    Color, Theme,
    theme::{Palette, palette},
};

use digiclock_proto::config::{Appearance, AppearanceColor, Shade};

/// Builds the clock [`Theme`] from the configured [`Appearance`].
///
/// The card colour becomes the secondary palette so container styles can
/// reach it through the theme alone.
#[must_use]
pub fn digiclock_theme(appearance: &Appearance) -> Theme {
    Theme::custom_with_fn(
        "digiclock".to_string(),
        Palette {
            background: appearance.background_color.base(),
            text:       appearance.text_color.base(),
            primary:    appearance.primary_color.base(),
            success:    Palette::DARK.success,
            danger:     Palette::DARK.danger,
        },
        |palette| extend(appearance, palette),
    )
}

/// Generated tones for one role, overridden by whatever the config sets.
struct Role<'a> {
    color:  &'a AppearanceColor,
    text:   Color,
    base:   palette::Pair,
    weak:   palette::Pair,
    strong: palette::Pair,
}

impl<'a> Role<'a> {
    fn generate(color: &'a AppearanceColor, background: Color, text_fallback: Color) -> Self {
        let text = color.text().unwrap_or(text_fallback);
        let generated = palette::Primary::generate(color.base(), background, text);

        Self {
            color,
            text,
            base: generated.base,
            weak: generated.weak,
            strong: generated.strong,
        }
    }

    fn shade(&self, shade: Shade) -> palette::Pair {
        let generated = match shade {
            Shade::Weak => self.weak,
            Shade::Strong => self.strong,
        };
        self.color.shade(shade, self.text).unwrap_or(generated)
    }
}

fn extend(appearance: &Appearance, palette: Palette) -> palette::Extended {
    let background = palette::Background::new(
        palette.background,
        appearance.background_color.text().unwrap_or(palette.text),
    );
    let primary = Role::generate(&appearance.primary_color, palette.background, palette.text);
    let card = Role::generate(&appearance.card_color, palette.background, palette.text);
    let backdrop = Role {
        color:  &appearance.background_color,
        text:   background.base.text,
        base:   background.base,
        weak:   background.weak,
        strong: background.strong,
    };

    palette::Extended {
        background: palette::Background {
            base:   backdrop.base,
            weak:   backdrop.shade(Shade::Weak),
            strong: backdrop.shade(Shade::Strong),
        },
        primary:    palette::Primary {
            base:   primary.base,
            weak:   primary.shade(Shade::Weak),
            strong: primary.shade(Shade::Strong),
        },
        secondary:  palette::Secondary {
            base:   card.base,
            weak:   card.shade(Shade::Weak),
            strong: card.shade(Shade::Strong),
        },
        success:    palette::Success::generate(palette.success, palette.background, palette.text),
        danger:     palette::Danger::generate(palette.danger, palette.background, palette.text),
        is_dark:    true,
    }
}

#[cfg(test)]
mod tests {
    use hex_color::HexColor;

    use digiclock_proto::config::ColorTones;

    use super::*;

    fn tones(base: HexColor, strong: Option<HexColor>, weak: Option<HexColor>) -> ColorTones {
        ColorTones {
            base,
            strong,
            weak,
            text: None,
        }
    }

    #[test]
    fn configured_tones_override_generated_ones() {
        let appearance = Appearance {
            background_color: AppearanceColor::Complete(ColorTones {
                text: Some(HexColor::rgb(200, 210, 220)),
                ..tones(
                    HexColor::rgb(10, 20, 30),
                    Some(HexColor::rgb(40, 50, 60)),
                    Some(HexColor::rgb(70, 80, 90)),
                )
            }),
            primary_color: AppearanceColor::Complete(ColorTones {
                text: Some(HexColor::rgb(255, 255, 255)),
                ..tones(HexColor::rgb(120, 60, 30), Some(HexColor::rgb(160, 90, 45)), None)
            }),
            card_color: AppearanceColor::Complete(tones(
                HexColor::rgb(100, 100, 100),
                Some(HexColor::rgb(250, 250, 250)),
                None,
            )),
            text_color: AppearanceColor::Simple(HexColor::rgb(5, 5, 5)),
            ..Appearance::default()
        };

        let theme = digiclock_theme(&appearance);
        let palette = theme.extended_palette();

        assert_eq!(theme.palette().text, Color::from_rgb8(5, 5, 5));
        assert_eq!(palette.background.base.color, Color::from_rgb8(10, 20, 30));
        assert_eq!(palette.background.weak.color, Color::from_rgb8(70, 80, 90));
        assert_eq!(palette.background.strong.color, Color::from_rgb8(40, 50, 60));
        assert_eq!(palette.primary.base.color, Color::from_rgb8(120, 60, 30));
        assert_eq!(palette.primary.strong.color, Color::from_rgb8(160, 90, 45));
        assert_eq!(palette.primary.strong.text, Color::from_rgb8(255, 255, 255));
        assert_eq!(palette.secondary.base.color, Color::from_rgb8(100, 100, 100));
        assert_eq!(palette.secondary.strong.color, Color::from_rgb8(250, 250, 250));
        assert_eq!(palette.secondary.strong.text, Color::from_rgb8(5, 5, 5));
        assert!(palette.is_dark);
    }

    #[test]
    fn bare_colors_keep_generated_tones() {
        let appearance = Appearance {
            primary_color: AppearanceColor::Simple(HexColor::rgb(30, 60, 90)),
            ..Appearance::default()
        };

        let palette = *digiclock_theme(&appearance).extended_palette();
        let generated = palette::Primary::generate(
            Color::from_rgb8(30, 60, 90),
            appearance.background_color.base(),
            appearance.text_color.base(),
        );

        assert_eq!(palette.primary.weak, generated.weak);
        assert_eq!(palette.primary.strong, generated.strong);
    }
}
