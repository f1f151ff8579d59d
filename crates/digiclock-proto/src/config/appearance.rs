use hex_color::HexColor;
use iced::{Color, theme::palette};
use serde::{Deserialize, Deserializer, de::Error as _};

/// A configured color, either a bare hex value or a base with tones.
///
/// ```toml
/// text_color = "#111827"
/// primary_color = { base = "#111827", weak = "#374151", text = "#f9fafb" }
/// ```
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum AppearanceColor {
    Simple(HexColor),
    Complete(ColorTones),
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTones {
    pub base:   HexColor,
    #[serde(default)]
    pub strong: Option<HexColor>,
    #[serde(default)]
    pub weak:   Option<HexColor>,
    /// Foreground drawn on top of any tone of this color.
    #[serde(default)]
    pub text:   Option<HexColor>,
}

/// Variant of a color used for hover and emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Weak,
    Strong,
}

fn to_color(color: HexColor) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

impl AppearanceColor {
    fn tones(self) -> ColorTones {
        match self {
            Self::Simple(base) => ColorTones {
                base,
                strong: None,
                weak: None,
                text: None,
            },
            Self::Complete(tones) => tones,
        }
    }

    #[must_use]
    pub fn base(&self) -> Color {
        to_color(self.tones().base)
    }

    #[must_use]
    pub fn text(&self) -> Option<Color> {
        self.tones().text.map(to_color)
    }

    /// The requested tone paired with this color's text, or `text_fallback`
    /// when no text color is configured. `None` if the tone is not set.
    #[must_use]
    pub fn shade(&self, shade: Shade, text_fallback: Color) -> Option<palette::Pair> {
        let tones = self.tones();
        let tone = match shade {
            Shade::Weak => tones.weak,
            Shade::Strong => tones.strong,
        }?;

        Some(palette::Pair::new(
            to_color(tone),
            tones.text.map(to_color).unwrap_or(text_fallback),
        ))
    }
}

/// Colours and scaling of the clock window.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Appearance {
    #[serde(default)]
    pub font_name:        Option<String>,
    #[serde(
        deserialize_with = "scale_factor_deserializer",
        default = "default_scale_factor"
    )]
    pub scale_factor:     f64,
    #[serde(default = "default_background_color")]
    pub background_color: AppearanceColor,
    #[serde(default = "default_card_color")]
    pub card_color:       AppearanceColor,
    #[serde(default = "default_primary_color")]
    pub primary_color:    AppearanceColor,
    #[serde(default = "default_text_color")]
    pub text_color:       AppearanceColor,
    #[serde(default = "default_time_text_size")]
    pub time_text_size:   f32,
}

const INK: HexColor = HexColor::rgb(17, 24, 39);

fn scale_factor_deserializer<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let scale = f64::deserialize(deserializer)?;

    if scale > 0.0 && scale <= 2.0 {
        Ok(scale)
    } else {
        Err(D::Error::custom(format!(
            "scale_factor {scale} is outside (0.0, 2.0]"
        )))
    }
}

fn default_scale_factor() -> f64 {
    1.0
}

// Slate backdrop, grey card with a white inner face, dark ink.
fn default_background_color() -> AppearanceColor {
    AppearanceColor::Complete(ColorTones {
        base:   HexColor::rgb(31, 41, 55),
        strong: Some(HexColor::rgb(55, 65, 81)),
        weak:   Some(HexColor::rgb(75, 85, 99)),
        text:   Some(HexColor::rgb(243, 244, 246)),
    })
}

fn default_card_color() -> AppearanceColor {
    AppearanceColor::Complete(ColorTones {
        base:   HexColor::rgb(107, 114, 128),
        strong: Some(HexColor::rgb(255, 255, 255)),
        weak:   None,
        text:   Some(HexColor::rgb(0, 0, 0)),
    })
}

fn default_primary_color() -> AppearanceColor {
    AppearanceColor::Complete(ColorTones {
        base:   INK,
        strong: None,
        weak:   Some(HexColor::rgb(55, 65, 81)),
        text:   Some(HexColor::rgb(249, 250, 251)),
    })
}

fn default_text_color() -> AppearanceColor {
    AppearanceColor::Simple(INK)
}

fn default_time_text_size() -> f32 {
    60.
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            font_name:        None,
            scale_factor:     default_scale_factor(),
            background_color: default_background_color(),
            card_color:       default_card_color(),
            primary_color:    default_primary_color(),
            text_color:       default_text_color(),
            time_text_size:   default_time_text_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        color: AppearanceColor,
    }

    fn parse(color: &str) -> AppearanceColor {
        toml::from_str::<Wrapper>(&format!("color = {color}"))
            .expect("color parses")
            .color
    }

    #[test]
    fn default_appearance_uses_unit_scale() {
        let appearance = Appearance::default();
        assert_eq!(appearance.scale_factor, 1.0);
        assert_eq!(appearance.time_text_size, 60.0);
        assert!(appearance.text_color.text().is_none());
        assert_eq!(appearance.card_color.text(), Some(Color::BLACK));
    }

    #[test]
    fn scale_factor_must_lie_in_half_open_range() {
        let scale = |value: &str| toml::from_str::<Appearance>(&format!("scale_factor = {value}"));

        assert_eq!(scale("2.0").expect("upper bound allowed").scale_factor, 2.0);
        for rejected in ["0.0", "-1.0", "2.1"] {
            let err = scale(rejected).expect_err("out of range");
            assert!(err.to_string().contains("outside (0.0, 2.0]"), "{err}");
        }
    }

    #[test]
    fn bare_hex_color_has_no_shades() {
        let color = parse("\"#010203\"");

        assert_eq!(color, AppearanceColor::Simple(HexColor::rgb(1, 2, 3)));
        assert_eq!(color.base(), Color::from_rgb8(1, 2, 3));
        assert!(color.shade(Shade::Weak, Color::WHITE).is_none());
        assert!(color.shade(Shade::Strong, Color::WHITE).is_none());
    }

    #[test]
    fn shade_uses_configured_text_or_fallback() {
        let with_text = parse("{ base = \"#000000\", weak = \"#0a0a0a\", text = \"#ffffff\" }");
        let weak = with_text
            .shade(Shade::Weak, Color::BLACK)
            .expect("weak tone configured");
        assert_eq!(weak.color, Color::from_rgb8(10, 10, 10));
        assert_eq!(weak.text, Color::WHITE);
        assert!(with_text.shade(Shade::Strong, Color::BLACK).is_none());

        let without_text = parse("{ base = \"#000000\", strong = \"#141414\" }");
        let strong = without_text
            .shade(Shade::Strong, Color::WHITE)
            .expect("strong tone configured");
        assert_eq!(strong.color, Color::from_rgb8(20, 20, 20));
        assert_eq!(strong.text, Color::WHITE);
    }
}
