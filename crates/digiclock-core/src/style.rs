mod buttons;
mod card;
mod theme;

pub use buttons::format_button_style;
pub use card::{backdrop_style, card_style, panel_style};
pub use theme::digiclock_theme;
