use iced::Element;

use super::state::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        self.clock.view(&self.config.appearance).map(Message::Clock)
    }
}
