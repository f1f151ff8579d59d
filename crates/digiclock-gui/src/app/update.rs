use digiclock_core::{
    event_bus::{BusEvent, ModuleEvent},
    style::digiclock_theme,
};
use iced::{Subscription, Task, Theme, time, window};
use log::{debug, error, info};

use super::state::{App, Message};

impl App {
    pub fn title(&self) -> String {
        String::from("Digital Clock")
    }

    pub fn theme(&self) -> Theme {
        digiclock_theme(&self.config.appearance)
    }

    pub fn scale_factor(&self) -> f64 {
        self.config.appearance.scale_factor
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::None => Task::none(),
            Message::Activate => {
                if let Err(err) = self.clock.activate(&self.module_context) {
                    error!("failed to activate clock: {err}");
                }
                Task::none()
            }
            Message::PollBus => {
                let events = self.drain_bus();
                self.poll_cadence.observe(events.len());

                let tasks: Vec<_> = events
                    .into_iter()
                    .filter_map(App::message_from_bus_event)
                    .map(|msg| self.update(msg))
                    .collect();

                Task::batch(tasks)
            }
            Message::Clock(message) => {
                self.clock.update(message);
                Task::none()
            }
            Message::CloseRequested => {
                info!("window close requested, shutting down");
                self.clock.deactivate();
                iced::exit()
            }
        }
    }

    fn drain_bus(&mut self) -> Vec<BusEvent> {
        self.bus_receiver.drain().unwrap_or_else(|err| {
            error!("failed to drain event bus: {err}");
            Vec::new()
        })
    }

    fn message_from_bus_event(event: BusEvent) -> Option<Message> {
        match event {
            BusEvent::Redraw => Some(Message::None),
            BusEvent::Module(ModuleEvent::Clock(message)) => Some(Message::Clock(message)),
            other => {
                debug!("ignoring bus event {other:?}");
                None
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let poll = time::every(self.poll_cadence.interval()).map(|_| Message::PollBus);

        Subscription::batch(vec![
            poll,
            window::close_requests().map(|_id| Message::CloseRequested),
        ])
    }
}
