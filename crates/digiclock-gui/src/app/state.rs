use std::num::NonZeroUsize;

use digiclock_core::{
    ModuleContext,
    event_bus::{EventBus, EventReceiver},
    modules::clock::{self, ClockWidget},
};
use digiclock_proto::config::Config;
use iced::Task;
use tokio::runtime::Handle;

use super::poll_cadence::PollCadence;

const BUS_CAPACITY: usize = 64;

pub struct App {
    pub(super) bus_receiver: EventReceiver,
    pub(super) poll_cadence: PollCadence,
    pub(super) module_context: ModuleContext,
    pub config: Config,
    pub clock: ClockWidget,
}

#[derive(Debug, Clone)]
pub enum Message {
    None,
    /// First pass after the window exists; activates the clock.
    Activate,
    /// Drain the event bus and route what it held.
    PollBus,
    Clock(clock::Message),
    CloseRequested,
}

impl App {
    pub fn new(
        (config, runtime_handle): (Config, Handle),
    ) -> impl FnOnce() -> (Self, Task<Message>) {
        move || {
            let clock = ClockWidget::new(&config.clock);
            Self::assemble(config, runtime_handle, clock)
        }
    }

    /// Same as [`App::new`] with a caller-provided clock widget.
    pub fn with_clock(
        (config, runtime_handle, clock): (Config, Handle, ClockWidget),
    ) -> impl FnOnce() -> (Self, Task<Message>) {
        move || Self::assemble(config, runtime_handle, clock)
    }

    fn assemble(
        config: Config,
        runtime_handle: Handle,
        clock: ClockWidget,
    ) -> (Self, Task<Message>) {
        let capacity = NonZeroUsize::new(BUS_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        let bus = EventBus::new(capacity);
        let module_context = ModuleContext::new(bus.sender(), runtime_handle);

        (
            App {
                bus_receiver: bus.receiver(),
                poll_cadence: PollCadence::for_tick_period(clock.tick_interval()),
                module_context,
                config,
                clock,
            },
            Task::done(Message::Activate),
        )
    }
}
