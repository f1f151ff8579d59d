use tokio::runtime::Handle;

use crate::event_bus::{BusEvent, EventBusError, EventSender, ModuleEvent};

/// Handed to a widget on activation: where to spawn work and where to report.
#[derive(Debug, Clone)]
pub struct ModuleContext {
    events:  EventSender,
    runtime: Handle,
}

impl ModuleContext {
    pub fn new(events: EventSender, runtime: Handle) -> Self {
        Self { events, runtime }
    }

    /// Runtime owning the widget's background tasks.
    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub fn request_redraw(&self) -> Result<(), EventBusError> {
        self.events.try_send(BusEvent::Redraw)
    }

    /// Queue a widget message for the next GUI poll.
    ///
    /// ```
    /// # use std::num::NonZeroUsize;
    /// # use digiclock_core::{ModuleContext, event_bus::{EventBus, ModuleEvent}, modules::clock};
    /// # let runtime = tokio::runtime::Runtime::new().expect("runtime");
    /// let bus = EventBus::new(NonZeroUsize::new(2).expect("capacity"));
    /// let ctx = ModuleContext::new(bus.sender(), runtime.handle().clone());
    ///
    /// ctx.publish(ModuleEvent::Clock(clock::Message::Tick)).expect("queued");
    /// assert_eq!(bus.receiver().drain().expect("drain").len(), 1);
    /// ```
    pub fn publish(&self, event: ModuleEvent) -> Result<(), EventBusError> {
        self.events.try_send(BusEvent::Module(event))
    }
}
