//! Queue carrying work from background tasks to the GUI thread.
//!
//! Producers hold an [`EventSender`]; the application owns the single
//! [`EventReceiver`] and empties it on every poll.

use std::{
    collections::VecDeque,
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard},
};

use masterror::{AppError, Error};

use crate::modules::clock;

/// Something the GUI has to act on during its next poll.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum BusEvent {
    /// Repaint without a state change. Back-to-back redraws collapse into one.
    Redraw,
    Module(ModuleEvent),
}

/// Message addressed to a mounted widget.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ModuleEvent {
    Clock(clock::Message),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventBusError {
    #[error("event bus is full ({capacity} pending events)")]
    QueueFull { capacity: usize },
    #[error("event bus lock poisoned by a panicking producer")]
    Poisoned,
}

impl From<EventBusError> for AppError {
    fn from(err: EventBusError) -> Self {
        AppError::internal(err.to_string())
    }
}

#[derive(Debug)]
struct PendingEvents {
    events:   VecDeque<BusEvent>,
    capacity: NonZeroUsize,
}

impl PendingEvents {
    fn push(&mut self, event: BusEvent) -> Result<(), EventBusError> {
        if matches!(
            (self.events.back(), &event),
            (Some(BusEvent::Redraw), BusEvent::Redraw)
        ) {
            return Ok(());
        }

        if self.events.len() >= self.capacity.get() {
            return Err(EventBusError::QueueFull {
                capacity: self.capacity.get(),
            });
        }

        self.events.push_back(event);
        Ok(())
    }
}

type SharedEvents = Arc<Mutex<PendingEvents>>;

fn lock(shared: &SharedEvents) -> Result<MutexGuard<'_, PendingEvents>, EventBusError> {
    shared.lock().map_err(|_| EventBusError::Poisoned)
}

/// Bounded FIFO shared by every [`EventSender`] and the [`EventReceiver`].
#[derive(Debug, Clone)]
pub struct EventBus {
    shared: SharedEvents,
}

impl EventBus {
    pub fn new(capacity: NonZeroUsize) -> Self {
        let pending = PendingEvents {
            events: VecDeque::with_capacity(capacity.get()),
            capacity,
        };

        Self {
            shared: Arc::new(Mutex::new(pending)),
        }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            shared: Arc::clone(&self.shared),
        }
    }

    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            shared: Arc::clone(&self.shared),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventSender {
    shared: SharedEvents,
}

impl EventSender {
    /// Enqueue without blocking on a full bus.
    pub fn try_send(&self, event: BusEvent) -> Result<(), EventBusError> {
        lock(&self.shared)?.push(event)
    }
}

#[derive(Debug)]
pub struct EventReceiver {
    shared: SharedEvents,
}

impl EventReceiver {
    /// Take everything queued so far, oldest first.
    pub fn drain(&mut self) -> Result<Vec<BusEvent>, EventBusError> {
        Ok(lock(&self.shared)?.events.drain(..).collect())
    }
}
