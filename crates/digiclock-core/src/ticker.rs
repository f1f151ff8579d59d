use std::time::Duration;

use log::{debug, error};
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};

use crate::{ModuleContext, event_bus::ModuleEvent};

/// Owned handle to a repeating background task.
///
/// The task publishes a copy of its event once per period, starting one
/// period after it was spawned. Dropping the handle aborts the task, so no
/// event is published after the owner is gone.
#[derive(Debug)]
pub struct TickerHandle {
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Spawn the repeating task on the context's runtime.
    ///
    /// Missed periods are skipped rather than replayed in a burst; the
    /// receiver resamples whatever it tracks on every delivery.
    ///
    /// `period` must be non-zero.
    pub fn spawn(ctx: &ModuleContext, period: Duration, event: ModuleEvent) -> Self {
        debug!("starting ticker with period {period:?}");

        let publisher = ctx.clone();
        let task = ctx.runtime().spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if let Err(err) = publisher.publish(event.clone()) {
                    error!("Failed to publish tick: {err}");
                }
            }
        });

        Self { task: Some(task) }
    }

    /// Whether the task is still scheduled.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Abort the task. Calling this more than once is harmless.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("stopping ticker");
            task.abort();
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use tokio::runtime::Handle;

    use super::*;
    use crate::{
        event_bus::{BusEvent, EventBus},
        modules::clock::Message,
    };

    fn ticks(bus: &EventBus) -> usize {
        bus.receiver()
            .drain()
            .expect("drain")
            .into_iter()
            .filter(|event| {
                matches!(event, BusEvent::Module(ModuleEvent::Clock(Message::Tick)))
            })
            .count()
    }

    fn spawn_ticker(bus: &EventBus) -> TickerHandle {
        let ctx = ModuleContext::new(bus.sender(), Handle::current());
        TickerHandle::spawn(
            &ctx,
            Duration::from_secs(1),
            ModuleEvent::Clock(Message::Tick),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_arrives_after_one_period() {
        let bus = EventBus::new(NonZeroUsize::new(16).expect("capacity"));
        let ticker = spawn_ticker(&bus);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(ticks(&bus), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(ticks(&bus), 1);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_repeat_every_period() {
        let bus = EventBus::new(NonZeroUsize::new(16).expect("capacity"));
        let _ticker = spawn_ticker(&bus);

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(ticks(&bus), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn full_bus_does_not_stop_the_ticker() {
        let bus = EventBus::new(NonZeroUsize::new(1).expect("capacity"));
        let ticker = spawn_ticker(&bus);

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert_eq!(ticks(&bus), 1);
        assert!(ticker.is_running());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(ticks(&bus), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_publishing() {
        let bus = EventBus::new(NonZeroUsize::new(16).expect("capacity"));
        let mut ticker = spawn_ticker(&bus);

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(ticks(&bus), 1);

        ticker.cancel();
        ticker.cancel();
        assert!(!ticker.is_running());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(ticks(&bus), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_stops_publishing() {
        let bus = EventBus::new(NonZeroUsize::new(16).expect("capacity"));
        drop(spawn_ticker(&bus));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(ticks(&bus), 0);
    }
}
