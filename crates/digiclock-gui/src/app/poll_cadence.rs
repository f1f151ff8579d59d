use std::time::Duration;

/// Fastest bus poll, about one frame at 60 Hz.
const FLOOR: Duration = Duration::from_millis(16);

/// How often the application drains the event bus.
///
/// Polls at frame rate while events keep arriving and doubles the delay after
/// every empty poll. The delay never exceeds an eighth of the clock period,
/// so a tick reaches the screen at most that late.
#[derive(Debug, Clone, Copy)]
pub(super) struct PollCadence {
    ceiling: Duration,
    current: Duration,
}

impl PollCadence {
    pub(super) fn for_tick_period(period: Duration) -> Self {
        Self {
            ceiling: (period / 8).max(FLOOR),
            current: FLOOR,
        }
    }

    pub(super) fn interval(&self) -> Duration {
        self.current
    }

    /// Adjust after a poll that delivered `delivered` events.
    pub(super) fn observe(&mut self, delivered: usize) {
        self.current = if delivered > 0 {
            FLOOR
        } else {
            (self.current * 2).min(self.ceiling)
        };
    }
}
