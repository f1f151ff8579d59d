use std::sync::{Arc, Mutex};

use chrono::{NaiveDateTime, TimeDelta};

use crate::time_source::TimeSource;

/// Time source whose reading only changes when a test says so.
///
/// Clones share the same instant, so a test can keep one handle while the
/// widget owns another.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    instant: Arc<Mutex<NaiveDateTime>>,
}

impl ManualTimeSource {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    /// Parses an ISO-8601 local timestamp such as `2024-01-01T00:00:00`.
    ///
    /// # Panics
    ///
    /// Panics on malformed input; intended for test fixtures only.
    pub fn at(timestamp: &str) -> Self {
        let instant = timestamp
            .parse::<NaiveDateTime>()
            .unwrap_or_else(|err| panic!("invalid fixture timestamp {timestamp:?}: {err}"));
        Self::new(instant)
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut guard = self.lock();
        *guard += delta;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDateTime> {
        self.instant
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> NaiveDateTime {
        *self.lock()
    }
}
