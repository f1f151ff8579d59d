//! Wall-clock port used by the clock widget.

use std::fmt::Debug;

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock time.
///
/// The widget never reads the system clock directly so tests can drive it
/// with a controlled instant.
pub trait TimeSource: Debug + Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn system_source_reports_valid_wall_clock() {
        let now = SystemTimeSource.now();
        assert!(now.hour() < 24);
        assert!(now.minute() < 60);
    }
}
