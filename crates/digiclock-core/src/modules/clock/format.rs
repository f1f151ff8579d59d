use chrono::Timelike;
use digiclock_proto::config::HourFormat;

/// Hour shown on the clock face for a 0-23 `hour`.
pub fn display_hour(hour: u32, format: HourFormat) -> u32 {
    match format {
        HourFormat::TwentyFourHour => hour,
        HourFormat::TwelveHour => match hour % 12 {
            0 => 12,
            hour => hour,
        },
    }
}

/// Renders `instant` as `HH:MM:SS`.
///
/// Returns an empty string until the widget is ready, so nothing time-derived
/// is shown before the first live sample.
pub fn format_time<T: Timelike>(instant: &T, format: HourFormat, ready: bool) -> String {
    if !ready {
        return String::new();
    }

    format!(
        "{:02}:{:02}:{:02}",
        display_hour(instant.hour(), format),
        instant.minute(),
        instant.second()
    )
}
