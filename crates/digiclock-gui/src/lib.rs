use flexi_logger::LogSpecification;
use log::warn;

pub mod app;

pub use app::{App, Message};

/// Parses the configured level, honouring `RUST_LOG` when set.
///
/// An unparsable level falls back to `info` so a typo in the config file
/// never prevents the clock from starting.
pub fn get_log_spec(log_level: &str) -> LogSpecification {
    LogSpecification::env_or_parse(log_level).unwrap_or_else(|err| {
        warn!("Failed to parse log level {log_level:?}: {err}");
        LogSpecification::info()
    })
}

