pub mod config;
pub mod event_bus;
pub mod module_context;
pub mod modules;
pub mod style;
pub mod ticker;
pub mod time_source;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use module_context::ModuleContext;
