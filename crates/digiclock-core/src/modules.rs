use std::borrow::Cow;

use iced::Element;
use masterror::Error;

use crate::{event_bus::EventBusError, module_context::ModuleContext};

pub mod clock;

/// Errors that can occur while activating a module.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Propagates failures originating from the event bus.
    #[error("module event bus interaction failed: {0}")]
    EventBus(#[from] EventBusError),
    /// The module is in a lifecycle phase that does not allow the request.
    #[error("module lifecycle violation: {reason}")]
    Lifecycle { reason: Cow<'static, str> },
}

impl ModuleError {
    /// Construct a lifecycle error with the provided reason.
    pub fn lifecycle(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Lifecycle {
            reason: reason.into(),
        }
    }
}

/// Behaviour shared by widgets mounted in the application window.
///
/// [`register`](Module::register) runs once when the widget becomes active and
/// may acquire background resources through the [`ModuleContext`];
/// [`unregister`](Module::unregister) releases them again. Implementations
/// must not mutate their state from background work after `unregister`.
pub trait Module {
    type Message;
    type ViewData<'a>;

    fn register(&mut self, ctx: &ModuleContext) -> Result<(), ModuleError>;

    fn unregister(&mut self);

    fn view(&self, data: Self::ViewData<'_>) -> Element<'_, Self::Message>;
}
