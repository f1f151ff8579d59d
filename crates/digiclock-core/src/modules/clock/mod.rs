mod format;
mod view;

use std::{num::NonZeroU64, sync::Arc, time::Duration};

use chrono::NaiveDateTime;
use digiclock_proto::config::{Appearance, ClockModuleConfig, HourFormat};
use iced::Element;
use log::{debug, info, warn};

pub use format::{display_hour, format_time};

use crate::{
    ModuleContext,
    event_bus::ModuleEvent,
    modules::{Module, ModuleError},
    ticker::TickerHandle,
    time_source::{SystemTimeSource, TimeSource},
};

/// Lifecycle of a [`ClockWidget`].
///
/// A widget moves forward only. `Deactivated` is reachable from both other
/// phases and is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created but not yet activated; no time is shown.
    Unready,
    /// Activated and receiving ticks.
    Active,
    /// Torn down; ticks are ignored and the display is frozen.
    Deactivated,
}

/// Message type for GUI communication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Resample the time source.
    Tick,
    /// Switch the displayed hour notation.
    SelectFormat(HourFormat),
}

/// Digital clock with a 24/12-hour toggle.
#[derive(Debug)]
pub struct ClockWidget {
    current_instant: NaiveDateTime,
    hour_format:     HourFormat,
    lifecycle:       Lifecycle,
    /// Set by the first activation and never cleared.
    ready:           bool,
    tick_interval:   Duration,
    time_source:     Arc<dyn TimeSource>,
    ticker:          Option<TickerHandle>,
}

impl ClockWidget {
    pub fn new(config: &ClockModuleConfig) -> Self {
        Self::with_time_source(config, Arc::new(SystemTimeSource))
    }

    pub fn with_time_source(config: &ClockModuleConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            current_instant: time_source.now(),
            hour_format: config.default_format,
            lifecycle: Lifecycle::Unready,
            ready: false,
            tick_interval: checked_tick_interval(config.tick_interval_ms),
            time_source,
            ticker: None,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether a live sample was ever taken. Survives deactivation.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn current_instant(&self) -> NaiveDateTime {
        self.current_instant
    }

    pub fn hour_format(&self) -> HourFormat {
        self.hour_format
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Whether a ticker task is currently owned and scheduled.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(TickerHandle::is_running)
    }

    /// The text shown on the clock face, recomputed from current state.
    pub fn formatted_time(&self) -> String {
        format_time(&self.current_instant, self.hour_format, self.is_ready())
    }

    /// Mark the widget ready, take a first sample and start ticking.
    ///
    /// Activating an active widget does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::Lifecycle`] if the widget was already
    /// deactivated, or [`ModuleError::EventBus`] if the initial redraw request
    /// cannot be queued. In the latter case the widget is still active.
    pub fn activate(&mut self, ctx: &ModuleContext) -> Result<(), ModuleError> {
        match self.lifecycle {
            Lifecycle::Active => {
                debug!("clock widget already active, ignoring activation");
                return Ok(());
            }
            Lifecycle::Deactivated => {
                return Err(ModuleError::lifecycle(
                    "clock widget cannot be activated after teardown",
                ));
            }
            Lifecycle::Unready => {}
        }

        self.lifecycle = Lifecycle::Active;
        self.ready = true;
        self.current_instant = self.time_source.now();
        self.ticker = Some(TickerHandle::spawn(
            ctx,
            self.tick_interval,
            ModuleEvent::Clock(Message::Tick),
        ));

        info!("clock widget activated at {}", self.current_instant);

        ctx.request_redraw()?;
        Ok(())
    }

    /// Stop ticking for good. Nothing mutates the time afterwards, and a
    /// widget torn down before activation stays blank.
    pub fn deactivate(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }

        if self.lifecycle != Lifecycle::Deactivated {
            info!("clock widget deactivated while {:?}", self.lifecycle);
            self.lifecycle = Lifecycle::Deactivated;
        }
    }

    /// Resample the time source. Returns `false` when the widget is not active.
    pub fn tick(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Active {
            debug!("dropping clock tick while {:?}", self.lifecycle);
            return false;
        }

        self.current_instant = self.time_source.now();
        true
    }

    /// Switch the hour notation. Returns whether anything changed.
    pub fn select_format(&mut self, format: HourFormat) -> bool {
        if self.hour_format == format {
            return false;
        }

        debug!("clock format changed to {format:?}");
        self.hour_format = format;
        true
    }

    /// Update clock state from GUI message
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick => {
                self.tick();
            }
            Message::SelectFormat(format) => {
                self.select_format(format);
            }
        }
    }

    pub fn view(&self, appearance: &Appearance) -> Element<'_, Message> {
        view::build_clock_view(self.formatted_time(), self.hour_format, appearance)
    }
}

fn checked_tick_interval(millis: u64) -> Duration {
    match NonZeroU64::new(millis) {
        Some(millis) => Duration::from_millis(millis.get()),
        None => {
            let fallback = ClockModuleConfig::default().tick_interval_ms;
            warn!("clock tick interval must be positive, using {fallback} ms");
            Duration::from_millis(fallback)
        }
    }
}

impl Module for ClockWidget {
    type Message = Message;
    type ViewData<'a> = &'a Appearance;

    fn register(&mut self, ctx: &ModuleContext) -> Result<(), ModuleError> {
        self.activate(ctx)
    }

    fn unregister(&mut self) {
        self.deactivate();
    }

    fn view(&self, appearance: Self::ViewData<'_>) -> Element<'_, Message> {
        ClockWidget::view(self, appearance)
    }
}
