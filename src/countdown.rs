use tracing::{debug, info};

use crate::timer::{format_time, Fired, Scheduler, TimerHandle, TimerKind, TICK_MS};

/// Session length in seconds.
pub const COUNTDOWN_SECS: u32 = 300;

/// At or below this many seconds the timer is drawn as a warning.
pub const WARNING_SECS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    Tick(u32),
    Expired,
}

#[derive(Debug)]
pub struct Countdown {
    remaining: u32,
    tick: Option<TimerHandle>,
    expired: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::with_seconds(COUNTDOWN_SECS)
    }

    pub fn with_seconds(secs: u32) -> Self {
        Self {
            remaining: secs.min(COUNTDOWN_SECS),
            tick: None,
            expired: false,
        }
    }

    /// Arms the first tick. A countdown that starts at zero expires here.
    pub fn start(&mut self, scheduler: &mut Scheduler) -> Option<CountdownEvent> {
        if self.expired || self.tick.is_some() {
            return None;
        }
        if self.remaining == 0 {
            self.expired = true;
            info!("countdown started at zero, expired immediately");
            return Some(CountdownEvent::Expired);
        }
        self.tick = Some(scheduler.schedule(TICK_MS, TimerKind::CountdownTick));
        None
    }

    /// Handles the pending tick firing. Each tick re-arms a fresh one-shot
    /// until the count reaches zero.
    pub fn on_tick(&mut self, scheduler: &mut Scheduler) -> Option<CountdownEvent> {
        if self.tick.take().is_none() || self.expired {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
            info!("countdown expired");
            return Some(CountdownEvent::Expired);
        }

        debug!(remaining = self.remaining, "countdown tick");
        self.tick = Some(scheduler.schedule(TICK_MS, TimerKind::CountdownTick));
        Some(CountdownEvent::Tick(self.remaining))
    }

    pub fn owns(&self, fired: &Fired) -> bool {
        self.tick.as_ref().is_some_and(|h| fired.is(h))
    }

    pub fn cancel(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.tick.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn display(&self) -> String {
        format_time(self.remaining)
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    pub fn is_warning(&self) -> bool {
        self.remaining <= WARNING_SECS
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
