//! Countdown display and the cancellable tick source behind it

use std::ops::ControlFlow;
use std::time::Duration;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Callback run on every tick; `Break` stops the ticker
pub type TickFn = Box<dyn FnMut() -> ControlFlow<()> + 'static>;

/// Something that can run a callback periodically until told to stop
pub trait Scheduler {
    type Handle;

    /// Start calling `tick` every `period`, first call after one period
    fn every(&self, period: Duration, tick: TickFn) -> Self::Handle;

    /// Stop a schedule started by [`Scheduler::every`]
    fn cancel(&self, handle: Self::Handle);
}

/// Owns at most one running schedule.
///
/// Starting a new schedule cancels the previous one, and dropping the
/// ticker cancels whatever is running.
pub struct Ticker<S: Scheduler> {
    scheduler: S,
    active: Option<S::Handle>,
}

impl<S: Scheduler> Ticker<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            active: None,
        }
    }

    pub fn start(&mut self, tick: impl FnMut() -> ControlFlow<()> + 'static) {
        self.stop();
        self.active = Some(self.scheduler.every(TICK_PERIOD, Box::new(tick)));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl<S: Scheduler> Drop for Ticker<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Render seconds as `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
