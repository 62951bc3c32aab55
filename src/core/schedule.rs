//! Deferred work and navigation, abstracted from the browser.

use std::sync::Arc;
use std::time::Duration;

use super::lifecycle::Lifecycle;
pub use super::lifecycle::TaskHandle;

/// Runs callbacks after a delay.
pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay` unless the handle is cancelled first.
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> TaskHandle;

    /// Run `task` after `initial`, then every `every`, until cancelled.
    fn schedule_repeating(
        &self,
        initial: Duration,
        every: Duration,
        task: Arc<dyn Fn() + Send + Sync>,
    ) -> TaskHandle;
}

/// Moves the application to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Call `show` once after `delay` and then every `interval`, both counted
/// from now. The timers belong to `lifecycle` and stop when it is disposed.
pub fn schedule_popup(
    scheduler: &dyn Scheduler,
    lifecycle: &Lifecycle,
    delay: Duration,
    interval: Duration,
    show: Arc<dyn Fn() + Send + Sync>,
) {
    let first = show.clone();
    lifecycle.adopt(scheduler.schedule_once(delay, Box::new(move || first())));
    lifecycle.adopt(scheduler.schedule_repeating(interval, interval, show));
}

#[cfg(test)]
pub use manual::{ManualScheduler, RecordingNavigator};
