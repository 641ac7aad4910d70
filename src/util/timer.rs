//! One-shot delayed callbacks.

use std::time::Duration;

/// Deferred work scheduled by a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send>;

/// Runs a task once after a delay. Scheduled tasks are never cancelled;
/// a task must tolerate its target having gone away.
pub trait Scheduler: Send + Sync {
    fn after(&self, delay: Duration, task: Task);
}

/// `setTimeout`-backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Task) {
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, task).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no timer backend; dropping task scheduled in {delay:?}");
            drop(task);
        }
    }
}
