//! Cancellable delayed tasks.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between a success toast and the page reload that follows it,
/// long enough for the toast to be read.
pub const RELOAD_DELAY: Duration = Duration::from_millis(2000);

/// Handle to a scheduled task. Dropping the handle cancels the task.
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> ScheduledTask;
}

/// `setTimeout` backed scheduler.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> ScheduledTask {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, task);
        // Dropping a `Timeout` clears it.
        ScheduledTask::new(move || drop(timeout))
    }
}

/// Slot holding at most one pending task for a view-model.
///
/// Replacing the task cancels the previous one; [`PendingTask::cancel`] is
/// called when the owning view is torn down.
#[derive(Clone, Copy)]
pub struct PendingTask {
    slot: StoredValue<Option<ScheduledTask>, LocalStorage>,
}

impl PendingTask {
    pub fn new() -> Self {
        Self {
            slot: StoredValue::new_local(None),
        }
    }

    pub fn replace(&self, task: ScheduledTask) {
        self.slot.set_value(Some(task));
    }

    pub fn cancel(&self) {
        if let Some(task) = self.slot.try_update_value(Option::take).flatten() {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.with_value(Option::is_some)
    }
}

impl Default for PendingTask {
    fn default() -> Self {
        Self::new()
    }
}
