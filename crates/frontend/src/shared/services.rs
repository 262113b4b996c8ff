use std::sync::Arc;
use std::time::Duration;

use crate::shared::browser::Browser;
use crate::shared::config::ConsoleConfig;
use crate::shared::http::{ApiError, HttpClient};
use crate::shared::notification::Notifier;
use crate::shared::scheduler::{ScheduledTask, Scheduler};

/// Capabilities injected into every view-model.
#[derive(Clone)]
pub struct ConsoleServices {
    pub http: Arc<dyn HttpClient>,
    pub notifier: Arc<dyn Notifier>,
    pub browser: Arc<dyn Browser>,
    pub scheduler: Arc<dyn Scheduler>,
    pub config: Arc<ConsoleConfig>,
}

impl ConsoleServices {
    pub fn new(
        http: Arc<dyn HttpClient>,
        notifier: Arc<dyn Notifier>,
        browser: Arc<dyn Browser>,
        scheduler: Arc<dyn Scheduler>,
        config: ConsoleConfig,
    ) -> Self {
        Self {
            http,
            notifier,
            browser,
            scheduler,
            config: Arc::new(config),
        }
    }

    pub fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    /// Log a failed request and show its user-facing message.
    pub fn notify_error(&self, context: &str, err: &ApiError) {
        log::warn!("{}: {}", context, err);
        self.notifier
            .notify(&err.user_message(&self.config.messages));
    }

    pub fn schedule_reload(&self, delay: Duration) -> ScheduledTask {
        let browser = self.browser.clone();
        self.scheduler
            .schedule(delay, Box::new(move || browser.reload()))
    }
}
