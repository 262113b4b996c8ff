//! In-memory stand-ins for the injected capabilities.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::shared::browser::Browser;
use crate::shared::config::{ConsoleConfig, Endpoints, Messages};
use crate::shared::http::{ApiError, HttpClient};
use crate::shared::notification::Notifier;
use crate::shared::scheduler::{ScheduledTask, Scheduler};
use crate::shared::services::ConsoleServices;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

type Probe = Box<dyn Fn() -> bool + Send>;

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct FakeHttp {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    probe: Mutex<Option<Probe>>,
    probed: Mutex<Vec<bool>>,
}

impl FakeHttp {
    pub fn respond(&self, response: Result<Value, ApiError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn respond_ok(&self, body: Value) {
        self.respond(Ok(body));
    }

    pub fn reject(&self, status: u16, message: &str) {
        self.respond(Err(ApiError::Rejected {
            status,
            message: Some(message.to_string()),
        }));
    }

    /// Evaluated when each request is issued; see [`FakeHttp::probed`].
    pub fn set_probe(&self, probe: impl Fn() -> bool + Send + 'static) {
        *self.probe.lock().unwrap() = Some(Box::new(probe));
    }

    pub fn probed(&self) -> Vec<bool> {
        self.probed.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.url).collect()
    }

    fn record(&self, method: &'static str, url: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        if let Some(probe) = self.probe.lock().unwrap().as_ref() {
            self.probed.lock().unwrap().push(probe());
        }
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
    }
}

#[async_trait(?Send)]
impl HttpClient for FakeHttp {
    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.record("GET", url, None)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.record("POST", url, Some(body))
    }

    async fn put(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.record("PUT", url, Some(body))
    }

    async fn delete(&self, url: &str) -> Result<Value, ApiError> {
        self.record("DELETE", url, None)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct FakeBrowser {
    answer: AtomicBool,
    prompts: Mutex<Vec<String>>,
    reloads: AtomicUsize,
}

impl Default for FakeBrowser {
    fn default() -> Self {
        Self {
            answer: AtomicBool::new(true),
            prompts: Mutex::new(Vec::new()),
            reloads: AtomicUsize::new(0),
        }
    }
}

impl FakeBrowser {
    pub fn answer_confirm(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl Browser for FakeBrowser {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

struct Job {
    delay: Duration,
    task: Option<Box<dyn FnOnce() + Send>>,
    cancelled: Arc<AtomicBool>,
}

/// Holds scheduled tasks until the test fires them.
#[derive(Default)]
pub struct ManualScheduler {
    jobs: Mutex<Vec<Job>>,
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<Duration> {
        self.jobs.lock().unwrap().iter().map(|j| j.delay).collect()
    }

    pub fn cancelled(&self) -> Vec<bool> {
        self.jobs
            .lock()
            .unwrap()
            .iter()
            .map(|j| j.cancelled.load(Ordering::SeqCst))
            .collect()
    }

    /// Run every task that has not been cancelled, as if its timer elapsed.
    pub fn fire_all(&self) {
        let tasks: Vec<_> = self
            .jobs
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|j| !j.cancelled.load(Ordering::SeqCst))
            .filter_map(|j| j.task.take())
            .collect();
        for task in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) -> ScheduledTask {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.jobs.lock().unwrap().push(Job {
            delay,
            task: Some(task),
            cancelled: cancelled.clone(),
        });
        ScheduledTask::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}

pub fn test_config() -> ConsoleConfig {
    let endpoint = |url: &str| Some(url.to_string());
    ConsoleConfig {
        endpoints: Endpoints {
            install_endpoint: endpoint("/api/v1/action/install"),
            login_endpoint: endpoint("/api/v1/action/auth"),
            settings_endpoint: endpoint("/api/v1/action/settings"),
            profile_endpoint: endpoint("/api/v1/action/profile"),
            fetch_api_key_endpoint: endpoint("/api/v1/action/api_key"),
            rotate_api_key_endpoint: endpoint("/api/v1/action/api_key/rotate"),
            users_endpoint: endpoint("/api/v1/user"),
            create_user_endpoint: endpoint("/api/v1/user"),
            user_endpoint: endpoint("/api/v1/user/{id}"),
            delete_user_endpoint: endpoint("/api/v1/user/{id}"),
            teams_endpoint: endpoint("/api/v1/team"),
            create_team_endpoint: endpoint("/api/v1/team"),
            team_endpoint: endpoint("/api/v1/team/{id}"),
            delete_team_endpoint: endpoint("/api/v1/team/{id}"),
        },
        messages: Messages::default(),
    }
}

/// Services wired to fakes, with handles kept for assertions.
pub struct Harness {
    pub http: Arc<FakeHttp>,
    pub notifier: Arc<RecordingNotifier>,
    pub browser: Arc<FakeBrowser>,
    pub scheduler: Arc<ManualScheduler>,
    pub services: ConsoleServices,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: ConsoleConfig) -> Self {
        let http = Arc::new(FakeHttp::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let browser = Arc::new(FakeBrowser::default());
        let scheduler = Arc::new(ManualScheduler::default());
        let services = ConsoleServices::new(
            http.clone(),
            notifier.clone(),
            browser.clone(),
            scheduler.clone(),
            config,
        );
        Self {
            http,
            notifier,
            browser,
            scheduler,
            services,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.services.config.messages
    }
}
