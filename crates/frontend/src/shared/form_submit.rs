//! Form-submit view-model.
//!
//! Idle → Submitting on submit, then back to Idle on failure or on an
//! in-place success. Successes that reload the page stay Submitting until the
//! page goes away.

use std::time::Duration;

use contracts::shared::messages::SuccessBody;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::form::FormInputs;
use crate::shared::scheduler::PendingTask;
use crate::shared::services::ConsoleServices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessMessage {
    /// `successMessage` from the response body.
    FromServer,
    Fixed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSuccess {
    ReloadNow,
    ReloadAfter(Duration),
    StayInPlace,
}

#[derive(Clone)]
pub struct FormSubmitVm {
    pub is_in_progress: RwSignal<bool>,
    method: SubmitMethod,
    message: SuccessMessage,
    after: AfterSuccess,
    services: ConsoleServices,
    pending_reload: PendingTask,
}

impl FormSubmitVm {
    pub fn new(
        services: ConsoleServices,
        method: SubmitMethod,
        message: SuccessMessage,
        after: AfterSuccess,
    ) -> Self {
        Self {
            is_in_progress: RwSignal::new(false),
            method,
            message,
            after,
            services,
            pending_reload: PendingTask::new(),
        }
    }

    /// Send `inputs` to `url`. Ignored while a previous submit is in flight.
    pub async fn submit(&self, url: &str, inputs: FormInputs) {
        if self.is_in_progress.get_untracked() {
            log::debug!("submit to {} ignored, previous request still in flight", url);
            return;
        }
        self.is_in_progress.set(true);

        let body = inputs.to_json();
        let http = &self.services.http;
        let result = match self.method {
            SubmitMethod::Post => http.post(url, &body).await,
            SubmitMethod::Put => http.put(url, &body).await,
        };

        match result {
            Ok(response) => self.on_success(&response),
            Err(err) => {
                self.is_in_progress.set(false);
                self.services
                    .notify_error(&format!("submit to {} failed", url), &err);
            }
        }
    }

    pub fn submit_action(&self, url: String, inputs: FormInputs) {
        let vm = self.clone();
        spawn_local(async move {
            vm.submit(&url, inputs).await;
        });
    }

    /// Cancel a pending delayed reload.
    pub fn teardown(&self) {
        self.pending_reload.cancel();
    }

    pub fn has_pending_reload(&self) -> bool {
        self.pending_reload.is_pending()
    }

    fn on_success(&self, response: &Value) {
        let message = match &self.message {
            SuccessMessage::Fixed(text) => text.clone(),
            SuccessMessage::FromServer => SuccessBody::deserialize(response)
                .ok()
                .and_then(|body| body.success_message)
                .unwrap_or_else(|| self.services.config.messages.operation_succeeded_message.clone()),
        };
        self.services.notify(&message);

        match self.after {
            AfterSuccess::ReloadNow => self.services.browser.reload(),
            AfterSuccess::ReloadAfter(delay) => {
                self.pending_reload
                    .replace(self.services.schedule_reload(delay));
            }
            AfterSuccess::StayInPlace => self.is_in_progress.set(false),
        }
    }
}

/// Form-submit view-model bound to a fixed endpoint.
#[derive(Clone)]
pub struct PageForm {
    pub vm: FormSubmitVm,
    pub action: String,
}

impl PageForm {
    pub async fn submit(&self, inputs: FormInputs) {
        self.vm.submit(&self.action, inputs).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::ApiError;
    use crate::shared::scheduler::RELOAD_DELAY;
    use crate::shared::testing::Harness;
    use futures::executor::block_on;
    use serde_json::json;

    fn inputs() -> FormInputs {
        [("name", "Joe"), ("email", "joe@example.com")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_flag_set_before_request_and_cleared_on_failure() {
        let h = Harness::new();
        let vm = FormSubmitVm::new(
            h.services.clone(),
            SubmitMethod::Post,
            SuccessMessage::FromServer,
            AfterSuccess::ReloadNow,
        );
        let flag = vm.is_in_progress;
        h.http.set_probe(move || flag.get_untracked());
        h.http.reject(400, "Invalid email");

        block_on(vm.submit("/api/v1/user", inputs()));

        assert_eq!(h.http.probed(), vec![true]);
        assert!(!vm.is_in_progress.get_untracked());
        assert_eq!(h.notifier.messages(), vec!["Invalid email".to_string()]);
        assert_eq!(h.browser.reloads(), 0);
    }

    #[test]
    fn test_body_is_form_json() {
        let h = Harness::new();
        let vm = FormSubmitVm::new(
            h.services.clone(),
            SubmitMethod::Put,
            SuccessMessage::FromServer,
            AfterSuccess::StayInPlace,
        );
        h.http.respond_ok(json!({"successMessage": "Profile updated"}));

        block_on(vm.submit("/api/v1/action/profile", inputs()));

        let calls = h.http.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "PUT");
        assert_eq!(
            calls[0].body,
            Some(json!({"name": "Joe", "email": "joe@example.com"}))
        );
    }

    #[test]
    fn test_server_message_then_reload_now() {
        let h = Harness::new();
        let vm = FormSubmitVm::new(
            h.services.clone(),
            SubmitMethod::Post,
            SuccessMessage::FromServer,
            AfterSuccess::ReloadNow,
        );
        h.http.respond_ok(json!({"successMessage": "ok"}));

        block_on(vm.submit("/api/v1/action/auth", inputs()));

        assert_eq!(h.notifier.messages(), vec!["ok".to_string()]);
        assert_eq!(h.browser.reloads(), 1);
        assert!(h.scheduler.delays().is_empty());
    }

    #[test]
    fn test_delayed_reload_waits_for_timer() {
        let h = Harness::new();
        let vm = FormSubmitVm::new(
            h.services.clone(),
            SubmitMethod::Post,
            SuccessMessage::Fixed("User created".into()),
            AfterSuccess::ReloadAfter(RELOAD_DELAY),
        );
        h.http.respond_ok(json!({"successMessage": "ignored"}));

        block_on(vm.submit("/api/v1/user", inputs()));

        assert_eq!(h.notifier.messages(), vec!["User created".to_string()]);
        assert_eq!(h.scheduler.delays(), vec![Duration::from_millis(2000)]);
        assert_eq!(h.browser.reloads(), 0);
        assert!(vm.has_pending_reload());

        h.scheduler.fire_all();
        assert_eq!(h.browser.reloads(), 1);
    }

    #[test]
    fn test_teardown_cancels_delayed_reload() {
        let h = Harness::new();
        let vm = FormSubmitVm::new(
            h.services.clone(),
            SubmitMethod::Put,
            SuccessMessage::Fixed("Team updated".into()),
            AfterSuccess::ReloadAfter(RELOAD_DELAY),
        );
        h.http.respond_ok(json!({}));

        block_on(vm.submit("/api/v1/team/t-1", inputs()));
        vm.teardown();
        h.scheduler.fire_all();

        assert_eq!(h.scheduler.cancelled(), vec![true]);
        assert_eq!(h.browser.reloads(), 0);
        assert!(!vm.has_pending_reload());
    }

    #[test]
    fn test_in_place_success_returns_to_idle() {
        let h = Harness::new();
        let vm = FormSubmitVm::new(
            h.services.clone(),
            SubmitMethod::Put,
            SuccessMessage::FromServer,
            AfterSuccess::StayInPlace,
        );
        h.http.respond_ok(json!({}));

        block_on(vm.submit("/api/v1/action/settings", inputs()));

        assert!(!vm.is_in_progress.get_untracked());
        assert_eq!(
            h.notifier.messages(),
            vec![h.messages().operation_succeeded_message.clone()]
        );
        assert_eq!(h.browser.reloads(), 0);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let h = Harness::new();
        let vm = FormSubmitVm::new(
            h.services.clone(),
            SubmitMethod::Post,
            SuccessMessage::FromServer,
            AfterSuccess::ReloadNow,
        );
        vm.is_in_progress.set(true);

        block_on(vm.submit("/api/v1/action/install", inputs()));

        assert!(h.http.calls().is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_transport_failure_is_reported() {
        let h = Harness::new();
        let vm = FormSubmitVm::new(
            h.services.clone(),
            SubmitMethod::Post,
            SuccessMessage::FromServer,
            AfterSuccess::ReloadNow,
        );
        h.http
            .respond(Err(ApiError::Network("connection reset".into())));

        block_on(vm.submit("/api/v1/action/auth", inputs()));

        assert!(!vm.is_in_progress.get_untracked());
        assert_eq!(
            h.notifier.messages(),
            vec![h.messages().network_error_message.clone()]
        );
    }
}
