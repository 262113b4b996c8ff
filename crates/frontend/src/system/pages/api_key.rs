//! API key panel: reveal the current key and rotate it.

use contracts::system::api_key::ApiKeyResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Value};

use crate::shared::config::{required, ConfigError};
use crate::shared::http::ApiError;
use crate::shared::icons::icon;
use crate::shared::services::ConsoleServices;

pub const MASKED_API_KEY: &str = "*********************";

#[derive(Clone)]
pub struct ApiKeyVm {
    pub api_key: RwSignal<String>,
    pub is_in_progress: RwSignal<bool>,
    fetch_url: String,
    rotate_url: String,
    services: ConsoleServices,
}

impl ApiKeyVm {
    pub fn new(services: &ConsoleServices) -> Result<Self, ConfigError> {
        let endpoints = &services.config.endpoints;
        Ok(Self {
            api_key: RwSignal::new(MASKED_API_KEY.to_string()),
            is_in_progress: RwSignal::new(false),
            fetch_url: required(&endpoints.fetch_api_key_endpoint, "fetch_api_key_endpoint")?,
            rotate_url: required(&endpoints.rotate_api_key_endpoint, "rotate_api_key_endpoint")?,
            services: services.clone(),
        })
    }

    /// Replace the mask with the current key. Concurrent calls are not
    /// deduplicated; the last response wins.
    pub async fn show(&self) {
        let result = self.services.http.get(&self.fetch_url).await;
        self.accept(result, "fetching api key");
    }

    pub async fn rotate(&self) {
        if self.is_in_progress.get_untracked() {
            log::debug!("api key rotation already in flight");
            return;
        }
        self.is_in_progress.set(true);
        let result = self.services.http.put(&self.rotate_url, &json!({})).await;
        self.accept(result, "rotating api key");
        self.is_in_progress.set(false);
    }

    pub fn show_action(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.show().await });
    }

    pub fn rotate_action(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.rotate().await });
    }

    fn accept(&self, result: Result<Value, ApiError>, context: &str) {
        let decoded = result
            .and_then(|body| serde_json::from_value::<ApiKeyResponse>(body).map_err(ApiError::from));
        match decoded {
            Ok(body) => self.api_key.set(body.api_key),
            Err(err) => self.services.notify_error(context, &err),
        }
    }
}

#[component]
pub fn ApiKeyPanel(vm: ApiKeyVm) -> impl IntoView {
    let is_in_progress = vm.is_in_progress;
    let api_key = vm.api_key;
    let show_vm = vm.clone();
    let rotate_vm = vm;

    view! {
        <div class="card">
            <h4 class="card-title">"API Key"</h4>
            <div class="input-group">
                <input type="text" class="form-control" readonly prop:value=move || api_key.get() />
            </div>
            <div class="button-row">
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        show_vm.show_action();
                    }
                >
                    {icon("key")}
                    <span>"Show"</span>
                </button>
                <button
                    type="button"
                    class="btn btn-primary"
                    prop:disabled=move || is_in_progress.get()
                    on:click=move |ev| {
                        ev.prevent_default();
                        rotate_vm.rotate_action();
                    }
                >
                    {icon("refresh")}
                    <span>"Rotate"</span>
                </button>
            </div>
        </div>
    }
}
