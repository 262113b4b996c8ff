//! Toast notification banner.
//!
//! One banner per page. A new message replaces the current one and reveals
//! the banner; there is no queue.

use leptos::prelude::*;

use crate::shared::icons::icon;

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    pub message: RwSignal<String>,
    pub visible: RwSignal<bool>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
        }
    }

    pub fn hide(&self) {
        self.visible.set(false);
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        self.message.set(message.to_string());
        self.visible.set(true);
    }
}

#[component]
pub fn ToastBanner(notifier: ToastNotifier) -> impl IntoView {
    let visible = notifier.visible;
    let message = notifier.message;

    view! {
        <div
            id="toast_notification"
            class=move || if visible.get() { "toast show" } else { "toast hide" }
            role="alert"
            aria-live="assertive"
        >
            <div class="toast-header">
                <button class="btn-close" title="Close" on:click=move |_| notifier.hide()>
                    {icon("x")}
                </button>
            </div>
            <div class="toast-body">{move || message.get()}</div>
        </div>
    }
}
