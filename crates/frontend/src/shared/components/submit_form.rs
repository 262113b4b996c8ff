use leptos::ev::SubmitEvent;
use leptos::html::Form;
use leptos::prelude::*;

use crate::shared::form::{DomFormReader, FormReader};
use crate::shared::form_submit::FormSubmitVm;

/// `<form>` wired to a [`FormSubmitVm`].
///
/// The submit button is disabled while the view-model is submitting. A form
/// without a target URL (`action` is `None`) does not submit.
#[component]
pub fn SubmitForm(
    vm: FormSubmitVm,
    #[prop(into)] action: Signal<Option<String>>,
    #[prop(into)] submit_label: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let form_ref = NodeRef::<Form>::new();
    let in_progress = vm.is_in_progress;

    let cleanup_vm = vm.clone();
    on_cleanup(move || cleanup_vm.teardown());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(url) = action.get_untracked() else {
            log::warn!("form submitted without a target");
            return;
        };
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        vm.submit_action(url, DomFormReader::new(form).read());
    };

    view! {
        <form class=class node_ref=form_ref on:submit=on_submit>
            {children()}
            <button type="submit" class="btn btn-primary" disabled=move || in_progress.get()>
                {move || if in_progress.get() { "Please wait...".to_string() } else { submit_label.clone() }}
            </button>
        </form>
    }
}
