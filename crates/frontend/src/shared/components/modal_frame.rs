use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Overlay with a titled surface.
///
/// The content stays mounted while hidden so form state and pending reloads
/// survive closing the dialog.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    #[prop(into)] visible: Signal<bool>,
    /// Called on overlay click and on the close button.
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: String,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Only close if both press and release happened on the overlay itself.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Next tick: the handler must not run while its own dispatch is in progress.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };

    view! {
        <div
            class="modal-overlay"
            style:display=move || if visible.get() { "flex" } else { "none" }
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class on:click=move |ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button type="button" class="btn-close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
