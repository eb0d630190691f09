use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use leptos::prelude::window_event_listener;

fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Modal yes/no dialog gating a destructive action.
///
/// Stays mounted and renders nothing while `is_open` is false. Overlay click,
/// the close button and the Escape key all count as cancel.
#[component]
pub fn ConfirmationModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirm".to_string());
    let cancel_label = cancel_label.unwrap_or_else(|| "Cancel".to_string());

    let escape_listener = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if is_escape(&event.key()) && is_open.get_untracked() {
            on_cancel.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div
                    class="modal modal--confirm"
                    role="alertdialog"
                    aria-modal="true"
                    on:click=stop_propagation
                >
                    <div class="modal-header">
                        <h2 class="modal-title">{title.clone()}</h2>
                        <button class="button button--icon modal__close" on:click=move |_| on_cancel.run(())>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        <p class="modal-message">{message.clone()}</p>
                    </div>
                    <div class="modal-footer">
                        <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                            {cancel_label.clone()}
                        </button>
                        <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
