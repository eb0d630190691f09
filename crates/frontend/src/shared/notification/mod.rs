//! Transient toast notifications.
//!
//! `NotificationService` is provided through context (see `app.rs`); any
//! component can fire a toast without awaiting it. `NotificationHost` renders
//! the active toasts once, at the application root.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastPosition {
    TopRight,
    TopLeft,
    #[default]
    BottomRight,
    BottomLeft,
}

impl ToastPosition {
    pub fn all() -> [ToastPosition; 4] {
        [
            ToastPosition::TopRight,
            ToastPosition::TopLeft,
            ToastPosition::BottomRight,
            ToastPosition::BottomLeft,
        ]
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "toast-container toast-container--top-right",
            ToastPosition::TopLeft => "toast-container toast-container--top-left",
            ToastPosition::BottomRight => "toast-container toast-container--bottom-right",
            ToastPosition::BottomLeft => "toast-container toast-container--bottom-left",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub auto_close_ms: u32,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::BottomRight,
            auto_close_ms: 2000,
        }
    }
}

impl ToastOptions {
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_auto_close(mut self, ms: u32) -> Self {
        self.auto_close_ms = ms;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub position: ToastPosition,
}

/// Toasts for one screen corner, oldest first
pub fn toasts_at(toasts: &[Toast], position: ToastPosition) -> Vec<Toast> {
    toasts
        .iter()
        .filter(|t| t.position == position)
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>, options: ToastOptions) {
        let id = self.enqueue(message.into(), options.position);
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(options.auto_close_ms).await;
            svc.dismiss(id);
        });
    }

    fn enqueue(&self, message: String, position: ToastPosition) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        log::debug!("toast #{id}: {message}");
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                message,
                position,
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

/// Renders every active toast; mount once near the root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    ToastPosition::all()
        .into_iter()
        .map(|position| {
            view! {
                <div class=position.css_class() role="status" aria-live="polite">
                    <For
                        each=move || svc.toasts.with(|list| toasts_at(list, position))
                        key=|toast| toast.id
                        children=move |toast: Toast| {
                            let id = toast.id;
                            view! {
                                <div class="toast toast--success">
                                    <span class="toast__message">{toast.message}</span>
                                    <button
                                        class="toast__close"
                                        aria-label="Close"
                                        on:click=move |_| svc.dismiss(id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_enqueue_and_dismiss() {
        let owner = Owner::new();
        owner.with(|| {
            let svc = NotificationService::new();
            let first = svc.enqueue("Customer deleted successfully!".into(), ToastPosition::BottomRight);
            let second = svc.enqueue("Saved".into(), ToastPosition::TopLeft);
            assert_ne!(first, second);

            let active = svc.toasts.get_untracked();
            assert_eq!(active.len(), 2);
            assert_eq!(toasts_at(&active, ToastPosition::BottomRight)[0].message, "Customer deleted successfully!");

            svc.dismiss(first);
            let ids: Vec<u64> = svc.toasts.get_untracked().iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![second]);
        });
    }

    #[test]
    fn test_default_options_are_bottom_right_two_seconds() {
        let opts = ToastOptions::default();
        assert_eq!(opts.position, ToastPosition::BottomRight);
        assert_eq!(opts.auto_close_ms, 2000);

        let opts = opts.with_position(ToastPosition::TopLeft).with_auto_close(500);
        assert_eq!(opts.position, ToastPosition::TopLeft);
        assert_eq!(opts.auto_close_ms, 500);
    }

    #[test]
    fn test_toasts_are_grouped_by_position() {
        let toast = |id, position| Toast {
            id,
            message: format!("#{id}"),
            position,
        };
        let list = vec![
            toast(1, ToastPosition::BottomRight),
            toast(2, ToastPosition::TopLeft),
            toast(3, ToastPosition::BottomRight),
        ];
        let ids: Vec<u64> = toasts_at(&list, ToastPosition::BottomRight)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(toasts_at(&list, ToastPosition::BottomLeft).is_empty());
    }
}
