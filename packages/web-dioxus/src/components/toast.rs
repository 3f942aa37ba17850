//! Toast notifications

use std::time::Duration;

use dioxus::prelude::*;

use crate::registration::Notice;
use crate::timing::sleep;

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Toast queue shared by the whole app
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    /// Show a notice and dismiss it after [`TOAST_LIFETIME`]
    pub fn push(mut self, notice: Notice) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast { id, notice });

        // Outlive the component that raised the notice
        spawn_forever(async move {
            sleep(TOAST_LIFETIME).await;
            self.dismiss(id);
        });
    }

    pub fn dismiss(mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

/// Toast provider component that wraps the app
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);

    let context = use_context_provider(|| ToastContext { toasts, next_id });

    rsx! {
        {children}

        div {
            class: "fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: "bg-white border border-gray-200 shadow-lg rounded-lg p-4 flex items-start justify-between gap-4",
                    div {
                        p { class: "text-sm font-semibold text-gray-900", "{toast.notice.title}" }
                        p { class: "text-sm text-gray-600 mt-1", "{toast.notice.description}" }
                    }
                    button {
                        class: "text-gray-400 hover:text-gray-600 text-sm",
                        onclick: move |_| context.dismiss(toast.id),
                        "\u{2715}"
                    }
                }
            }
        }
    }
}

/// Hook to access the toast context
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
}
