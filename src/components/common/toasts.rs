use crate::state::Services;
use crate::utils::{Notice, ToastKind, ToastQueue};
use dioxus::prelude::*;

/// Queues a toast and removes it again after the configured timeout.
pub fn push_toast(mut toasts: Signal<ToastQueue>, services: &Services, notice: Notice) {
    let id = toasts.write().push(notice);
    let timeout = services.settings.toast_timeout();
    spawn(async move {
        tokio::time::sleep(timeout).await;
        toasts.write().dismiss(id);
    });
}

#[component]
pub fn Toasts(mut toasts: Signal<ToastQueue>) -> Element {
    rsx! {
        div {
            class: "fixed top-4 right-4 z-[9999] flex flex-col gap-2 w-80",
            for toast in toasts.read().toasts().iter().cloned() {
                div {
                    key: "{toast.id}",
                    "data-testid": if toast.kind == ToastKind::Success { "toastSuccess" } else { "toastError" },
                    class: "flex items-start justify-between gap-3 px-4 py-3 rounded-lg shadow-lg text-sm",
                    class: if toast.kind == ToastKind::Success {
                        "bg-green-600 text-white"
                    } else {
                        "bg-red-600 text-white"
                    },
                    span { "{toast.message}" }
                    button {
                        class: "opacity-80 hover:opacity-100",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    }
}
