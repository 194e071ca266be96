use crate::utils::{t, AppError};
use dioxus::prelude::*;

/// Full-width error state used when a screen query fails.
#[component]
pub fn ErrorPanel(
    message_key: String,
    error: AppError,
    #[props(!optional)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            "data-testid": "errorPanel",
            class: "m-6 p-6 rounded-lg border border-red-500/50 bg-red-500/10 text-center",
            p {
                class: "font-semibold text-red-500",
                {t(&message_key)}
            }
            p {
                class: "mt-2 text-sm text-[var(--color-base-content)]/70",
                "{error}"
            }
            if let Some(on_retry) = on_retry {
                button {
                    "data-testid": "retryBtn",
                    class: "mt-5 px-4 py-2 rounded-lg bg-[var(--color-primary)] text-[var(--color-primary-content)]",
                    onclick: move |_| on_retry.call(()),
                    {t("retry")}
                }
            }
        }
    }
}
