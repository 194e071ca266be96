use crate::utils::t;
use dioxus::prelude::*;

#[component]
pub fn Loader(#[props(default = "loading".to_string())] message_key: String) -> Element {
    rsx! {
        div {
            "data-testid": "spinner",
            class: "flex items-center justify-center gap-2 py-8 text-[var(--color-base-content)]/70",
            span { class: "inline-block w-4 h-4 rounded-full border-2 border-[var(--color-primary)] border-t-transparent animate-spin" }
            span { class: "text-sm", {t(&message_key)} }
        }
    }
}
