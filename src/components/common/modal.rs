use dioxus::prelude::*;

#[component]
pub fn Modal(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    #[props(default = false)] close_disabled: bool,
    #[props(default = "modal".to_string())] test_id: String,
    #[props(default = "modalCloseBtn".to_string())] close_test_id: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        // Backdrop
        div {
            class: "fixed inset-0 bg-black/50 z-[9998] flex items-center justify-center p-4",
            onclick: move |_| {
                if !close_disabled {
                    on_close.call(());
                }
            },

            // Clicks inside the dialog must not reach the backdrop
            div {
                "data-testid": "{test_id}",
                class: "bg-[var(--color-base-100)] rounded-lg shadow-xl max-w-2xl w-full max-h-[90vh] overflow-auto relative",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-center justify-between px-5 py-3 border-b border-[var(--color-base-300)]",
                    h2 {
                        class: "text-lg font-semibold text-[var(--color-base-content)]",
                        "{title}"
                    }
                    button {
                        "data-testid": "{close_test_id}",
                        class: "p-1 rounded hover:bg-[var(--color-base-300)] disabled:opacity-50",
                        disabled: close_disabled,
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div {
                    class: "p-5",
                    {children}
                }
            }
        }
    }
}
