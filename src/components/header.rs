use super::common::push_toast;
use crate::state::Services;
use crate::utils::{t, AppRoute, Notice, ToastQueue};
use dioxus::prelude::*;

/// Title bar with an address field, the desktop stand-in for the browser
/// location bar.
#[component]
pub fn Header(route: Signal<AppRoute>) -> Element {
    let services = use_context::<Services>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let mut route = route;
    let mut address = use_signal(|| route.read().to_path());

    // Keep the field in sync with in-app navigation
    use_effect(move || {
        let path = route.read().to_path();
        address.set(path);
    });

    let go = move |evt: FormEvent| {
        evt.prevent_default();
        let typed = address.read().clone();
        match AppRoute::parse(&typed) {
            Some(next) => {
                tracing::debug!(path = %typed, "navigating");
                route.set(next);
            }
            None => push_toast(toasts, &services, Notice::error_key("unknownRoute")),
        }
    };

    let org = route.read().org_id().map(str::to_string);

    rsx! {
        header {
            class: "sticky top-0 z-30 bg-[var(--color-base-200)] border-b border-[var(--color-base-300)]",
            div {
                class: "flex items-center gap-4 h-14 px-4 sm:px-6",

                button {
                    class: "text-lg font-bold text-[var(--color-base-content)] whitespace-nowrap",
                    onclick: move |_| route.set(AppRoute::Home),
                    {t("appTitle")}
                }

                form {
                    class: "flex flex-1 gap-2",
                    onsubmit: go,
                    input {
                        "data-testid": "addressBar",
                        r#type: "text",
                        autocomplete: "off",
                        value: "{address}",
                        placeholder: t("pathPlaceholder"),
                        oninput: move |evt| address.set(evt.value()),
                        class: "flex-1 px-3 py-1.5 rounded-lg font-mono text-sm bg-[var(--color-base-100)] text-[var(--color-base-content)] border border-[var(--color-base-300)] focus:outline-none focus:ring-2 focus:ring-[var(--color-primary)]",
                    }
                    button {
                        r#type: "submit",
                        class: "px-3 py-1.5 rounded-lg bg-[var(--color-primary)] text-[var(--color-primary-content)] text-sm",
                        {t("go")}
                    }
                }

                if let Some(org_id) = org {
                    nav {
                        class: "flex gap-2 text-sm",
                        button {
                            class: "px-3 py-1.5 rounded-lg hover:bg-[var(--color-base-300)]",
                            onclick: {
                                let org_id = org_id.clone();
                                move |_| route.set(AppRoute::OrgTags { org_id: org_id.clone() })
                            },
                            {t("tags")}
                        }
                        button {
                            class: "px-3 py-1.5 rounded-lg hover:bg-[var(--color-base-300)]",
                            onclick: move |_| route.set(AppRoute::Chat { org_id: org_id.clone() }),
                            {t("chat")}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center h-full px-4 py-6 text-center",
            h1 {
                class: "text-2xl font-bold text-[var(--color-base-content)] mb-2",
                {t("home")}
            }
            p {
                class: "text-sm text-[var(--color-base-content)]/70 max-w-md",
                {t("homeHint")}
            }
        }
    }
}
