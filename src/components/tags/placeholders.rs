use crate::utils::{t, AppRoute};
use dioxus::prelude::*;

/// Stand-in for screens owned by other parts of the platform (organization
/// tag list, tag management). Shows where the user landed and offers a way
/// back into the sub-tags browser.
#[component]
pub fn ExternalScreen(
    title_key: String,
    test_id: String,
    #[props(!optional)] back: Option<AppRoute>,
) -> Element {
    let mut route = use_context::<Signal<AppRoute>>();
    let path = route.read().to_path();

    rsx! {
        div {
            "data-testid": "{test_id}",
            class: "flex flex-col items-center justify-center h-full gap-3 p-6",
            h1 {
                class: "text-2xl font-bold text-[var(--color-base-content)]",
                {t(&title_key)}
            }
            code {
                class: "text-sm text-[var(--color-base-content)]/60",
                "{path}"
            }
            if let Some(back) = back {
                button {
                    class: "px-4 py-2 rounded-lg bg-[var(--color-primary)] text-[var(--color-primary-content)]",
                    onclick: move |_| route.set(back.clone()),
                    {t("subTags")}
                }
            }
        }
    }
}
