use crate::state::breadcrumbs;
use crate::utils::{AppRoute, TagAncestor};
use dioxus::prelude::*;

#[component]
pub fn Breadcrumbs(org_id: String, ancestors: Vec<TagAncestor>, on_navigate: EventHandler<AppRoute>) -> Element {
    let crumbs = breadcrumbs(&org_id, &ancestors);

    rsx! {
        nav {
            class: "flex flex-wrap items-center gap-1 text-sm mb-4",
            for (index, crumb) in crumbs.into_iter().enumerate() {
                if index > 0 {
                    span { class: "text-[var(--color-base-content)]/50", "›" }
                }
                if index == 0 {
                    button {
                        "data-testid": "allTagsBtn",
                        class: "font-medium text-[var(--color-primary)] hover:underline",
                        onclick: move |_| on_navigate.call(crumb.route.clone()),
                        "{crumb.label}"
                    }
                } else if crumb.is_current {
                    span {
                        class: "font-semibold text-[var(--color-base-content)]",
                        "{crumb.label}"
                    }
                } else {
                    button {
                        "data-testid": "redirectToSubTags",
                        class: "text-[var(--color-primary)] hover:underline",
                        onclick: move |_| on_navigate.call(crumb.route.clone()),
                        "{crumb.label}"
                    }
                }
            }
        }
    }
}
