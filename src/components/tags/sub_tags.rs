use super::super::common::{push_toast, ErrorPanel, Loader};
use super::{AddSubTagModal, Breadcrumbs};
use crate::state::{AddSubTagForm, Services, SubTagsScreen, SubTagsState};
use crate::utils::{t, AppError, AppRoute, Notice, ToastQueue};
use dioxus::prelude::*;

// Distance from the bottom of the list, in pixels, at which the next page
// is requested.
const SCROLL_THRESHOLD: f64 = 48.0;

fn near_bottom(scroll_top: f64, scroll_height: f64, client_height: f64) -> bool {
    scroll_height - client_height - scroll_top <= SCROLL_THRESHOLD
}

/// Switches the screen to `tag` and loads its first page and ancestors.
fn start_load(mut screen: Signal<SubTagsScreen>, services: &Services, tag: String) {
    let generation = screen.write().navigate(tag.clone());
    let controller = services.sub_tags();
    spawn(async move {
        if let Some(state) = controller.load(&tag).await {
            screen.write().apply_load(&tag, generation, state);
        }
    });
}

#[component]
pub fn SubTags(org_id: ReadSignal<String>, tag_id: ReadSignal<String>) -> Element {
    let services = use_context::<Services>();
    let mut route = use_context::<Signal<AppRoute>>();
    let toasts = use_context::<Signal<ToastQueue>>();

    let mut screen = use_signal(|| SubTagsScreen::new(tag_id()));
    let mut form = use_signal(AddSubTagForm::default);

    // (Re)load children and ancestors whenever the tag changes
    let load_services = services.clone();
    use_effect(move || start_load(screen, &load_services, tag_id()));

    let retry_services = services.clone();
    let retry = move || {
        let tag = screen.read().tag_id().to_string();
        start_load(screen, &retry_services, tag);
    };

    let more_services = services.clone();
    let mut fetch_more = move || {
        let Some(ticket) = screen.write().begin_fetch_more() else {
            return;
        };
        let services = more_services.clone();
        spawn(async move {
            match services.sub_tags().fetch_more(&ticket).await {
                Some(result) => {
                    let notice = screen.write().apply_more(&ticket, result);
                    if let Some(notice) = notice {
                        push_toast(toasts, &services, notice);
                    }
                }
                None => screen.write().release_fetch_more(&ticket),
            }
        });
    };

    let submit_services = services.clone();
    let submit_tag = move |_| {
        let name = match form.write().begin_submit() {
            Ok(name) => name,
            Err(AppError::EmptyTagName) => {
                push_toast(toasts, &submit_services, Notice::error_key("enterTagName"));
                return;
            }
            Err(e) => {
                tracing::debug!(error = %e, "ignoring submit");
                return;
            }
        };
        let org = org_id();
        let parent = screen.read().tag_id().to_string();
        let services = submit_services.clone();
        spawn(async move {
            let controller = services.sub_tags();
            let Some(result) = controller.create_sub_tag(&org, &parent, &name).await else {
                form.write().abort_submit();
                return;
            };
            let notice = form.write().finish_submit(&result);
            let created = result.is_ok();
            push_toast(toasts, &services, notice);

            // Skip the reload if the user has already moved to another tag
            let refreshed = if created { screen.write().refresh(&parent) } else { None };
            if let Some(generation) = refreshed {
                if let Some(state) = controller.load(&parent).await {
                    screen.write().apply_load(&parent, generation, state);
                }
            }
        });
    };

    let mut navigate = move |next: AppRoute| {
        route.set(next);
    };

    let current_tag = screen.read().tag_id().to_string();
    let org = org_id();
    let state = screen.read().state().clone();
    let fetching_more = screen.read().is_fetching_more();
    let can_fetch_more = screen.read().can_fetch_more();
    let mut scroll_fetch = fetch_more.clone();

    // Failed loads offer a retry of the same tag and a way back to all tags
    let error_view = |message_key: &str, error: AppError| {
        let all_tags = AppRoute::OrgTags { org_id: org.clone() };
        let retry = retry.clone();
        rsx! {
            ErrorPanel {
                message_key: message_key.to_string(),
                error,
                on_retry: Some(EventHandler::new(move |_| retry())),
            }
            div {
                class: "flex justify-center",
                button {
                    "data-testid": "allTagsBtn",
                    class: "text-[var(--color-primary)] hover:underline",
                    onclick: move |_| navigate(all_tags.clone()),
                    {t("allTags")}
                }
            }
        }
    };

    let body = match state {
        SubTagsState::Loading => rsx! { Loader {} },
        SubTagsState::ErroredSubTags(error) => error_view("errorOccurredWhileLoadingSubTags", error),
        SubTagsState::ErroredAncestors(error) => error_view("errorOccurredWhileLoadingAncestors", error),
        SubTagsState::Loaded(loaded) => {
            let has_more = loaded.has_more();
            let manage_current = AppRoute::ManageTag {
                org_id: org.clone(),
                tag_id: current_tag.clone(),
            };
            rsx! {
                // Toolbar
                div {
                    class: "flex flex-wrap items-center justify-between gap-3 mb-4",
                    h1 {
                        class: "text-2xl font-bold text-[var(--color-base-content)]",
                        "{loaded.tag_name}"
                    }
                    div {
                        class: "flex gap-2",
                        button {
                            "data-testid": "manageCurrentTagBtn",
                            class: "px-4 py-2 rounded-lg border border-[var(--color-primary)] text-[var(--color-primary)] hover:bg-[var(--color-primary)]/10",
                            onclick: move |_| navigate(manage_current.clone()),
                            {t("manageCurrentTag")}
                        }
                        button {
                            "data-testid": "addSubTagBtn",
                            class: "px-4 py-2 rounded-lg bg-[var(--color-primary)] text-[var(--color-primary-content)] hover:bg-[var(--color-primary)]/90",
                            onclick: move |_| form.write().open(),
                            "+ "
                            {t("addChildTag")}
                        }
                    }
                }

                Breadcrumbs {
                    org_id: org.clone(),
                    ancestors: loaded.ancestors.clone(),
                    on_navigate: move |next| navigate(next),
                }

                // Header row
                div {
                    class: "grid grid-cols-[3rem_1fr_8rem_8rem_7rem] gap-2 px-4 py-2 rounded-t-lg bg-[var(--color-primary)] text-[var(--color-primary-content)] text-sm font-semibold",
                    span { "#" }
                    span { {t("tagName")} }
                    span { class: "text-center", {t("totalSubTags")} }
                    span { class: "text-center", {t("totalAssignedUsers")} }
                    span { class: "text-center", {t("tagDetails")} }
                }

                div {
                    id: "subTagsScrollableDiv",
                    "data-testid": "subTagsScrollableDiv",
                    class: "max-h-[60vh] overflow-y-auto border border-t-0 border-[var(--color-base-300)] rounded-b-lg",
                    onscroll: move |evt: ScrollEvent| {
                        let data = evt.data();
                        if has_more
                            && near_bottom(
                                data.scroll_top() as f64,
                                data.scroll_height() as f64,
                                data.client_height() as f64,
                            )
                        {
                            scroll_fetch();
                        }
                    },

                    if loaded.tags.is_empty() {
                        div {
                            class: "py-10 text-center text-[var(--color-base-content)]/60",
                            {t("noTagsFound")}
                        }
                    }

                    for (index, tag) in loaded.tags.iter().cloned().enumerate() {
                        div {
                            key: "{tag.id}",
                            class: "grid grid-cols-[3rem_1fr_8rem_8rem_7rem] gap-2 px-4 py-2 items-center border-b border-[var(--color-base-300)] text-sm",
                            span { "{index + 1}" }
                            button {
                                "data-testid": "tagName",
                                class: "text-left text-[var(--color-primary)] hover:underline truncate",
                                onclick: {
                                    let next = AppRoute::SubTags { org_id: org.clone(), tag_id: tag.id.clone() };
                                    move |_| navigate(next.clone())
                                },
                                "{tag.name}"
                            }
                            span { class: "text-center", "{tag.child_tag_count()}" }
                            span { class: "text-center", "{tag.assigned_user_count()}" }
                            div {
                                class: "flex justify-center",
                                button {
                                    "data-testid": "manageTagBtn",
                                    class: "px-3 py-1 rounded-md bg-[var(--color-base-300)] hover:bg-[var(--color-base-300)]/70",
                                    onclick: {
                                        let next = AppRoute::ManageTag { org_id: org.clone(), tag_id: tag.id.clone() };
                                        move |_| navigate(next.clone())
                                    },
                                    {t("manageTag")}
                                }
                            }
                        }
                    }

                    if fetching_more {
                        Loader { message_key: "loadingMore".to_string() }
                    }
                }

                // Short lists never scroll, so the next page is also one click away
                if can_fetch_more {
                    div {
                        class: "flex justify-center mt-2",
                        button {
                            "data-testid": "loadMoreSubTagsBtn",
                            class: "px-4 py-2 rounded-lg border border-[var(--color-primary)] text-[var(--color-primary)] hover:bg-[var(--color-primary)]/10",
                            onclick: move |_| fetch_more(),
                            {t("loadMore")}
                        }
                    }
                }

                p {
                    class: "mt-2 text-xs text-right text-[var(--color-base-content)]/60",
                    "{loaded.tags.len()} / {loaded.total_count}"
                }
            }
        }
    };

    rsx! {
        div {
            class: "flex flex-col h-full overflow-y-auto",
            div {
                class: "max-w-5xl mx-auto w-full p-6",
                {body}
            }
        }

        AddSubTagModal {
            form,
            on_submit: submit_tag,
        }
    }
}
