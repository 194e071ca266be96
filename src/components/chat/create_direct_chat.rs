use super::super::common::{push_toast, ErrorPanel, Loader, Modal};
use crate::state::{creation_refused, DirectChatCreator, Services, UsersState};
use crate::utils::{t, Session, ToastQueue};
use dioxus::prelude::*;

/// Modal that lists users of the organization and opens a direct chat with
/// the one picked.
#[component]
pub fn CreateDirectChat(
    org_id: String,
    open: ReadSignal<bool>,
    on_close: EventHandler<()>,
    on_contacts_refetch: EventHandler<()>,
) -> Element {
    let services = use_context::<Services>();
    let session = use_context::<Session>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let mut creator = use_signal(DirectChatCreator::default);

    let search_services = services.clone();
    let mut run_search = move || {
        let (generation, filter) = creator.write().submit_search();
        let controller = search_services.direct_chat();
        spawn(async move {
            if let Some(result) = controller.users(&filter).await {
                creator.write().apply_users(generation, &filter, result);
            }
        });
    };

    // Fresh, unfiltered list every time the modal opens
    let mut open_search = run_search.clone();
    let mut retry_search = run_search.clone();
    use_effect(move || {
        if open() {
            creator.write().set_search(String::new());
            open_search();
        }
    });

    let create_services = services.clone();
    let create_chat = move |user_id: String| {
        let user_ids = match creator.write().begin_create(&session, &user_id) {
            Ok(ids) => ids,
            Err(e) => {
                push_toast(toasts, &create_services, creation_refused(&e));
                return;
            }
        };
        let org = org_id.clone();
        let services = create_services.clone();
        spawn(async move {
            let Some(result) = services.direct_chat().create_chat(&org, &user_ids).await else {
                return;
            };
            let outcome = creator.write().finish_create(&result);
            if let Some(notice) = outcome.notice {
                push_toast(toasts, &services, notice);
            }
            if outcome.refetch_contacts {
                on_contacts_refetch.call(());
            }
            if outcome.close_modal {
                on_close.call(());
            }
        });
    };

    let current = creator.read().clone();
    let pending = current.pending_user().map(str::to_string);
    let closable = current.is_closable();

    rsx! {
        Modal {
            open: open(),
            title: t("chat"),
            test_id: "createDirectChatModal".to_string(),
            close_test_id: "createDirectChat".to_string(),
            close_disabled: !closable,
            on_close: move |_| on_close.call(()),

            form {
                class: "relative mb-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    run_search();
                },
                input {
                    id: "searchUser",
                    "data-testid": "searchUser",
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: t("searchFullName"),
                    value: "{current.search()}",
                    oninput: move |evt| creator.write().set_search(evt.value()),
                    class: "w-full px-3 py-2 pr-20 rounded-lg bg-[var(--color-base-100)] text-[var(--color-base-content)] border-2 border-[var(--color-base-300)] focus:outline-none focus:ring-2 focus:ring-[var(--color-primary)]",
                }
                button {
                    r#type: "submit",
                    "data-testid": "submitBtn",
                    class: "absolute right-1 top-1 bottom-1 px-3 rounded-md bg-[var(--color-primary)] text-[var(--color-primary-content)] text-sm",
                    {t("search")}
                }
            }

            match current.users().clone() {
                UsersState::Loading => rsx! { Loader {} },
                UsersState::Errored(error) => rsx! {
                    ErrorPanel {
                        message_key: "errorOccurredWhileLoadingUsers".to_string(),
                        error,
                        on_retry: Some(EventHandler::new(move |_| retry_search())),
                    }
                },
                UsersState::Loaded(users) => rsx! {
                    div {
                        class: "rounded-lg border border-[var(--color-base-300)] overflow-hidden",
                        div {
                            class: "grid grid-cols-[3rem_1fr_6rem] gap-2 px-4 py-2 bg-[var(--color-primary)] text-[var(--color-primary-content)] text-sm font-semibold",
                            span { "#" }
                            span { class: "text-center", {t("user")} }
                            span { class: "text-center", {t("chat")} }
                        }
                        if users.is_empty() {
                            div {
                                class: "py-6 text-center text-sm text-[var(--color-base-content)]/60",
                                {t("noUsersFound")}
                            }
                        }
                        for (index, item) in users.into_iter().enumerate() {
                            div {
                                key: "{item.user.id}",
                                "data-testid": "user",
                                class: "grid grid-cols-[3rem_1fr_6rem] gap-2 px-4 py-2 items-center border-t border-[var(--color-base-300)] text-sm",
                                span { "{index + 1}" }
                                div {
                                    class: "text-center",
                                    p { class: "font-medium", "{item.user.full_name()}" }
                                    p { class: "text-xs text-[var(--color-base-content)]/60", "{item.user.email}" }
                                }
                                div {
                                    class: "flex justify-center",
                                    button {
                                        "data-testid": "addBtn",
                                        disabled: pending.is_some(),
                                        class: "px-3 py-1 rounded-md bg-[var(--color-primary)] text-[var(--color-primary-content)] disabled:opacity-50",
                                        onclick: {
                                            let user_id = item.user.id.clone();
                                            let mut create_chat = create_chat.clone();
                                            move |_| create_chat(user_id.clone())
                                        },
                                        if pending.as_deref() == Some(item.user.id.as_str()) {
                                            "…"
                                        } else {
                                            {t("add")}
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
