use super::super::common::{ErrorPanel, Loader};
use super::CreateDirectChat;
use crate::state::Services;
use crate::utils::{t, Session};
use dioxus::prelude::*;

/// The signed-in user's direct chats, with a button to start a new one.
#[component]
pub fn Contacts(org_id: String) -> Element {
    let services = use_context::<Services>();
    let session = use_context::<Session>();
    let mut modal_open = use_signal(|| false);

    let mut contacts = use_resource(move || {
        let controller = services.direct_chat();
        let session = session.clone();
        async move { controller.contacts(&session).await }
    });

    let me = use_context::<Session>().current_user_id().map(str::to_string);

    rsx! {
        div {
            class: "flex flex-col h-full overflow-y-auto",
            div {
                class: "max-w-3xl mx-auto w-full p-6",

                div {
                    class: "flex items-center justify-between mb-4",
                    h1 {
                        class: "text-2xl font-bold text-[var(--color-base-content)]",
                        {t("contacts")}
                    }
                    button {
                        "data-testid": "newDirectChat",
                        class: "px-4 py-2 rounded-lg bg-[var(--color-primary)] text-[var(--color-primary-content)]",
                        onclick: move |_| modal_open.set(true),
                        {t("newChat")}
                    }
                }

                match &*contacts.read() {
                    None => rsx! { Loader {} },
                    Some(Err(error)) => rsx! {
                        ErrorPanel {
                            message_key: "errorOccurredWhileLoadingContacts".to_string(),
                            error: error.clone(),
                            on_retry: Some(EventHandler::new(move |_| contacts.restart())),
                        }
                    },
                    Some(Ok(chats)) if chats.is_empty() => rsx! {
                        p {
                            class: "py-10 text-center text-[var(--color-base-content)]/60",
                            {t("noContacts")}
                        }
                    },
                    Some(Ok(chats)) => rsx! {
                        ul {
                            class: "divide-y divide-[var(--color-base-300)] rounded-lg border border-[var(--color-base-300)]",
                            for chat in chats.iter() {
                                li {
                                    key: "{chat.id}",
                                    "data-testid": "contactCard",
                                    class: "px-4 py-3",
                                    if let Some(user) = chat.counterpart(me.as_deref()) {
                                        p { class: "font-medium", "{user.full_name()}" }
                                        p { class: "text-xs text-[var(--color-base-content)]/60", "{user.email}" }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }

        CreateDirectChat {
            org_id,
            open: modal_open,
            on_close: move |_| modal_open.set(false),
            on_contacts_refetch: move |_| contacts.restart(),
        }
    }
}
