use super::super::common::Modal;
use crate::state::AddSubTagForm;
use crate::utils::t;
use dioxus::prelude::*;

#[component]
pub fn AddSubTagModal(mut form: Signal<AddSubTagForm>, on_submit: EventHandler<()>) -> Element {
    let current = form.read().clone();
    let submitting = current.is_submitting();

    rsx! {
        Modal {
            open: current.is_open(),
            title: t("addChildTag"),
            close_disabled: !current.is_closable(),
            test_id: "addSubTagModal".to_string(),
            close_test_id: "addSubTagModalCloseBtn".to_string(),
            on_close: move |_| {
                form.write().close();
            },

            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                label {
                    class: "block text-sm font-medium text-[var(--color-base-content)] mb-1",
                    r#for: "tagName",
                    {t("tagName")}
                }
                input {
                    id: "tagName",
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: t("tagNamePlaceholder"),
                    value: "{current.name()}",
                    disabled: submitting,
                    oninput: move |evt| form.write().set_name(evt.value()),
                    class: "w-full px-3 py-2 rounded-lg bg-[var(--color-base-100)] text-[var(--color-base-content)] border-2 border-[var(--color-base-300)] focus:outline-none focus:ring-2 focus:ring-[var(--color-primary)]",
                }

                div {
                    class: "flex justify-end gap-2 mt-5",
                    button {
                        r#type: "button",
                        "data-testid": "closeAddSubTagModal",
                        disabled: submitting,
                        class: "px-4 py-2 rounded-lg bg-[var(--color-base-300)] text-[var(--color-base-content)] disabled:opacity-50",
                        onclick: move |_| {
                            form.write().close();
                        },
                        {t("cancel")}
                    }
                    button {
                        r#type: "submit",
                        "data-testid": "addSubTagSubmitBtn",
                        disabled: submitting,
                        class: "px-4 py-2 rounded-lg bg-[var(--color-primary)] text-[var(--color-primary-content)] disabled:opacity-50",
                        {t("create")}
                    }
                }
            }
        }
    }
}
