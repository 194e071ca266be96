use dioxus::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod components;
mod state;
mod utils;

use components::{Contacts, ExternalScreen, Header, Home, SubTags, Toasts};
use state::Services;
use utils::{AppRoute, GraphQlClient, Session, Settings, ToastQueue};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orgadmin=info")))
        .init();

    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load settings: {}", e);
        Settings::default()
    });
    let session = Session::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load session: {}", e);
        Session::default()
    });
    if session.current_user_id().is_none() {
        tracing::warn!("No signed-in user in the session file, chat creation is disabled");
    }

    let client = match GraphQlClient::new(
        settings.graphql_endpoint.clone(),
        session.token.clone(),
        settings.request_timeout(),
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(endpoint = client.endpoint(), "starting orgadmin");

    // A path passed on the command line wins over the configured start path
    let start = std::env::args()
        .nth(1)
        .and_then(|path| AppRoute::parse(&path))
        .or_else(|| AppRoute::parse(&settings.start_path))
        .unwrap_or(AppRoute::Home);

    let services = Services::new(Arc::new(client), settings);

    dioxus::LaunchBuilder::new()
        .with_context(services)
        .with_context(session)
        .with_context(StartRoute(start))
        .launch(App);
}

#[derive(Clone)]
struct StartRoute(AppRoute);

#[component]
fn App() -> Element {
    let start = use_context::<StartRoute>();
    let route = use_context_provider(|| Signal::new(start.0.clone()));
    let toasts = use_context_provider(|| Signal::new(ToastQueue::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        div {
            class: "flex flex-col h-screen overflow-hidden font-sans antialiased bg-[var(--color-base-100)] text-[var(--color-base-content)]",

            Header { route }

            main {
                class: "grow min-h-0",

                match route.read().clone() {
                    AppRoute::Home => rsx! { Home {} },
                    AppRoute::SubTags { org_id, tag_id } => rsx! {
                        SubTags { org_id, tag_id }
                    },
                    AppRoute::OrgTags { .. } => rsx! {
                        ExternalScreen {
                            title_key: "orgTagsScreen".to_string(),
                            test_id: "orgtagsScreen".to_string(),
                            back: None,
                        }
                    },
                    AppRoute::ManageTag { org_id, tag_id } => rsx! {
                        ExternalScreen {
                            title_key: "manageTagScreen".to_string(),
                            test_id: "manageTagScreen".to_string(),
                            back: Some(AppRoute::SubTags { org_id, tag_id }),
                        }
                    },
                    AppRoute::Chat { org_id } => rsx! {
                        Contacts { org_id }
                    },
                }
            }

            Toasts { toasts }
        }
    }
}
