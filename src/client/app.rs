use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    config::Config,
    controller::DetailController,
    router::Route,
    service::AuthService,
    store::{session::SessionState, toast::ToastState},
    supabase::SupabaseClient,
    view::Renderer,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const PLACEHOLDER_IMG: Asset = asset!("/assets/event-placeholder.svg");

#[component]
pub fn App() -> Element {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Configuration error: {}", err);
            return rsx!(
                document::Stylesheet { href: MAIN_CSS }
                ConfigError { message: err.to_string() }
            );
        }
    };

    rsx!(
        document::Stylesheet { href: MAIN_CSS }
        Shell { config }
    )
}

/// Provides the shared contexts and mounts the router.
#[component]
fn Shell(config: Config) -> Element {
    let backend = use_context_provider(|| SupabaseClient::new(&config));
    use_context_provider(|| Renderer::new(&config, &PLACEHOLDER_IMG.to_string()));
    use_context_provider(|| config.clone());

    let mut session = use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(|| Signal::new(ToastState::default()));
    use_context_provider(|| Signal::new(DetailController::new()));

    // Restore the session once on start
    use_hook(move || {
        spawn(async move {
            let user = match AuthService::new(&backend).current_user().await {
                Ok(user) => user,
                Err(err) => {
                    tracing::warn!("Failed to restore session: {}", err);
                    None
                }
            };

            session.set(SessionState {
                user,
                fetched: true,
            });
        });
    });

    rsx!(Router::<Route> {})
}

#[component]
fn ConfigError(message: String) -> Element {
    rsx!(
        main { class: "flex flex-col items-center justify-center min-h-screen gap-2 p-6",
            p { class: "text-2xl", "La aplicación no está configurada." }
            p { class: "opacity-70", "{message}" }
        }
    )
}
