use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUser;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{Loading, Page},
    router::Route,
    service::UserService,
    store::session::SessionState,
    supabase::SupabaseClient,
};

#[component]
pub fn Profile() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let backend = use_context::<SupabaseClient>();
    let navigator = use_navigator();

    use_effect(move || {
        let state = session.read();
        if state.fetched && state.user.is_none() {
            navigator.replace(Route::Login {});
        }
    });

    let profile = use_resource(move || {
        let backend = backend.clone();
        let user = session.read().user.clone();
        async move {
            let Some(user) = user else {
                return Ok(None);
            };
            let result = UserService::new(&backend).fetch_profile(&user.id).await;
            if let Err(err) = &result {
                tracing::error!("Failed to load profile of {}: {}", user.id, err);
            }
            result
        }
    });

    let Some(user) = session.read().user.clone() else {
        return rsx!(Page { Loading {} });
    };

    let name = match &*profile.read_unchecked() {
        Some(Ok(Some(profile))) => Some(profile.name.clone()),
        _ => None,
    };

    rsx!(
        Title { "Perfil | Kalendo" }
        Page { class: "flex justify-center", heading: "Tu perfil".to_string(),
            div { class: "card bg-base-200 shadow-sm w-full max-w-96",
                div { class: "card-body items-center gap-2",
                    Icon { width: 48, height: 48, icon: FaUser }
                    if let Some(name) = name {
                        h2 { class: "card-title", "{name}" }
                    } else {
                        div { class: "skeleton h-6 w-40" }
                    }
                    p { class: "opacity-70", "{user.email}" }
                }
            }
        }
    )
}
