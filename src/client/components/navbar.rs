use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCalendarDays;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{EventDetailModal, ToastStack},
    controller::notify,
    router::Route,
    service::AuthService,
    store::{
        session::SessionState,
        toast::{Notice, ToastState},
    },
    supabase::SupabaseClient,
};

#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let toasts = use_context::<Signal<ToastState>>();
    let backend = use_context::<SupabaseClient>();

    let sign_out = move |_| {
        let backend = backend.clone();
        spawn(async move {
            match AuthService::new(&backend).sign_out().await {
                Ok(()) => notify(toasts, Notice::success("Sesión cerrada.")),
                Err(err) => {
                    tracing::error!("Failed to sign out: {}", err);
                    notify(toasts, Notice::from(&err));
                }
            }
            // The local session is gone either way.
            session.set(SessionState::signed_out());
        });
    };

    let user = session.read().user.clone();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "flex items-center gap-2",
                    Icon { width: 24, height: 24, icon: FaCalendarDays }
                    p { class: "text-xl", "Kalendo" }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    li { Link { to: Route::Home {}, "Inicio" } }
                    li { Link { to: Route::Events {}, "Eventos" } }
                    li { Link { to: Route::Calendar {}, "Calendario" } }
                }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(user) = user {
                    Link { to: Route::Profile {}, class: "text-sm", "{user.email}" }
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: sign_out,
                        "Cerrar sesión"
                    }
                } else if session.read().fetched {
                    Link { to: Route::Login {}, class: "btn btn-primary btn-sm", "Iniciar sesión" }
                }
            }
        }

        Outlet::<Route> {}

        EventDetailModal {}
        ToastStack {}
    }
}
