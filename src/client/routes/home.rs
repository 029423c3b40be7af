use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{EventGrid, Loading, Page},
    config::Config,
    controller::{notify, use_event_opener, DetailController},
    router::Route,
    service::EventService,
    store::toast::{Notice, ToastState},
    supabase::SupabaseClient,
    view::Renderer,
};

#[component]
pub fn Home() -> Element {
    let config = use_context::<Config>();
    let backend = use_context::<SupabaseClient>();
    let renderer = use_context::<Renderer>();
    let controller = use_context::<Signal<DetailController>>();
    let toasts = use_context::<Signal<ToastState>>();
    let open_event = use_event_opener();

    let limit = config.featured_limit;
    let featured = use_resource(move || {
        let backend = backend.clone();
        async move {
            let result = EventService::new(&backend).fetch_upcoming_events(limit).await;
            if let Err(err) = &result {
                tracing::error!("Failed to load featured events: {}", err);
                notify(toasts, Notice::from(err));
            }
            result
        }
    });

    let content = match &*featured.read_unchecked() {
        None => rsx!(Loading {}),
        Some(Err(_)) => rsx!(
            p { class: "text-center opacity-70", "No se pudieron cargar los eventos." }
        ),
        Some(Ok(events)) => {
            let cards: Vec<_> = events.iter().map(|e| renderer.render_event_card(e)).collect();
            let pending: Vec<i64> = cards
                .iter()
                .map(|card| card.id)
                .filter(|id| controller.read().is_pending(*id))
                .collect();
            rsx!(EventGrid {
                cards,
                pending,
                empty_message: "No hay eventos próximos.".to_string(),
                on_open: open_event,
            })
        }
    };

    rsx!(
        Title { "Kalendo" }
        Meta {
            name: "description",
            content: "Calendario de eventos de la comunidad."
        }
        Page { class: "flex flex-col items-center gap-6",
            div { class: "flex flex-col items-center gap-2 pt-6",
                h1 { class: "text-3xl font-bold", "Kalendo" }
                p { "Descubre lo que pasa cerca de ti." }
            }
            section { class: "w-full max-w-[1440px] flex flex-col gap-4",
                h2 { class: "text-xl font-semibold", "Próximos eventos destacados" }
                {content}
            }
            ul { class: "flex flex-wrap justify-center gap-2",
                li { Link { to: Route::Events {}, class: "btn btn-outline w-48", "Ver todos los eventos" } }
                li { Link { to: Route::Calendar {}, class: "btn btn-outline w-48", "Abrir calendario" } }
            }
        }
    )
}
