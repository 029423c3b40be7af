use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{CreateEventForm, EventFiltersForm, EventGrid, Loading, Page},
        config::Config,
        controller::{notify, use_event_opener, DetailController},
        service::EventService,
        store::{
            session::SessionState,
            toast::{Notice, ToastState},
        },
        supabase::SupabaseClient,
        view::Renderer,
    },
    model::event::EventFilters,
};

#[component]
pub fn Events() -> Element {
    let backend = use_context::<SupabaseClient>();
    let zone = use_context::<Config>().time_zone;
    let renderer = use_context::<Renderer>();
    let session = use_context::<Signal<SessionState>>();
    let controller = use_context::<Signal<DetailController>>();
    let toasts = use_context::<Signal<ToastState>>();
    let open_event = use_event_opener();

    let mut filters = use_signal(EventFilters::default);
    let mut revision = use_signal(|| 0u32);

    let events = use_resource(move || {
        let backend = backend.clone();
        let filters = filters();
        // Re-run after an event is created.
        let _ = revision();
        async move {
            let result = EventService::new(&backend)
                .in_zone(zone)
                .search_events(&filters)
                .await;
            if let Err(err) = &result {
                tracing::error!("Failed to search events: {}", err);
                notify(toasts, Notice::from(err));
            }
            result
        }
    });

    let content = match &*events.read_unchecked() {
        None => rsx!(Loading {}),
        Some(Err(_)) => rsx!(
            p { class: "text-center opacity-70", "No se pudieron cargar los eventos." }
        ),
        Some(Ok(found)) => {
            let cards: Vec<_> = found.iter().map(|e| renderer.render_event_card(e)).collect();
            let pending: Vec<i64> = cards
                .iter()
                .map(|card| card.id)
                .filter(|id| controller.read().is_pending(*id))
                .collect();
            let empty_message = if filters.read().is_empty() {
                "Todavía no hay eventos."
            } else {
                "Ningún evento coincide con la búsqueda."
            };
            rsx!(EventGrid {
                cards,
                pending,
                empty_message: empty_message.to_string(),
                on_open: open_event,
            })
        }
    };

    rsx!(
        Title { "Eventos | Kalendo" }
        Page { class: "flex flex-col items-center gap-6", heading: "Eventos".to_string(),
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                EventFiltersForm { on_search: move |next| filters.set(next) }
                {content}
            }
            if session.read().user.is_some() {
                CreateEventForm { on_created: move |_| revision += 1 }
            } else {
                p { class: "opacity-70", "Inicia sesión para crear eventos." }
            }
        }
    )
}
