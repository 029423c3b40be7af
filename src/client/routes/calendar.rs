use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{Calendar as CalendarGrid, Loading, Page},
    config::Config,
    controller::{notify, use_event_opener},
    service::EventService,
    store::toast::{Notice, ToastState},
    supabase::SupabaseClient,
    util::calendar::{CalendarView, VisibleRange},
    view::Renderer,
};

#[component]
pub fn Calendar() -> Element {
    let config = use_context::<Config>();
    let backend = use_context::<SupabaseClient>();
    let renderer = use_context::<Renderer>();
    let toasts = use_context::<Signal<ToastState>>();
    let open_event = use_event_opener();

    let zone = config.time_zone;
    let today = zone.today();
    let mut anchor = use_signal(move || today);
    let mut view = use_signal(CalendarView::default);

    let range_backend = backend.clone();
    let in_range = use_resource(move || {
        let backend = range_backend.clone();
        let range = VisibleRange::new(view(), anchor());
        async move {
            let result = EventService::new(&backend)
                .fetch_events_in_range(range.start(zone), range.end(zone))
                .await;
            if let Err(err) = &result {
                tracing::error!("Failed to load calendar events: {}", err);
                notify(toasts, Notice::from(err));
            }
            result
        }
    });

    let limit = config.upcoming_limit;
    let upcoming = use_resource(move || {
        let backend = backend.clone();
        async move {
            let result = EventService::new(&backend).fetch_upcoming_events(limit).await;
            if let Err(err) = &result {
                tracing::error!("Failed to load upcoming events: {}", err);
            }
            result
        }
    });

    let grid = match &*in_range.read_unchecked() {
        None => rsx!(Loading {}),
        Some(result) => {
            let events = result.as_ref().ok().cloned().unwrap_or_default();
            rsx!(CalendarGrid {
                view: view(),
                anchor: anchor(),
                today,
                events,
                on_navigate: move |day| anchor.set(day),
                on_view: move |next| view.set(next),
                on_event: open_event,
            })
        }
    };

    let sidebar = match &*upcoming.read_unchecked() {
        None => rsx!(Loading {}),
        Some(Err(_)) => rsx!(
            p { class: "opacity-70", "No se pudieron cargar los próximos eventos." }
        ),
        Some(Ok(events)) if events.is_empty() => rsx!(
            p { class: "opacity-70", "No hay eventos próximos." }
        ),
        Some(Ok(events)) => rsx!(
            ul { class: "flex flex-col gap-2",
                for event in events.iter() {
                    li { key: "{event.id}",
                        button {
                            class: "btn btn-ghost btn-sm w-full justify-start text-left h-auto py-1",
                            "data-event-id": "{event.id}",
                            onclick: {
                                let id = event.id;
                                move |_| open_event.call(id)
                            },
                            div { class: "flex flex-col",
                                span { class: "font-semibold", "{event.title}" }
                                span { class: "text-xs opacity-70", {renderer.format_date(&event.date)} }
                            }
                        }
                    }
                }
            }
        ),
    };

    rsx!(
        Title { "Calendario | Kalendo" }
        Page { class: "flex justify-center", heading: "Calendario".to_string(),
            div { class: "w-full max-w-[1440px] flex flex-col lg:flex-row gap-6",
                section { class: "flex-1",
                    {grid}
                }
                aside { class: "w-full lg:w-80 flex flex-col gap-2",
                    h2 { class: "text-lg font-semibold", "Próximos eventos" }
                    {sidebar}
                }
            }
        }
    )
}
