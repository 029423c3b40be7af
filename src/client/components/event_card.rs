use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendarDays, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::client::view::EventCardView;

/// Summary card of an event with a "view details" control.
///
/// The control carries the event id in `data-event-id` and renders disabled while the
/// detail of that event is loading.
#[component]
pub fn EventCard(card: EventCardView, pending: bool, on_open: EventHandler<i64>) -> Element {
    let id = card.id;

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full max-w-96",
            figure {
                img {
                    class: "h-48 w-full object-cover",
                    src: "{card.image_src}",
                    alt: "{card.title}",
                }
            }
            div { class: "card-body",
                h2 { class: "card-title", "{card.title}" }
                p { class: "flex items-center gap-2 text-sm",
                    Icon { width: 14, height: 14, icon: FaCalendarDays }
                    "{card.date_label}"
                }
                if !card.location.is_empty() {
                    p { class: "flex items-center gap-2 text-sm",
                        Icon { width: 14, height: 14, icon: FaLocationDot }
                        "{card.location}"
                    }
                }
                p { "{card.excerpt}" }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary",
                        "data-event-id": "{id}",
                        disabled: pending,
                        onclick: move |_| on_open.call(id),
                        if pending { "Cargando..." } else { "Ver detalles" }
                    }
                }
            }
        }
    )
}

/// Cards of several events, or an empty-state line.
#[component]
pub fn EventGrid(
    cards: Vec<EventCardView>,
    pending: Vec<i64>,
    empty_message: String,
    on_open: EventHandler<i64>,
) -> Element {
    if cards.is_empty() {
        return rsx!(
            p { class: "text-center opacity-70 p-6", "{empty_message}" }
        );
    }

    rsx!(
        div { class: "flex flex-wrap justify-center gap-4",
            {cards.into_iter().map(|card| {
                let id = card.id;
                let is_pending = pending.contains(&id);
                rsx!(EventCard { key: "{id}", card, pending: is_pending, on_open })
            })}
        }
    )
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::EventCard;
    use crate::client::view::EventCardView;

    #[component]
    fn Harness(card: EventCardView, pending: bool) -> Element {
        rsx!(EventCard { card, pending, on_open: move |_| {} })
    }

    fn render(card: EventCardView, pending: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { card, pending });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn card() -> EventCardView {
        EventCardView {
            id: 7,
            image_src: "/assets/event-placeholder.svg".to_string(),
            title: "Concert".to_string(),
            excerpt: "Música en directo".to_string(),
            date_label: "jueves, 5 de junio de 2025".to_string(),
            location: "Hall A".to_string(),
        }
    }

    /// Expect the control to carry the event id and the image a non-empty source
    #[test]
    fn renders_event_id_and_image() {
        let html = render(card(), false);

        assert!(html.contains(r#"data-event-id="7""#));
        assert!(html.contains(r#"src="/assets/event-placeholder.svg""#));
        assert!(html.contains("Ver detalles"));
        assert!(!html.contains("Cargando..."));
    }

    /// Expect a pending card to render its control disabled
    #[test]
    fn pending_card_is_disabled() {
        let html = render(card(), true);

        assert!(html.contains("disabled"));
        assert!(html.contains("Cargando..."));
    }
}
