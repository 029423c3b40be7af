use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;
use entity::event;

use crate::client::{
    util::calendar::{events_on, step, CalendarView, VisibleRange},
    view::Renderer,
};

const WEEKDAYS: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

/// Month, week and day views of `events` around `anchor`.
///
/// Navigation and view changes are reported through `on_navigate` and `on_view`; the
/// owner fetches the events of the new [`VisibleRange`]. Activating an entry calls
/// `on_event` with its id.
#[component]
pub fn Calendar(
    view: CalendarView,
    anchor: NaiveDate,
    today: NaiveDate,
    events: Vec<event::Model>,
    on_navigate: EventHandler<NaiveDate>,
    on_view: EventHandler<CalendarView>,
    on_event: EventHandler<i64>,
) -> Element {
    let renderer = use_context::<Renderer>();
    let range = VisibleRange::new(view, anchor);
    let zone = renderer.dates().zone();

    let title = match view {
        CalendarView::Month => renderer
            .dates()
            .format_day_with(anchor, "%B %Y"),
        CalendarView::Week => format!(
            "{} - {}",
            renderer.dates().format_day(range.first),
            renderer.dates().format_day(range.last)
        ),
        CalendarView::Day => renderer.dates().format_day(anchor),
    };

    let body = match view {
        CalendarView::Day => {
            let entries: Vec<_> = events_on(&events, anchor, zone).into_iter().cloned().collect();
            rsx!(
                ul { class: "flex flex-col gap-2",
                    if entries.is_empty() {
                        li { class: "opacity-70", "No hay eventos este día." }
                    }
                    for event in entries {
                        li { key: "{event.id}",
                            CalendarEntry {
                                id: event.id,
                                label: format!("{} {}", renderer.dates().time(&event.date), event.title),
                                on_event,
                            }
                        }
                    }
                }
            )
        }
        CalendarView::Week | CalendarView::Month => rsx!(
            div { class: "grid grid-cols-7 gap-1",
                for weekday in WEEKDAYS {
                    div { class: "text-center text-xs font-semibold uppercase", "{weekday}" }
                }
                for day in range.days() {
                    div {
                        key: "{day}",
                        class: if day.month() != anchor.month() && view == CalendarView::Month {
                            "min-h-24 border border-base-300 p-1 opacity-50"
                        } else if day == today {
                            "min-h-24 border border-primary p-1"
                        } else {
                            "min-h-24 border border-base-300 p-1"
                        },
                        p { class: "text-xs", "{day.day()}" }
                        for event in events_on(&events, day, zone) {
                            CalendarEntry {
                                key: "{event.id}",
                                id: event.id,
                                label: format!("{} {}", renderer.dates().time(&event.date), event.title),
                                on_event,
                            }
                        }
                    }
                }
            }
        ),
    };

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "flex flex-wrap items-center justify-between gap-2",
                div { class: "join",
                    button {
                        class: "btn join-item",
                        aria_label: "Anterior",
                        onclick: move |_| on_navigate.call(step(view, anchor, false)),
                        Icon { width: 14, height: 14, icon: FaChevronLeft }
                    }
                    button {
                        class: "btn join-item",
                        onclick: move |_| on_navigate.call(today),
                        "Hoy"
                    }
                    button {
                        class: "btn join-item",
                        aria_label: "Siguiente",
                        onclick: move |_| on_navigate.call(step(view, anchor, true)),
                        Icon { width: 14, height: 14, icon: FaChevronRight }
                    }
                }
                h2 { class: "text-xl font-semibold capitalize", "{title}" }
                div { class: "join",
                    for option in [CalendarView::Month, CalendarView::Week, CalendarView::Day] {
                        button {
                            class: if option == view { "btn join-item btn-active" } else { "btn join-item" },
                            onclick: move |_| on_view.call(option),
                            "{option.label()}"
                        }
                    }
                }
            }
            {body}
        }
    )
}

#[component]
fn CalendarEntry(id: i64, label: String, on_event: EventHandler<i64>) -> Element {
    rsx!(
        button {
            class: "btn btn-xs btn-ghost w-full justify-start truncate",
            "data-event-id": "{id}",
            onclick: move |_| on_event.call(id),
            "{label}"
        }
    )
}
