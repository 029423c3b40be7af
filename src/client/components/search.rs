use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::model::event::EventFilters;

/// Free-text search box plus date and location filters.
#[component]
pub fn EventFiltersForm(on_search: EventHandler<EventFilters>) -> Element {
    let mut search = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut location = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_search.call(EventFilters {
            search: Some(search()),
            date: NaiveDate::parse_from_str(date().trim(), "%Y-%m-%d").ok(),
            location: Some(location()),
        }.normalized());
    };

    let clear = move |_| {
        search.set(String::new());
        date.set(String::new());
        location.set(String::new());
        on_search.call(EventFilters::default());
    };

    rsx!(
        form {
            class: "flex flex-wrap items-end gap-2",
            onsubmit: submit,
            label { class: "input input-bordered flex items-center gap-2",
                Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                input {
                    r#type: "search",
                    placeholder: "Buscar eventos...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            input {
                class: "input input-bordered",
                r#type: "date",
                value: "{date}",
                oninput: move |evt| date.set(evt.value()),
            }
            input {
                class: "input input-bordered",
                r#type: "text",
                placeholder: "Ubicación",
                value: "{location}",
                oninput: move |evt| location.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", "Buscar" }
            button { class: "btn btn-ghost", r#type: "button", onclick: clear, "Limpiar" }
        }
    )
}
