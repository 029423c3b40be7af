use dioxus::prelude::*;

#[component]
pub fn Loading(message: Option<String>) -> Element {
    let message = message.unwrap_or_else(|| "Cargando...".to_string());

    rsx!(
        div { class: "flex items-center justify-center gap-2 p-6",
            span { class: "loading loading-spinner" }
            p { "{message}" }
        }
    )
}
