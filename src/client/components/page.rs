use dioxus::prelude::*;

/// Screen body below the fixed navbar, with an optional heading above `children`.
#[component]
pub fn Page(class: Option<&'static str>, heading: Option<String>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[64px] p-4 flex flex-col gap-4",
            if let Some(heading) = heading {
                h1 { class: "text-2xl font-bold text-center pt-4", "{heading}" }
            }
            div { class: "{class}", {children} }
        }
    )
}
