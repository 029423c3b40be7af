use dioxus::prelude::*;
use kalendo::client::{
    components::EventDetailPanel,
    config::Config,
    util::date::DisplayZone,
    view::{EventDetailView, Renderer},
};

pub const PLACEHOLDER: &str = "/assets/event-placeholder.svg";

pub fn renderer() -> Renderer {
    let mut config = Config::with_defaults("https://project.supabase.co", "anon-key")
        .expect("valid test configuration");
    config.time_zone = DisplayZone::utc();
    Renderer::new(&config, PLACEHOLDER)
}

#[component]
fn Harness(view: EventDetailView) -> Element {
    rsx!(EventDetailPanel {
        view,
        draft: String::new(),
        submitting: false,
        signed_in: true,
        on_input: move |_| {},
        on_submit: move |_| {},
    })
}

/// Server-side markup of the detail panel for `view`.
pub fn render_detail(view: EventDetailView) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { view });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{:?} missing from {}", needle, html))
}
