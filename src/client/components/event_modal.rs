use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{EventDetailPanel, Loading},
    controller::{use_comment_submitter, DetailController, DetailState},
    store::session::SessionState,
    view::Renderer,
};

/// Detail view overlay driven by the shared [`DetailController`].
#[component]
pub fn EventDetailModal() -> Element {
    let mut controller = use_context::<Signal<DetailController>>();
    let renderer = use_context::<Renderer>();
    let session = use_context::<Signal<SessionState>>();
    let submit = use_comment_submitter();

    let body = match controller.read().state() {
        DetailState::Closed => return rsx!(),
        DetailState::Loading { .. } => rsx!(Loading { message: "Cargando evento...".to_string() }),
        DetailState::Open(open) => {
            let view = renderer.render_event_detail(&open.detail, &open.comments);
            rsx!(EventDetailPanel {
                view,
                draft: open.draft.clone(),
                submitting: open.submitting,
                signed_in: session.read().user.is_some(),
                on_input: move |text: String| controller.write().update_draft(text),
                on_submit: move |_| submit.call(()),
            })
        }
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-3xl",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-2 top-2",
                    aria_label: "Cerrar",
                    onclick: move |_| controller.write().dismiss(),
                    Icon { width: 16, height: 16, icon: FaXmark }
                }
                {body}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| controller.write().dismiss(),
            }
        }
    )
}
