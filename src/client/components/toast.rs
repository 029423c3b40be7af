use dioxus::prelude::*;

use crate::client::store::toast::{NoticeLevel, ToastState};

#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_context::<Signal<ToastState>>();

    let items: Vec<_> = toasts.read().toasts().cloned().collect();

    rsx!(
        div { class: "toast toast-end z-50",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: match toast.notice.level {
                        NoticeLevel::Success => "alert alert-success",
                        NoticeLevel::Error => "alert alert-error",
                    },
                    span { "{toast.notice.message}" }
                    button {
                        class: "btn btn-xs btn-ghost",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    )
}
