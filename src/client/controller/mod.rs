//! Interaction controllers.
//!
//! The state machines are plain structs; the hooks below bind them to the contexts
//! provided by [`crate::client::App`]. Their asynchronous half runs with `spawn_forever`
//! so leaving the route that started it does not cancel it.

pub mod detail;

use dioxus::{core::spawn_forever, prelude::*};

use crate::client::{
    store::{
        session::SessionState,
        toast::{Notice, ToastState},
    },
    supabase::SupabaseClient,
};

pub use detail::{DetailController, DetailState, OpenDetail};

/// Pushes a notification onto the shared toast stack.
pub fn notify(mut toasts: Signal<ToastState>, notice: Notice) {
    toasts.write().push(notice);
}

/// Callback opening the detail view of an event id.
///
/// Repeated activations for an event that is still loading are ignored.
pub fn use_event_opener() -> Callback<i64> {
    let mut controller = use_context::<Signal<DetailController>>();
    let toasts = use_context::<Signal<ToastState>>();
    let backend = use_context::<SupabaseClient>();

    use_callback(move |event_id: i64| {
        let Some(ticket) = controller.write().request_open(event_id) else {
            return;
        };

        let backend = backend.clone();
        spawn_forever(async move {
            let result = detail::load_detail(&backend, event_id).await;

            if let Some(notice) = controller.write().complete_open(ticket, result) {
                notify(toasts, notice);
            }
        });
    })
}

/// Callback submitting the comment typed in the open detail view.
pub fn use_comment_submitter() -> Callback<()> {
    let mut controller = use_context::<Signal<DetailController>>();
    let toasts = use_context::<Signal<ToastState>>();
    let mut session = use_context::<Signal<SessionState>>();
    let backend = use_context::<SupabaseClient>();

    use_callback(move |_: ()| {
        let author = session.read().user.clone();

        let ticket = match controller.write().request_submit(author.as_ref()) {
            Ok(Some(ticket)) => ticket,
            Ok(None) => return,
            Err(err) => {
                notify(toasts, Notice::from(&err));
                return;
            }
        };

        let backend = backend.clone();
        spawn_forever(async move {
            let result = detail::submit_comment(&backend, &ticket).await;

            if result.session_expired() {
                session.set(SessionState::signed_out());
            }

            if let Some(notice) = controller.write().complete_submit(ticket, result) {
                notify(toasts, notice);
            }
        });
    })
}
