use dioxus::prelude::*;
use dioxus_logger::tracing;
use entity::backend::FileUpload;

use crate::{
    client::{
        config::Config,
        controller::notify,
        service::EventService,
        store::toast::{Notice, ToastState},
        supabase::SupabaseClient,
    },
    model::event::EventDraft,
};

/// Form creating an event owned by the signed-in user, with an optional image.
#[component]
pub fn CreateEventForm(on_created: EventHandler<i64>) -> Element {
    let backend = use_context::<SupabaseClient>();
    let zone = use_context::<Config>().time_zone;
    let toasts = use_context::<Signal<ToastState>>();

    let mut draft = use_signal(EventDraft::default);
    let mut saving = use_signal(|| false);

    let pick_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            draft.write().image = None;
            return;
        };

        match file.read_bytes().await {
            Ok(bytes) => {
                let name = file.name();
                draft.write().image = Some(FileUpload {
                    content_type: file
                        .content_type()
                        .unwrap_or_else(|| "application/octet-stream".to_string()),
                    name,
                    bytes: bytes.to_vec(),
                });
            }
            Err(err) => {
                tracing::error!("Failed to read image {}: {}", file.name(), err);
                notify(toasts, Notice::error("No se pudo leer la imagen seleccionada."));
            }
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);

        let backend = backend.clone();
        let current = draft();
        spawn(async move {
            match EventService::new(&backend).in_zone(zone).create_event(&current).await {
                Ok(created) => {
                    notify(toasts, Notice::success("Evento creado."));
                    draft.set(EventDraft::default());
                    on_created.call(created.id);
                }
                Err(err) => {
                    tracing::error!("Failed to create event: {}", err);
                    notify(toasts, Notice::from(&err));
                }
            }
            saving.set(false);
        });
    };

    let current = draft.read().clone();

    rsx!(
        form {
            class: "card bg-base-100 shadow-sm w-full max-w-xl",
            onsubmit: submit,
            div { class: "card-body gap-2",
                h2 { class: "card-title", "Crear evento" }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Título",
                    value: "{current.title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Descripción",
                    value: "{current.description}",
                    oninput: move |evt| draft.write().description = evt.value(),
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "datetime-local",
                    value: "{current.date}",
                    oninput: move |evt| draft.write().date = evt.value(),
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Ubicación",
                    value: "{current.location}",
                    oninput: move |evt| draft.write().location = evt.value(),
                }
                input {
                    class: "file-input file-input-bordered w-full",
                    r#type: "file",
                    accept: "image/*",
                    onchange: pick_image,
                }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Guardando..." } else { "Crear evento" }
                    }
                }
            }
        }
    )
}
