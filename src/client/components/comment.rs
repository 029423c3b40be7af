use dioxus::prelude::*;

use crate::client::view::CommentItemView;

#[component]
pub fn CommentItem(comment: CommentItemView) -> Element {
    rsx!(
        li { class: "comment border-b border-base-300 py-2",
            p { class: "font-semibold", "{comment.author_label}" }
            p { class: "text-xs opacity-60", "{comment.posted_label}" }
            p { class: "whitespace-pre-line", "{comment.body}" }
        }
    )
}

/// Comments in the given order; an empty-state line when there are none.
#[component]
pub fn CommentList(comments: Vec<CommentItemView>) -> Element {
    if comments.is_empty() {
        return rsx!(
            p { class: "opacity-70", "Todavía no hay comentarios. ¡Sé el primero!" }
        );
    }

    rsx!(
        ul { class: "flex flex-col",
            for comment in comments {
                CommentItem { key: "{comment.id}", comment: comment.clone() }
            }
        }
    )
}

/// Comment input for signed-in users, or a prompt to sign in.
#[component]
pub fn CommentForm(
    draft: String,
    submitting: bool,
    signed_in: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    if !signed_in {
        return rsx!(
            p { class: "alert", "Inicia sesión para dejar un comentario." }
        );
    }

    rsx!(
        form {
            class: "flex flex-col gap-2",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            textarea {
                class: "textarea textarea-bordered w-full",
                placeholder: "Escribe un comentario...",
                disabled: submitting,
                value: "{draft}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            button {
                class: "btn btn-primary self-end",
                r#type: "submit",
                disabled: submitting,
                if submitting { "Publicando..." } else { "Publicar comentario" }
            }
        }
    )
}
