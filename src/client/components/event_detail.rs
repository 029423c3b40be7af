use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendarDays, FaLocationDot, FaUser};
use dioxus_free_icons::Icon;

use crate::client::{
    components::comment::{CommentForm, CommentList},
    view::EventDetailView,
};

/// Full event: image, title, date, location, description, then the comments section.
#[component]
pub fn EventDetailPanel(
    view: EventDetailView,
    draft: String,
    submitting: bool,
    signed_in: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx!(
        article { class: "flex flex-col gap-4",
            img {
                class: "w-full max-h-80 object-cover rounded",
                src: "{view.image_src}",
                alt: "{view.title}",
            }
            h2 { class: "text-2xl font-bold", "{view.title}" }
            p { class: "flex items-center gap-2",
                Icon { width: 16, height: 16, icon: FaCalendarDays }
                "{view.date_label}"
            }
            p { class: "flex items-center gap-2",
                Icon { width: 16, height: 16, icon: FaLocationDot }
                "{view.location}"
            }
            if let Some(author) = &view.author_name {
                p { class: "flex items-center gap-2 text-sm opacity-70",
                    Icon { width: 14, height: 14, icon: FaUser }
                    "Organizado por {author}"
                }
            }
            p { class: "whitespace-pre-line", "{view.description}" }
            section { class: "flex flex-col gap-2",
                h3 { class: "text-lg font-semibold", "Comentarios" }
                CommentList { comments: view.comments.clone() }
                CommentForm { draft, submitting, signed_in, on_input, on_submit }
            }
        }
    )
}
