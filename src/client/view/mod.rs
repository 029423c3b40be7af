//! View fragments.
//!
//! [`Renderer`] turns query results into plain display values: resolved image sources,
//! formatted dates, excerpts and author labels. Components only lay these out, so every
//! display rule lives here and is testable without a DOM.

use chrono::{DateTime, Utc};
use entity::{comment, event, user};

use crate::{
    client::{
        config::Config,
        util::{text::excerpt, ImageResolver, LongDate},
    },
    model::{comment::CommentView, event::EventDetail},
};

/// Label shown for comments whose author cannot be resolved.
pub const UNKNOWN_AUTHOR: &str = "Usuario desconocido";

/// Characters of the description shown on event cards.
pub const EXCERPT_LENGTH: usize = 120;

#[derive(Clone, Debug, PartialEq)]
pub struct EventCardView {
    pub id: i64,
    pub image_src: String,
    pub title: String,
    pub excerpt: String,
    pub date_label: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentItemView {
    pub id: i64,
    pub author_label: String,
    pub body: String,
    pub posted_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventDetailView {
    pub id: i64,
    pub image_src: String,
    pub title: String,
    pub date_label: String,
    pub location: String,
    pub description: String,
    pub author_name: Option<String>,
    /// Newest first, in the order fetched.
    pub comments: Vec<CommentItemView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Renderer {
    images: ImageResolver,
    dates: LongDate,
}

impl Renderer {
    pub fn new(config: &Config, default_placeholder: &str) -> Self {
        Self {
            images: ImageResolver::new(config, default_placeholder),
            dates: LongDate::from_config(config),
        }
    }

    pub fn dates(&self) -> &LongDate {
        &self.dates
    }

    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        self.dates.format(date)
    }

    pub fn render_event_card(&self, event: &event::Model) -> EventCardView {
        EventCardView {
            id: event.id,
            image_src: self.images.resolve(event.image_url.as_deref()),
            title: event.title.clone(),
            excerpt: excerpt(&event.description, EXCERPT_LENGTH),
            date_label: self.format_date(&event.date),
            location: event.location.clone(),
        }
    }

    pub fn render_event_detail(&self, detail: &EventDetail, comments: &[CommentView]) -> EventDetailView {
        let event = &detail.event;

        EventDetailView {
            id: event.id,
            image_src: self.images.resolve(event.image_url.as_deref()),
            title: event.title.clone(),
            date_label: self.format_date(&event.date),
            location: event.location.clone(),
            description: event.description.clone(),
            author_name: detail.author_name.clone(),
            comments: comments
                .iter()
                .map(|view| self.render_comment(&view.comment, view.author.as_ref()))
                .collect(),
        }
    }

    /// Never fails; an unresolved or nameless author gets [`UNKNOWN_AUTHOR`].
    pub fn render_comment(&self, comment: &comment::Model, author: Option<&user::Model>) -> CommentItemView {
        let author_label = author
            .map(|author| author.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
            .to_string();

        CommentItemView {
            id: comment.id,
            author_label,
            body: comment.body.clone(),
            posted_label: format!(
                "{} · {}",
                self.format_date(&comment.created_at),
                self.dates.time(&comment.created_at)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use kalendo_test_utils::prelude::*;

    use super::{Renderer, UNKNOWN_AUTHOR};
    use crate::{
        client::{config::Config, util::date::DisplayZone},
        model::{comment::CommentView, event::EventDetail},
    };

    fn renderer() -> Renderer {
        let mut config = Config::with_defaults("https://project.supabase.co", "anon").unwrap();
        config.time_zone = DisplayZone::utc();
        Renderer::new(&config, "/assets/event-placeholder.svg")
    }

    /// Expect a card with placeholder image, long date and untouched short description
    #[test]
    fn renders_event_card() {
        let event = factory::event(1, "Concert", factory::date(2025, 6, 5));

        let card = renderer().render_event_card(&event);

        assert_eq!(card.id, 1);
        assert_eq!(card.image_src, "/assets/event-placeholder.svg");
        assert_eq!(card.date_label, "jueves, 5 de junio de 2025");
        assert_eq!(card.excerpt, "Descripción de Concert");
    }

    /// Expect long descriptions to be cut to an excerpt on cards only
    #[test]
    fn card_excerpt_is_truncated() {
        let mut event = factory::event(1, "Concert", factory::date(2025, 6, 5));
        event.description = "a".repeat(200);

        let card = renderer().render_event_card(&event);

        assert_eq!(card.excerpt.chars().count(), 121);
        assert!(card.excerpt.ends_with('…'));
    }

    /// Expect the detail to keep comment order and resolve author labels
    #[test]
    fn renders_detail_with_comments() {
        let detail = EventDetail {
            event: factory::event(1, "Concert", factory::date(2025, 6, 5)),
            author_name: None,
        };
        let comments = vec![
            CommentView {
                comment: factory::comment(2, 1, Some("ana"), "Great!", factory::datetime(2025, 6, 2, 9, 15)),
                author: Some(factory::user("ana", "Ana")),
            },
            CommentView {
                comment: factory::comment(1, 1, Some("ghost"), "Hola", factory::date(2025, 6, 1)),
                author: None,
            },
        ];

        let view = renderer().render_event_detail(&detail, &comments);

        assert_eq!(view.comments.len(), 2);
        assert_eq!(view.comments[0].author_label, "Ana");
        assert_eq!(view.comments[0].posted_label, "lunes, 2 de junio de 2025 · 09:15");
        assert_eq!(view.comments[1].author_label, UNKNOWN_AUTHOR);
    }

    /// Expect a blank profile name to fall back to the unknown author label
    #[test]
    fn blank_author_name_is_unknown() {
        let comment = factory::comment(1, 1, Some("ana"), "Hola", factory::date(2025, 6, 1));
        let nameless = factory::user("ana", "  ");

        let item = renderer().render_comment(&comment, Some(&nameless));

        assert_eq!(item.author_label, "Usuario desconocido");
    }
}
