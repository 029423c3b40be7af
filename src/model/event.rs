use chrono::NaiveDate;
use entity::{backend::FileUpload, event};

/// An event with its owner's display name denormalized for the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct EventDetail {
    pub event: event::Model,
    pub author_name: Option<String>,
}

/// Search options of the events list. Unset options impose no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilters {
    /// Case-insensitive substring of the title or the description.
    pub search: Option<String>,
    /// Calendar day (UTC) the event takes place on.
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
}

impl EventFilters {
    /// Free-text search only; a blank term means no constraint.
    pub fn search(term: &str) -> Self {
        Self {
            search: non_blank(term),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.date.is_none() && self.location.is_none()
    }

    /// Normalizes blank text options to `None` and trims the rest.
    pub fn normalized(&self) -> Self {
        Self {
            search: self.search.as_deref().and_then(non_blank),
            date: self.date,
            location: self.location.as_deref().and_then(non_blank),
        }
    }
}

/// Create-event form input, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    /// Raw `datetime-local` or date input value.
    pub date: String,
    pub location: String,
    pub image: Option<FileUpload>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
