//! `events` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TABLE: &str = "events";

/// Column names of the `events` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Id,
    Title,
    Description,
    Date,
    Location,
    ImageUrl,
    UserId,
}

impl Column {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::Date => "date",
            Self::Location => "location",
            Self::ImageUrl => "image_url",
            Self::UserId => "user_id",
        }
    }
}

impl AsRef<str> for Column {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A row of the `events` table as returned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "crate::timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    /// Relative storage path of the event image; older rows hold a full URL.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Insert payload for the `events` table; `id` is assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    #[serde(with = "crate::timestamp")]
    pub date: DateTime<Utc>,
    pub location: String,
    pub image_url: Option<String>,
    pub user_id: String,
}
