//! `comments` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TABLE: &str = "comments";

/// Column names of the `comments` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Id,
    EventId,
    UserId,
    Body,
    CreatedAt,
}

impl Column {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::EventId => "event_id",
            Self::UserId => "user_id",
            Self::Body => "comment",
            Self::CreatedAt => "created_at",
        }
    }
}

impl AsRef<str> for Column {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A row of the `comments` table as returned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub event_id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(rename = "comment", default)]
    pub body: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `comments` table; `id` and `created_at` are assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewComment {
    pub event_id: i64,
    pub user_id: String,
    #[serde(rename = "comment")]
    pub body: String,
}
