//! Factory functions for row fixtures.
//!
//! Pure constructors with stable test values; nothing here touches a backend.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use entity::{backend::AuthUser, comment, event, user};

/// Midnight UTC of the given calendar day.
///
/// # Panics
/// On an invalid calendar date, which is a bug in the test itself.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid fixture date")
        .and_hms_opt(0, 0, 0)
        .expect("valid fixture time")
        .and_utc()
}

/// The given instant in UTC.
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid fixture datetime")
}

/// A profile row; the e-mail is derived from the id.
pub fn user(id: &str, name: &str) -> user::Model {
    user::Model {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
    }
}

/// The auth account matching a [`user`] fixture.
pub fn auth_user(id: &str) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        email: format!("{id}@example.com"),
    }
}

/// An event without image or owner, located at "Sala principal".
pub fn event(id: i64, title: &str, date: DateTime<Utc>) -> event::Model {
    event::Model {
        id,
        title: title.to_string(),
        description: format!("Descripción de {title}"),
        date,
        location: "Sala principal".to_string(),
        image_url: None,
        user_id: None,
    }
}

/// A comment on `event_id` by `user_id`.
pub fn comment(
    id: i64,
    event_id: i64,
    user_id: Option<&str>,
    body: &str,
    created_at: DateTime<Utc>,
) -> comment::Model {
    comment::Model {
        id,
        event_id,
        user_id: user_id.map(str::to_string),
        body: body.to_string(),
        created_at,
    }
}
