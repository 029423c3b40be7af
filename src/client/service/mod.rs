//! Query layer.
//!
//! Services borrow a backend implementing the traits of [`entity::backend`] and turn row
//! reads and writes into typed results. They hold no state between calls; every view is
//! rebuilt from a fresh fetch.

pub mod auth;
pub mod comment;
pub mod event;
pub mod user;

pub use auth::AuthService;
pub use comment::CommentService;
pub use event::EventService;
pub use user::UserService;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::error::Error;

/// Decodes store rows into table models.
pub(crate) fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, Error> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(Error::decode))
        .collect()
}

pub(crate) fn decode_row<T: DeserializeOwned>(row: Value) -> Result<T, Error> {
    serde_json::from_value(row).map_err(Error::decode)
}
