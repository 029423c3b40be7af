//! Comment reads and writes.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use dioxus_logger::tracing;
use entity::{
    backend::{AuthProvider, AuthUser, DataStore},
    comment,
    query::{Direction, Select},
};

use crate::{
    client::{
        error::Error,
        service::{decode_row, decode_rows, UserService},
    },
    model::comment::CommentView,
};

const EMPTY_COMMENT: &str = "El comentario no puede estar vacío.";

/// Service for the comments of an event.
pub struct CommentService<'a, B> {
    backend: &'a B,
}

impl<'a, B: DataStore> CommentService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Retrieves the comments of an event with their authors, newest first.
    ///
    /// Authors are resolved in one request over the distinct author ids. When that request
    /// fails every comment keeps an unresolved author rather than failing the fetch.
    ///
    /// # Returns
    /// - `Ok(Vec<CommentView>)` - Comments ordered by creation time then id, descending;
    ///   empty when the event has none
    /// - `Err(Error::Transport)` - The comments request failed or a row was malformed
    pub async fn fetch_comments(&self, event_id: i64) -> Result<Vec<CommentView>, Error> {
        let select = Select::from(comment::TABLE)
            .eq(comment::Column::EventId, event_id)
            .order_by(comment::Column::CreatedAt, Direction::Descending)
            .order_by(comment::Column::Id, Direction::Descending);

        let comments: Vec<comment::Model> = decode_rows(self.backend.select(&select).await?)?;

        let author_ids = comments.iter().filter_map(|c| c.user_id.as_deref());
        let authors = match UserService::new(self.backend).fetch_profiles(author_ids).await {
            Ok(authors) => authors,
            Err(err) => {
                tracing::warn!("Failed to resolve comment authors of event {}: {}", event_id, err);
                HashMap::new()
            }
        };

        Ok(comments
            .into_iter()
            .map(|comment| {
                let author = comment
                    .user_id
                    .as_ref()
                    .and_then(|id| authors.get(id).cloned());
                CommentView { comment, author }
            })
            .collect())
    }

    /// Appends a comment by `author` to an event.
    ///
    /// The body is checked before the author and both before any request is sent. The
    /// stored body is trimmed. Nothing is cached; callers re-fetch the comments.
    ///
    /// # Arguments
    /// - `event_id` - ID of the commented event
    /// - `author` - Signed-in user, `None` when there is no session
    /// - `body` - Comment text as typed
    ///
    /// # Returns
    /// - `Ok(comment::Model)` - The stored comment
    /// - `Err(Error::Validation)` - Body empty after trimming
    /// - `Err(Error::AuthRequired)` - No author, or the store rejected the session
    /// - `Err(Error::Transport)` - Request failed or the row was malformed
    pub async fn post_comment(
        &self,
        event_id: i64,
        author: Option<&AuthUser>,
        body: &str,
    ) -> Result<comment::Model, Error> {
        let body = validate_body(body)?;
        let author = author.ok_or(Error::AuthRequired)?;

        let new_comment = comment::NewComment {
            event_id,
            user_id: author.id.clone(),
            body: body.to_string(),
        };
        let row = serde_json::to_value(&new_comment).map_err(Error::decode)?;

        let stored = self
            .backend
            .insert(comment::TABLE, row)
            .await
            .map_err(Error::from_store_auth)?;

        tracing::debug!("Posted comment on event {}", event_id);

        decode_row(stored)
    }
}

impl<'a, B: DataStore + AuthProvider> CommentService<'a, B> {
    /// Appends a comment by the user of the current session.
    ///
    /// Same contract as [`CommentService::post_comment`]; the session is only looked up
    /// once the body is valid.
    pub async fn post_comment_as_current_user(
        &self,
        event_id: i64,
        body: &str,
    ) -> Result<comment::Model, Error> {
        validate_body(body)?;

        let author = self
            .backend
            .current_user()
            .await
            .map_err(Error::from_store_auth)?;

        self.post_comment(event_id, author.as_ref(), body).await
    }
}

/// Trimmed body, or a validation error when nothing is left.
pub(crate) fn validate_body(body: &str) -> Result<&str, Error> {
    let body = body.trim();
    if body.is_empty() {
        return Err(Error::Validation(EMPTY_COMMENT.to_string()));
    }
    Ok(body)
}
