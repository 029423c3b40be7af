//! Event detail view: open, comment, dismiss.
//!
//! [`DetailController`] is a plain state machine. Asynchronous work happens outside it:
//! a `request_*` call hands out a ticket, the caller runs [`load_detail`] or
//! [`submit_comment`], and the matching `complete_*` call applies the result only if the
//! ticket still describes what is on screen.
//!
//! ```text
//! Closed --open--> Loading --ok--> Open --submit--> Open{submitting} --done--> Open
//!                     |  \--err--> Closed + notice                     \--err--> Open + notice
//! Open --dismiss--> Closed
//! ```

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use dioxus_logger::tracing;
use entity::backend::{AuthUser, DataStore};

use crate::{
    client::{
        error::Error,
        service::{comment::validate_body, CommentService, EventService},
        store::toast::Notice,
    },
    model::{comment::CommentView, event::EventDetail},
};

/// An open detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenDetail {
    pub detail: EventDetail,
    /// Newest first.
    pub comments: Vec<CommentView>,
    /// Comment input as typed.
    pub draft: String,
    pub submitting: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        event_id: i64,
    },
    Open(OpenDetail),
}

/// Tag of an outstanding detail request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub event_id: i64,
    seq: u64,
}

/// Tag of an outstanding comment submission, carrying what to post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub event_id: i64,
    pub author: AuthUser,
    pub body: String,
    seq: u64,
}

/// Outcome of [`submit_comment`].
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitResult {
    /// Posted; holds the re-fetched comments.
    Posted(Vec<CommentView>),
    /// Posted, but the comments could not be re-fetched.
    PostedReloadFailed(Error),
    /// Nothing was posted.
    Failed(Error),
}

impl SubmitResult {
    /// Whether the store rejected the session, so the user is no longer signed in.
    pub fn session_expired(&self) -> bool {
        matches!(self, Self::Failed(Error::AuthRequired))
    }
}

#[derive(Debug, Default)]
pub struct DetailController {
    state: DetailState,
    seq: u64,
    /// Event id to the sequence number of its outstanding request.
    in_flight: HashMap<i64, u64>,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn open_detail(&self) -> Option<&OpenDetail> {
        match &self.state {
            DetailState::Open(open) => Some(open),
            _ => None,
        }
    }

    /// Whether a detail request for `event_id` is outstanding; its trigger renders disabled.
    pub fn is_pending(&self, event_id: i64) -> bool {
        self.in_flight.contains_key(&event_id)
    }

    /// Starts loading the detail of `event_id`.
    ///
    /// Returns `None` while a request for the same event is still in flight. A request
    /// for another event supersedes whatever was loading or open.
    pub fn request_open(&mut self, event_id: i64) -> Option<Ticket> {
        if self.in_flight.contains_key(&event_id) {
            tracing::debug!("Ignoring repeated open of event {}", event_id);
            return None;
        }

        self.seq += 1;
        self.in_flight.insert(event_id, self.seq);
        self.state = DetailState::Loading { event_id };

        Some(Ticket {
            event_id,
            seq: self.seq,
        })
    }

    /// Applies the result of a detail request.
    ///
    /// Results of superseded or dismissed requests are discarded. A failure closes the
    /// view and yields the notification to show.
    pub fn complete_open(
        &mut self,
        ticket: Ticket,
        result: Result<(EventDetail, Vec<CommentView>), Error>,
    ) -> Option<Notice> {
        if self.in_flight.get(&ticket.event_id) == Some(&ticket.seq) {
            self.in_flight.remove(&ticket.event_id);
        }

        let current = ticket.seq == self.seq
            && matches!(self.state, DetailState::Loading { event_id } if event_id == ticket.event_id);
        if !current {
            tracing::debug!("Discarding stale detail of event {}", ticket.event_id);
            return None;
        }

        match result {
            Ok((detail, comments)) => {
                self.state = DetailState::Open(OpenDetail {
                    detail,
                    comments,
                    draft: String::new(),
                    submitting: false,
                });
                None
            }
            Err(err) => {
                tracing::error!("Failed to load event {}: {}", ticket.event_id, err);
                self.state = DetailState::Closed;
                Some(Notice::from(&err))
            }
        }
    }

    /// Closes the view; responses still in flight for it are discarded and their
    /// triggers released.
    pub fn dismiss(&mut self) {
        self.seq += 1;
        self.in_flight.clear();
        self.state = DetailState::Closed;
    }

    pub fn update_draft(&mut self, text: String) {
        if let DetailState::Open(open) = &mut self.state {
            if !open.submitting {
                open.draft = text;
            }
        }
    }

    /// Starts submitting the typed comment as `author`.
    ///
    /// # Returns
    /// - `Ok(Some(SubmitTicket))` - Submission started
    /// - `Ok(None)` - No open view, or a submission is already running
    /// - `Err(Error::Validation)` - The comment is blank; nothing is sent
    /// - `Err(Error::AuthRequired)` - No signed-in user; nothing is sent
    pub fn request_submit(&mut self, author: Option<&AuthUser>) -> Result<Option<SubmitTicket>, Error> {
        let DetailState::Open(open) = &mut self.state else {
            return Ok(None);
        };
        if open.submitting {
            return Ok(None);
        }

        let body = validate_body(&open.draft)?.to_string();
        let author = author.ok_or(Error::AuthRequired)?.clone();

        open.submitting = true;

        Ok(Some(SubmitTicket {
            event_id: open.detail.event.id,
            author,
            body,
            seq: self.seq,
        }))
    }

    /// Applies the outcome of a submission.
    ///
    /// Discarded when the view was dismissed or switched to another event meanwhile.
    /// The input is cleared whenever the comment was stored and kept otherwise.
    pub fn complete_submit(&mut self, ticket: SubmitTicket, result: SubmitResult) -> Option<Notice> {
        let seq = self.seq;
        let open = match &mut self.state {
            DetailState::Open(open) if seq == ticket.seq && open.detail.event.id == ticket.event_id => open,
            _ => {
                tracing::debug!("Discarding comment result for closed event {}", ticket.event_id);
                return None;
            }
        };

        open.submitting = false;

        match result {
            SubmitResult::Posted(comments) => {
                open.comments = comments;
                open.draft.clear();
                Some(Notice::success("Comentario publicado."))
            }
            SubmitResult::PostedReloadFailed(err) => {
                tracing::error!("Comment posted but reload of event {} failed: {}", ticket.event_id, err);
                open.draft.clear();
                Some(Notice::from(&err))
            }
            SubmitResult::Failed(err) => {
                tracing::error!("Failed to post comment on event {}: {}", ticket.event_id, err);
                Some(Notice::from(&err))
            }
        }
    }
}

/// Fetches an event and its comments for the detail view.
pub async fn load_detail<B: DataStore>(
    backend: &B,
    event_id: i64,
) -> Result<(EventDetail, Vec<CommentView>), Error> {
    let detail = EventService::new(backend).fetch_event_detail(event_id).await?;
    let comments = CommentService::new(backend).fetch_comments(event_id).await?;

    Ok((detail, comments))
}

/// Posts the comment of `ticket`, then re-fetches the comments of its event.
pub async fn submit_comment<B: DataStore>(backend: &B, ticket: &SubmitTicket) -> SubmitResult {
    let comment_service = CommentService::new(backend);

    if let Err(err) = comment_service
        .post_comment(ticket.event_id, Some(&ticket.author), &ticket.body)
        .await
    {
        return SubmitResult::Failed(err);
    }

    match comment_service.fetch_comments(ticket.event_id).await {
        Ok(comments) => SubmitResult::Posted(comments),
        Err(err) => SubmitResult::PostedReloadFailed(err),
    }
}
