//! Interfaces of the hosted backend consumed by the front-end.
//!
//! Everything runs on the browser's single thread, so the futures carry no `Send` bound.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::query::Select;

/// Failure reported by one of the backend collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The request never produced a response (network failure, blocked request).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("Request rejected with status {status}: {message}")]
    Service { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Whether the service refused the caller's credentials (HTTP 401 or 403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Service { status: 401 | 403, .. })
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// The account currently authenticated with the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Result of a sign-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUp {
    /// The account was created and a session started.
    SignedIn(AuthUser),
    /// The account was created but the e-mail address must be confirmed before signing in.
    PendingConfirmation(AuthUser),
}

impl SignUp {
    pub fn user(&self) -> &AuthUser {
        match self {
            Self::SignedIn(user) | Self::PendingConfirmation(user) => user,
        }
    }
}

/// A file picked by the user, ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Row store: filtered reads and single-row inserts.
#[allow(async_fn_in_trait)]
pub trait DataStore {
    /// Runs a read and returns the matching rows as JSON objects.
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError>;

    /// Inserts one row into `table` and returns the row as stored.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError>;
}

/// Auth provider holding the browser session.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    /// The signed-in account, `None` when there is no valid session.
    async fn current_user(&self) -> Result<Option<AuthUser>, StoreError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, StoreError>;

    /// Creates an account, storing `name` as account metadata.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SignUp, StoreError>;

    async fn sign_out(&self) -> Result<(), StoreError>;
}

/// Object storage for event images.
#[allow(async_fn_in_trait)]
pub trait ObjectStorage {
    /// Stores `file` under `path` and returns the stored path.
    async fn upload(&self, path: &str, file: &FileUpload) -> Result<String, StoreError>;

    /// Publicly reachable URL of a stored path.
    fn public_url(&self, path: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::StoreError;

    /// Expect only 401 and 403 service errors to count as unauthorized
    #[test]
    fn unauthorized_statuses() {
        let service = |status| StoreError::Service {
            status,
            message: "denied".to_string(),
        };

        assert!(service(401).is_unauthorized());
        assert!(service(403).is_unauthorized());
        assert!(!service(404).is_unauthorized());
        assert!(!StoreError::Transport("offline".to_string()).is_unauthorized());
    }
}
