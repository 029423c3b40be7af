//! In-memory stand-ins for the hosted backend.

pub mod auth;
pub mod filter;
pub mod storage;
pub mod store;

use entity::{
    backend::{AuthProvider, AuthUser, DataStore, FileUpload, ObjectStorage, SignUp, StoreError},
    query::Select,
};
use serde_json::Value;

pub use auth::MemoryAuth;
pub use storage::MemoryStorage;
pub use store::{MemoryStore, StoreRequest};

/// Row store, auth provider and object storage behind one handle, like the real client.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    pub store: MemoryStore,
    pub auth: MemoryAuth,
    pub storage: MemoryStorage,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for MemoryBackend {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError> {
        self.store.select(query).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        self.store.insert(table, row).await
    }
}

impl AuthProvider for MemoryBackend {
    async fn current_user(&self) -> Result<Option<AuthUser>, StoreError> {
        self.auth.current_user().await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, StoreError> {
        self.auth.sign_in(email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SignUp, StoreError> {
        self.auth.sign_up(email, password, name).await
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        self.auth.sign_out().await
    }
}

impl ObjectStorage for MemoryBackend {
    async fn upload(&self, path: &str, file: &FileUpload) -> Result<String, StoreError> {
        self.storage.upload(path, file).await
    }

    fn public_url(&self, path: &str) -> String {
        self.storage.public_url(path)
    }
}
