//! Supabase implementation of the backend traits.
//!
//! One [`SupabaseClient`] talks to the row API (PostgREST), the auth API (GoTrue) and the
//! storage API of a project. Endpoint helpers in the submodules build plain
//! [`http::HttpRequest`] values so the wire format is testable without a browser; only
//! [`http::send`] touches the network.
//!
//! The session is mirrored into a [`persist::SessionStore`] (`localStorage` in the
//! browser) and restored from it on construction. A request rejected with 401 is retried
//! once after exchanging the refresh token.

pub mod auth;
pub mod http;
pub mod persist;
pub mod rest;
pub mod storage;

use std::{cell::RefCell, rc::Rc};

use dioxus_logger::tracing;
use entity::{
    backend::{AuthProvider, AuthUser, DataStore, FileUpload, ObjectStorage, SignUp, StoreError},
    query::Select,
};
use serde_json::Value;

use crate::client::config::Config;

use self::{
    auth::Session,
    http::{HttpRequest, HttpResponse},
    persist::SessionStore,
};

#[derive(Clone)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    bucket: String,
    session: Rc<RefCell<Option<Session>>>,
    store: Rc<dyn SessionStore>,
}

impl PartialEq for SupabaseClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl SupabaseClient {
    pub fn new(config: &Config) -> Self {
        Self::with_store(config, persist::default_store())
    }

    /// Client restoring its session from `store` and saving every change back to it.
    pub fn with_store(config: &Config, store: Rc<dyn SessionStore>) -> Self {
        let session = store.load();
        if let Some(session) = &session {
            tracing::debug!("Restored session of {}", session.user.id);
        }

        Self {
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
            bucket: config.image_bucket.clone(),
            session: Rc::new(RefCell::new(session)),
            store,
        }
    }

    /// Adds the API key and the bearer token of the session, or of the anon key.
    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        let token = self
            .session
            .borrow()
            .as_ref()
            .map(|session| session.access_token.clone())
            .unwrap_or_else(|| self.anon_key.clone());

        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", token))
    }

    /// Sends `request`; a 401 under a session is retried once with a refreshed token.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        let response = http::send(self.authorize(request.clone())).await?;

        if response.status != 401 || !self.refresh_session().await? {
            return Ok(response);
        }

        http::send(self.authorize(request)).await
    }

    /// Exchanges the refresh token for a new session.
    ///
    /// # Returns
    /// - `Ok(true)` - A new session is in place
    /// - `Ok(false)` - No refresh token, or it was rejected; the session is cleared
    /// - `Err(StoreError::Transport)` - The refresh request never completed
    async fn refresh_session(&self) -> Result<bool, StoreError> {
        let refresh_token = self
            .session
            .borrow()
            .as_ref()
            .and_then(|session| session.refresh_token.clone());

        let Some(refresh_token) = refresh_token else {
            return Ok(false);
        };

        let request = auth::refresh_request(&self.base_url, &refresh_token)?
            .header("apikey", &self.anon_key);
        let response = http::send(request).await?;

        match response.into_success().and_then(|body| auth::parse_session(&body)) {
            Ok(session) => {
                tracing::debug!("Refreshed session of {}", session.user.id);
                self.set_session(Some(session));
                Ok(true)
            }
            Err(err) => {
                tracing::info!("Session refresh rejected, signing out locally: {}", err);
                self.set_session(None);
                Ok(false)
            }
        }
    }

    fn set_session(&self, session: Option<Session>) {
        match &session {
            Some(session) => self.store.save(session),
            None => self.store.clear(),
        }
        *self.session.borrow_mut() = session;
    }
}

impl DataStore for SupabaseClient {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(
            "Selecting from {} with {} filter(s)",
            query.table,
            query.filters.len()
        );

        let request = rest::select_request(&self.base_url, query)?;
        let body = self.send(request).await?.into_success()?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        tracing::debug!("Inserting into {}", table);

        let request = rest::insert_request(&self.base_url, table, &row)?;
        let body = self.send(request).await?.into_success()?;

        // Representation of a single-row insert is a one-element array.
        match serde_json::from_str::<Value>(&body)? {
            Value::Array(mut rows) if !rows.is_empty() => Ok(rows.swap_remove(0)),
            Value::Array(_) => Err(StoreError::Decode(format!(
                "Insert into {} returned no row",
                table
            ))),
            row => Ok(row),
        }
    }
}

impl AuthProvider for SupabaseClient {
    async fn current_user(&self) -> Result<Option<AuthUser>, StoreError> {
        if self.session.borrow().is_none() {
            return Ok(None);
        }

        let response = self.send(auth::user_request(&self.base_url)?).await?;

        if response.status == 401 {
            tracing::info!("Session expired, signing out locally");
            self.set_session(None);
            return Ok(None);
        }

        let user = auth::parse_user(&response.into_success()?)?;
        Ok(Some(user))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, StoreError> {
        let request = auth::sign_in_request(&self.base_url, email, password)?;
        let body = self.send(request).await?.into_success()?;

        let session = auth::parse_session(&body)?;
        let user = session.user.clone();
        self.set_session(Some(session));

        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SignUp, StoreError> {
        let request = auth::sign_up_request(&self.base_url, email, password, name)?;
        let body = self.send(request).await?.into_success()?;

        let (outcome, session) = auth::parse_sign_up(&body)?;
        if session.is_some() {
            self.set_session(session);
        }

        Ok(outcome)
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        if self.session.borrow().is_none() {
            return Ok(());
        }

        let result = self
            .send(auth::sign_out_request(&self.base_url)?)
            .await
            .and_then(HttpResponse::into_success);

        // The local session ends even when the revocation request fails.
        self.set_session(None);
        result.map(|_| ())
    }
}

impl ObjectStorage for SupabaseClient {
    async fn upload(&self, path: &str, file: &FileUpload) -> Result<String, StoreError> {
        tracing::debug!("Uploading {} ({} bytes)", path, file.bytes.len());

        let request = storage::upload_request(
            &self.base_url,
            &self.bucket,
            path,
            &file.content_type,
            file.bytes.clone(),
        )?;
        self.send(request).await?.into_success()?;

        Ok(path.to_string())
    }

    fn public_url(&self, path: &str) -> String {
        storage::public_object_url(&self.base_url, &self.bucket, path)
            .map(String::from)
            .unwrap_or_else(|_| format!("{}/storage/v1/object/public/{}/{}", self.base_url, self.bucket, path))
    }
}
