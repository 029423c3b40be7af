//! GoTrue endpoints and response decoding.

use entity::backend::{AuthUser, SignUp, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use super::http::{HttpRequest, Method};

/// An authenticated session held by the client and persisted between page loads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Exchanged for a new access token once the current one is rejected.
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

#[derive(Deserialize)]
struct UserDto {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl From<UserDto> for AuthUser {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct SessionDto {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: UserDto,
}

/// Sign-up answers either with a session or, while confirmation is pending, with the user
/// (bare or nested under `user`).
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpDto {
    Session(SessionDto),
    Nested { user: UserDto },
    Bare(UserDto),
}

fn auth_url(base_url: &str, endpoint: &str) -> Result<Url, StoreError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| StoreError::Transport(format!("Invalid base URL {}: {}", base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| StoreError::Transport(format!("Base URL {} cannot hold a path", base_url)))?
        .pop_if_empty()
        .extend(["auth", "v1", endpoint]);

    Ok(url)
}

pub fn sign_in_request(base_url: &str, email: &str, password: &str) -> Result<HttpRequest, StoreError> {
    let mut url = auth_url(base_url, "token")?;
    url.query_pairs_mut().append_pair("grant_type", "password");

    Ok(HttpRequest::new(Method::Post, url).json(&json!({
        "email": email,
        "password": password,
    })))
}

/// Sign-up request storing `name` as user metadata.
pub fn sign_up_request(
    base_url: &str,
    email: &str,
    password: &str,
    name: &str,
) -> Result<HttpRequest, StoreError> {
    let url = auth_url(base_url, "signup")?;

    Ok(HttpRequest::new(Method::Post, url).json(&json!({
        "email": email,
        "password": password,
        "data": { "name": name },
    })))
}

/// Exchanges `refresh_token` for a new session.
pub fn refresh_request(base_url: &str, refresh_token: &str) -> Result<HttpRequest, StoreError> {
    let mut url = auth_url(base_url, "token")?;
    url.query_pairs_mut().append_pair("grant_type", "refresh_token");

    Ok(HttpRequest::new(Method::Post, url).json(&json!({
        "refresh_token": refresh_token,
    })))
}

pub fn sign_out_request(base_url: &str) -> Result<HttpRequest, StoreError> {
    Ok(HttpRequest::new(Method::Post, auth_url(base_url, "logout")?))
}

pub fn user_request(base_url: &str) -> Result<HttpRequest, StoreError> {
    Ok(HttpRequest::new(Method::Get, auth_url(base_url, "user")?))
}

pub fn parse_session(body: &str) -> Result<Session, StoreError> {
    let dto: SessionDto = serde_json::from_str(body)?;

    Ok(Session {
        access_token: dto.access_token,
        refresh_token: dto.refresh_token,
        user: dto.user.into(),
    })
}

/// Decodes a sign-up response into its outcome and the session it started, if any.
pub fn parse_sign_up(body: &str) -> Result<(SignUp, Option<Session>), StoreError> {
    let dto: SignUpDto = serde_json::from_str(body)?;

    Ok(match dto {
        SignUpDto::Session(session) => {
            let user: AuthUser = session.user.into();
            let session = Session {
                access_token: session.access_token,
                refresh_token: session.refresh_token,
                user: user.clone(),
            };
            (SignUp::SignedIn(user), Some(session))
        }
        SignUpDto::Nested { user } | SignUpDto::Bare(user) => {
            (SignUp::PendingConfirmation(user.into()), None)
        }
    })
}

pub fn parse_user(body: &str) -> Result<AuthUser, StoreError> {
    let dto: UserDto = serde_json::from_str(body)?;
    Ok(dto.into())
}
