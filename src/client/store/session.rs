use entity::backend::AuthUser;

/// Shared session signal. Auth changes write it, and every reader re-renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<AuthUser>,
    /// Whether the session has been looked up since the app started.
    pub fetched: bool,
}

impl SessionState {
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            fetched: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            fetched: true,
        }
    }
}
