/// Sign-in form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

/// Result of a registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registered {
    pub sign_up: entity::backend::SignUp,
    /// Whether the `users` profile row was stored.
    pub profile_saved: bool,
}

impl Registered {
    pub fn is_signed_in(&self) -> bool {
        matches!(self.sign_up, entity::backend::SignUp::SignedIn(_))
    }
}
