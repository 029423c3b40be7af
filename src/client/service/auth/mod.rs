//! Session operations against the auth provider.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use entity::{
    backend::{AuthProvider, AuthUser, DataStore},
    user,
};

use crate::{
    client::{error::Error, service::UserService},
    model::user::{Credentials, Registered, Registration},
};

/// Service for signing users in, up and out.
pub struct AuthService<'a, B> {
    backend: &'a B,
}

impl<'a, B: AuthProvider + DataStore> AuthService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// The signed-in user, `None` without a valid session.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, Error> {
        Ok(self.backend.current_user().await?)
    }

    /// Signs in with e-mail and password.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - The session was started
    /// - `Err(Error::Validation)` - E-mail or password blank; nothing was sent
    /// - `Err(Error::Transport)` - The provider rejected the credentials or was unreachable
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthUser, Error> {
        let email = credentials.email.trim();
        if email.is_empty() || credentials.password.is_empty() {
            return Err(Error::Validation(
                "Introduce tu correo y tu contraseña.".to_string(),
            ));
        }

        let user = self.backend.sign_in(email, &credentials.password).await?;
        tracing::info!("Signed in as {}", user.email);

        Ok(user)
    }

    /// Creates an account and its public profile.
    ///
    /// The display name travels with the sign-up as account metadata. The profile row is
    /// inserted afterwards; a failed insert is logged and reported through
    /// [`Registered::profile_saved`] without undoing the sign-up.
    ///
    /// # Returns
    /// - `Ok(Registered)` - Account created, signed in or waiting for e-mail confirmation
    /// - `Err(Error::Validation)` - A field is blank or the passwords differ
    /// - `Err(Error::Transport)` - The provider refused the sign-up or was unreachable
    pub async fn register(&self, registration: &Registration) -> Result<Registered, Error> {
        let name = registration.name.trim();
        let email = registration.email.trim();

        if name.is_empty() || email.is_empty() || registration.password.is_empty() {
            return Err(Error::Validation("Completa todos los campos.".to_string()));
        }
        if registration.password != registration.confirmation {
            return Err(Error::Validation("Las contraseñas no coinciden.".to_string()));
        }

        let sign_up = self
            .backend
            .sign_up(email, &registration.password, name)
            .await?;
        let account = sign_up.user();

        let profile = user::Model {
            id: account.id.clone(),
            name: name.to_string(),
            email: email.to_string(),
        };
        let profile_saved = match UserService::new(self.backend).create_profile(&profile).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("Failed to store profile of {}: {}", account.id, err);
                false
            }
        };

        tracing::info!("Registered {}", email);

        Ok(Registered {
            sign_up,
            profile_saved,
        })
    }

    pub async fn sign_out(&self) -> Result<(), Error> {
        self.backend.sign_out().await?;
        tracing::info!("Signed out");
        Ok(())
    }
}
