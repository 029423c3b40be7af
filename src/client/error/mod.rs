//! Error types for the Kalendo front-end.
//!
//! The query layer returns [`Error`] from every operation. Controllers catch it at the
//! boundary of a user action and turn it into one notification through
//! [`Error::user_message`]; nothing is retried.

pub mod config;

use entity::backend::StoreError;
use thiserror::Error;

pub use config::ConfigError;

/// Main error type of the front-end.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The queried entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// User input is empty or malformed; carries the message shown to the user.
    #[error("Invalid input: {0}")]
    Validation(String),
    /// The action needs a signed-in user.
    #[error("Authentication required")]
    AuthRequired,
    /// Network or service failure, including malformed responses.
    #[error(transparent)]
    Transport(#[from] StoreError),
    /// Build-time configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Decoding a store row failed; the response was malformed.
    pub fn decode(err: serde_json::Error) -> Self {
        Self::Transport(StoreError::Decode(err.to_string()))
    }

    /// Maps a store failure, turning credential rejections into [`Error::AuthRequired`].
    pub fn from_store_auth(err: StoreError) -> Self {
        if err.is_unauthorized() {
            Self::AuthRequired
        } else {
            Self::Transport(err)
        }
    }

    /// Text of the notification shown for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(what) => format!("No se encontró {}.", what),
            Self::Validation(message) => message.clone(),
            Self::AuthRequired => "Debes iniciar sesión para continuar.".to_string(),
            Self::Transport(StoreError::Service { message, .. }) => {
                format!("El servidor rechazó la solicitud: {}", message)
            }
            Self::Transport(_) => {
                "No se pudo conectar con el servidor. Inténtalo de nuevo.".to_string()
            }
            Self::Config(_) => "La aplicación no está configurada correctamente.".to_string(),
        }
    }
}
