//! Where the session survives page reloads.

use std::{cell::RefCell, rc::Rc};

use super::auth::Session;

/// Local storage key of the persisted session.
pub const SESSION_KEY: &str = "kalendo-session";

/// Durable home of the session between page loads.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Browser `localStorage`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "web")]
impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        use dioxus_logger::tracing;
        use gloo_storage::{errors::StorageError, LocalStorage, Storage};

        match LocalStorage::get::<Session>(SESSION_KEY) {
            Ok(session) => Some(session),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                tracing::warn!("Discarding unreadable stored session: {}", err);
                LocalStorage::delete(SESSION_KEY);
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        use dioxus_logger::tracing;
        use gloo_storage::{LocalStorage, Storage};

        if let Err(err) = LocalStorage::set(SESSION_KEY, session) {
            tracing::warn!("Failed to persist session: {}", err);
        }
    }

    fn clear(&self) {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::delete(SESSION_KEY);
    }
}

/// Session kept for the lifetime of the process; clones share it.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    session: Rc<RefCell<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(session: Session) -> Self {
        Self {
            session: Rc::new(RefCell::new(Some(session))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.session.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.borrow_mut() = None;
    }
}

/// The store the app uses: `localStorage` in the browser build, memory otherwise.
pub fn default_store() -> Rc<dyn SessionStore> {
    #[cfg(feature = "web")]
    {
        Rc::new(LocalSessionStore)
    }

    #[cfg(not(feature = "web"))]
    {
        Rc::new(MemorySessionStore::new())
    }
}
