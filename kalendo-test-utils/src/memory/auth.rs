use std::sync::{Arc, Mutex, MutexGuard};

use entity::backend::{AuthProvider, AuthUser, SignUp, StoreError};

struct Account {
    user: AuthUser,
    password: String,
}

#[derive(Default)]
struct AuthState {
    accounts: Vec<Account>,
    current: Option<AuthUser>,
    require_confirmation: bool,
    failure: Option<StoreError>,
    calls: usize,
}

/// In-memory auth provider with e-mail/password accounts and a single session.
#[derive(Clone, Default)]
pub struct MemoryAuth {
    state: Arc<Mutex<AuthState>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, AuthState> {
        self.state.lock().expect("memory auth lock poisoned")
    }

    /// Registers an account that can sign in with `password`.
    pub fn add_account(&self, user: AuthUser, password: &str) {
        self.lock().accounts.push(Account {
            user,
            password: password.to_string(),
        });
    }

    /// Starts a session for `user` without going through sign-in.
    pub fn set_current(&self, user: Option<AuthUser>) {
        self.lock().current = user;
    }

    /// Makes sign-ups wait for e-mail confirmation instead of starting a session.
    pub fn require_confirmation(&self) {
        self.lock().require_confirmation = true;
    }

    /// Makes every following call fail with `error`.
    pub fn fail_with(&self, error: StoreError) {
        self.lock().failure = Some(error);
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    fn begin_call(&self) -> Result<MutexGuard<'_, AuthState>, StoreError> {
        let mut state = self.lock();
        state.calls += 1;

        if let Some(error) = state.failure.clone() {
            return Err(error);
        }

        Ok(state)
    }
}

impl AuthProvider for MemoryAuth {
    async fn current_user(&self) -> Result<Option<AuthUser>, StoreError> {
        let state = self.begin_call()?;
        Ok(state.current.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, StoreError> {
        let mut state = self.begin_call()?;

        let user = state
            .accounts
            .iter()
            .find(|account| account.user.email == email && account.password == password)
            .map(|account| account.user.clone())
            .ok_or_else(|| StoreError::Service {
                status: 400,
                message: "Invalid login credentials".to_string(),
            })?;

        state.current = Some(user.clone());
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str, _name: &str) -> Result<SignUp, StoreError> {
        let mut state = self.begin_call()?;

        if state.accounts.iter().any(|account| account.user.email == email) {
            return Err(StoreError::Service {
                status: 422,
                message: "User already registered".to_string(),
            });
        }

        let user = AuthUser {
            id: format!("user-{}", state.accounts.len() + 1),
            email: email.to_string(),
        };
        state.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });

        if state.require_confirmation {
            Ok(SignUp::PendingConfirmation(user))
        } else {
            state.current = Some(user.clone());
            Ok(SignUp::SignedIn(user))
        }
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        let mut state = self.begin_call()?;
        state.current = None;
        Ok(())
    }
}
