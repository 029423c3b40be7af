//! Declarative test builder.
//!
//! Fixtures and failure injections are queued on the builder and applied in one go by
//! `build()`, mirroring how a test describes the state of the hosted backend before acting.

use entity::{backend::StoreError, comment, event, user};

use crate::{
    constant::TEST_PASSWORD, error::TestError, fixtures::factory, setup::TestSetup,
};

/// Builder for an in-memory backend seeded with rows, accounts and failures.
///
/// # Example
///
/// ```no_run
/// use kalendo_test_utils::prelude::*;
///
/// # fn example() -> Result<(), TestError> {
/// let test = TestBuilder::new()
///     .with_user("ana", "Ana")
///     .with_event(factory::event(1, "Concert", factory::date(2025, 6, 5)))
///     .signed_in_as("ana")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TestBuilder {
    users: Vec<user::Model>,
    events: Vec<event::Model>,
    comments: Vec<comment::Model>,
    signed_in: Option<String>,
    require_confirmation: bool,
    failing_tables: Vec<(String, StoreError)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user with a profile row and an auth account.
    ///
    /// The account signs in with [`TEST_PASSWORD`] and the e-mail `<id>@example.com`.
    ///
    /// # Arguments
    /// - `id` - Auth provider id of the user
    /// - `name` - Display name stored in the profile row
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user(mut self, id: &str, name: &str) -> Self {
        self.users.push(factory::user(id, name));
        self
    }

    /// Add an event row.
    pub fn with_event(mut self, event: event::Model) -> Self {
        self.events.push(event);
        self
    }

    /// Add several event rows.
    pub fn with_events(mut self, events: impl IntoIterator<Item = event::Model>) -> Self {
        self.events.extend(events);
        self
    }

    /// Add a comment row.
    pub fn with_comment(mut self, comment: comment::Model) -> Self {
        self.comments.push(comment);
        self
    }

    /// Start a session for a user added with [`TestBuilder::with_user`].
    ///
    /// # Arguments
    /// - `id` - Id of a previously added user; `build()` fails with
    ///   [`TestError::UnknownUser`] otherwise
    pub fn signed_in_as(mut self, id: &str) -> Self {
        self.signed_in = Some(id.to_string());
        self
    }

    /// Make sign-ups wait for e-mail confirmation.
    pub fn with_email_confirmation(mut self) -> Self {
        self.require_confirmation = true;
        self
    }

    /// Make every request against `table` fail with `error`.
    pub fn with_failing_table(mut self, table: &str, error: StoreError) -> Self {
        self.failing_tables.push((table.to_string(), error));
        self
    }

    /// Apply every queued fixture and return the seeded backend.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Backend holding the queued rows, accounts and session
    /// - `Err(TestError::SerdeError)` - A fixture row failed to serialize
    /// - `Err(TestError::UnknownUser)` - `signed_in_as` names a user that was not added
    pub fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new();

        for user in &self.users {
            setup
                .store()
                .seed(user::TABLE, serde_json::to_value(user)?);
            setup
                .auth()
                .add_account(factory::auth_user(&user.id), TEST_PASSWORD);
        }

        for event in &self.events {
            setup
                .store()
                .seed(event::TABLE, serde_json::to_value(event)?);
        }

        for comment in &self.comments {
            setup
                .store()
                .seed(comment::TABLE, serde_json::to_value(comment)?);
        }

        if let Some(id) = self.signed_in {
            if !self.users.iter().any(|user| user.id == id) {
                return Err(TestError::UnknownUser(id));
            }
            setup.auth().set_current(Some(factory::auth_user(&id)));
        }

        if self.require_confirmation {
            setup.auth().require_confirmation();
        }

        for (table, error) in self.failing_tables {
            setup.store().fail_table(&table, error);
        }

        Ok(setup)
    }
}
