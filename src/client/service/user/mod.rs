//! Profile reads and writes against the `users` table.

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};

use dioxus_logger::tracing;
use entity::{backend::DataStore, query::Select, user};

use crate::client::{
    error::Error,
    service::{decode_row, decode_rows},
};

/// Service for public user profiles.
pub struct UserService<'a, B> {
    backend: &'a B,
}

impl<'a, B: DataStore> UserService<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Retrieves the profile of `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(user::Model))` - Profile found
    /// - `Ok(None)` - No profile row for the id
    /// - `Err(Error::Transport)` - Request failed or the row was malformed
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Option<user::Model>, Error> {
        let select = Select::from(user::TABLE)
            .eq(user::Column::Id, user_id)
            .limit(1);

        let rows = self.backend.select(&select).await?;
        Ok(decode_rows::<user::Model>(rows)?.into_iter().next())
    }

    /// Retrieves the profiles of several users in one request, keyed by id.
    ///
    /// Duplicate ids are requested once; no request is issued for an empty id list.
    /// Ids without a profile row are absent from the map.
    pub async fn fetch_profiles<'i>(
        &self,
        user_ids: impl IntoIterator<Item = &'i str>,
    ) -> Result<HashMap<String, user::Model>, Error> {
        let ids: BTreeSet<&str> = user_ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        tracing::debug!("Fetching {} author profile(s)", ids.len());

        let select = Select::from(user::TABLE).is_in(user::Column::Id, ids);
        let rows = self.backend.select(&select).await?;

        Ok(decode_rows::<user::Model>(rows)?
            .into_iter()
            .map(|profile| (profile.id.clone(), profile))
            .collect())
    }

    /// Inserts the profile row of a newly registered account.
    ///
    /// # Returns
    /// - `Ok(user::Model)` - The stored row
    /// - `Err(Error::AuthRequired)` - The store rejected the caller's credentials
    /// - `Err(Error::Transport)` - Request failed or the row was malformed
    pub async fn create_profile(&self, profile: &user::Model) -> Result<user::Model, Error> {
        let row = serde_json::to_value(profile).map_err(Error::decode)?;

        let stored = self
            .backend
            .insert(user::TABLE, row)
            .await
            .map_err(Error::from_store_auth)?;

        decode_row(stored)
    }
}
