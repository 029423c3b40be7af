//! Event reads and event creation.

#[cfg(test)]
mod tests;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use dioxus_logger::tracing;
use entity::{
    backend::{AuthProvider, DataStore, ObjectStorage},
    event,
    query::{Direction, Filter, Select},
    timestamp,
};

use crate::{
    client::{
        error::Error,
        service::{decode_row, decode_rows, UserService},
        util::date::DisplayZone,
    },
    model::event::{EventDetail, EventDraft, EventFilters},
};

/// Service for reading and creating events.
pub struct EventService<'a, B> {
    backend: &'a B,
    /// Zone of calendar-day filters and entered dates.
    zone: DisplayZone,
}

impl<'a, B: DataStore> EventService<'a, B> {
    /// Service reading days and entered dates in UTC.
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            zone: DisplayZone::utc(),
        }
    }

    /// Reads days and entered dates in `zone` instead.
    pub fn in_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Retrieves an event with its owner's display name.
    ///
    /// The owner is looked up in a second request; a missing profile or a failed lookup
    /// leaves `author_name` empty instead of failing the whole fetch.
    ///
    /// # Arguments
    /// - `event_id` - ID of the event to retrieve
    ///
    /// # Returns
    /// - `Ok(EventDetail)` - The event and, when resolvable, its owner's name
    /// - `Err(Error::NotFound)` - No event with that id
    /// - `Err(Error::Transport)` - Request failed or the row was malformed
    pub async fn fetch_event_detail(&self, event_id: i64) -> Result<EventDetail, Error> {
        let select = Select::from(event::TABLE)
            .eq(event::Column::Id, event_id)
            .limit(1);

        let rows = self.backend.select(&select).await?;
        let event = decode_rows::<event::Model>(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("el evento {}", event_id)))?;

        let author_name = match event.user_id.as_deref() {
            None => None,
            Some(user_id) => match UserService::new(self.backend).fetch_profile(user_id).await {
                Ok(profile) => profile.map(|profile| profile.name),
                Err(err) => {
                    tracing::warn!("Failed to resolve owner {} of event {}: {}", user_id, event_id, err);
                    None
                }
            },
        };

        Ok(EventDetail { event, author_name })
    }

    /// Retrieves up to `limit` events from now on, soonest first.
    pub async fn fetch_upcoming_events(&self, limit: usize) -> Result<Vec<event::Model>, Error> {
        self.fetch_upcoming_events_at(Utc::now(), limit).await
    }

    /// Retrieves up to `limit` events dated at or after `now`, soonest first.
    pub async fn fetch_upcoming_events_at(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<event::Model>, Error> {
        let select = Select::from(event::TABLE)
            .gte(event::Column::Date, timestamp::format(&now))
            .order_by(event::Column::Date, Direction::Ascending)
            .limit(limit);

        decode_rows(self.backend.select(&select).await?)
    }

    /// Retrieves every event matching all set filters, soonest first.
    ///
    /// The free-text term matches the title or the description; the location is a
    /// substring match; the date matches events on that calendar day in the service's zone. Blank text
    /// counts as unset, so empty filters return every event.
    pub async fn search_events(&self, filters: &EventFilters) -> Result<Vec<event::Model>, Error> {
        let filters = filters.normalized();
        let mut select = Select::from(event::TABLE);

        if let Some(term) = &filters.search {
            select = select.any_of(vec![
                Filter::ilike(event::Column::Title, term.as_str()),
                Filter::ilike(event::Column::Description, term.as_str()),
            ]);
        }

        if let Some(day) = filters.date {
            let (start, end) = day_bounds(self.zone, day);
            select = select
                .gte(event::Column::Date, timestamp::format(&start))
                .lt(event::Column::Date, timestamp::format(&end));
        }

        if let Some(location) = &filters.location {
            select = select.ilike(event::Column::Location, location.as_str());
        }

        let select = select.order_by(event::Column::Date, Direction::Ascending);

        decode_rows(self.backend.select(&select).await?)
    }

    /// Retrieves the events dated within `start..=end`, soonest first.
    pub async fn fetch_events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<event::Model>, Error> {
        let select = Select::from(event::TABLE)
            .gte(event::Column::Date, timestamp::format(&start))
            .lte(event::Column::Date, timestamp::format(&end))
            .order_by(event::Column::Date, Direction::Ascending);

        decode_rows(self.backend.select(&select).await?)
    }
}

impl<'a, B: DataStore + AuthProvider + ObjectStorage> EventService<'a, B> {
    /// Creates an event owned by the signed-in user.
    ///
    /// Required fields are checked first, then the session; nothing is uploaded or
    /// inserted unless both pass. The optional image is stored under a timestamped name
    /// and the event keeps its relative path.
    ///
    /// # Returns
    /// - `Ok(event::Model)` - The created event as stored
    /// - `Err(Error::Validation)` - A required field is blank or the date is malformed
    /// - `Err(Error::AuthRequired)` - No signed-in user, or the store rejected the session
    /// - `Err(Error::Transport)` - Upload or insert failed
    pub async fn create_event(&self, draft: &EventDraft) -> Result<event::Model, Error> {
        let title = draft.title.trim();
        let description = draft.description.trim();
        let location = draft.location.trim();

        if title.is_empty() || description.is_empty() || draft.date.trim().is_empty() || location.is_empty() {
            return Err(Error::Validation(
                "Completa el título, la descripción, la fecha y la ubicación.".to_string(),
            ));
        }

        let date = self
            .zone
            .read_input(&draft.date)
            .ok_or_else(|| Error::Validation("La fecha del evento no es válida.".to_string()))?;

        let owner = self
            .backend
            .current_user()
            .await
            .map_err(Error::from_store_auth)?
            .ok_or(Error::AuthRequired)?;

        let image_url = match &draft.image {
            None => None,
            Some(file) => {
                let path = image_path(Utc::now().timestamp_millis(), &file.name);
                let stored = self
                    .backend
                    .upload(&path, file)
                    .await
                    .map_err(Error::from_store_auth)?;
                Some(stored)
            }
        };

        let new_event = event::NewEvent {
            title: title.to_string(),
            description: description.to_string(),
            date,
            location: location.to_string(),
            image_url,
            user_id: owner.id,
        };
        let row = serde_json::to_value(&new_event).map_err(Error::decode)?;

        let stored = self
            .backend
            .insert(event::TABLE, row)
            .await
            .map_err(Error::from_store_auth)?;
        let created: event::Model = decode_row(stored)?;

        tracing::info!("Created event {} \"{}\"", created.id, created.title);

        Ok(created)
    }
}

/// Start of `day` and of the following day in `zone`.
fn day_bounds(zone: DisplayZone, day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let midnight = |day: NaiveDate| {
        zone.day_start(day)
            .unwrap_or_else(|| day.and_time(chrono::NaiveTime::MIN).and_utc())
    };
    (midnight(day), midnight(day + Duration::days(1)))
}

/// Storage path of an uploaded image: `<unix-millis>-<sanitized file name>`.
pub fn image_path(millis: i64, file_name: &str) -> String {
    let sanitized: String = file_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized = sanitized.trim_matches('.');
    if sanitized.is_empty() {
        format!("{}-image", millis)
    } else {
        format!("{}-{}", millis, sanitized)
    }
}
