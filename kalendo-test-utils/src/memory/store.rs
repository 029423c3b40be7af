use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::{DateTime, Duration, Utc};
use entity::{
    backend::{DataStore, StoreError},
    comment,
    query::Select,
    timestamp,
};
use serde_json::{json, Value};

use crate::memory::filter;

/// Tables whose rows get a `created_at` default on insert, as the real schema does.
const TIMESTAMPED_TABLES: [(&str, &str); 1] = [(comment::TABLE, "created_at")];

/// A request received by [`MemoryStore`], recorded in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreRequest {
    Select(Select),
    Insert { table: String, row: Value },
}

impl StoreRequest {
    pub fn table(&self) -> &str {
        match self {
            Self::Select(select) => &select.table,
            Self::Insert { table, .. } => table,
        }
    }
}

#[derive(Default)]
struct StoreState {
    tables: HashMap<String, Vec<Value>>,
    serials: HashMap<String, i64>,
    failing: HashMap<String, StoreError>,
    requests: Vec<StoreRequest>,
}

/// In-memory row store evaluating [`Select`] requests the way the hosted store would.
///
/// Inserted rows without an `id` receive the next serial of their table, and rows of
/// timestamped tables receive a strictly increasing `created_at`. Every request is logged
/// so tests can assert on what was (or was not) sent.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("memory store lock poisoned")
    }

    /// Stores a fixture row without logging a request.
    pub fn seed(&self, table: &str, row: Value) {
        let mut state = self.lock();

        if let Some(id) = row.get("id").and_then(Value::as_i64) {
            let serial = state.serials.entry(table.to_string()).or_insert(0);
            *serial = (*serial).max(id);
        }

        state.tables.entry(table.to_string()).or_default().push(row);
    }

    /// Rows currently held for `table`, in insertion order.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.lock().tables.get(table).cloned().unwrap_or_default()
    }

    /// Makes every following request against `table` fail with `error`.
    pub fn fail_table(&self, table: &str, error: StoreError) {
        self.lock().failing.insert(table.to_string(), error);
    }

    pub fn recover_table(&self, table: &str) {
        self.lock().failing.remove(table);
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<StoreRequest> {
        self.lock().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }
}

impl StoreState {
    fn next_timestamp(&self, table: &str, column: &str) -> DateTime<Utc> {
        let latest = self
            .tables
            .get(table)
            .into_iter()
            .flatten()
            .filter_map(|row| row.get(column).and_then(Value::as_str))
            .filter_map(|raw| timestamp::parse(raw).ok())
            .max();

        let now = Utc::now();
        match latest {
            Some(latest) if latest >= now => latest + Duration::milliseconds(1),
            _ => now,
        }
    }
}

impl DataStore for MemoryStore {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError> {
        let mut state = self.lock();
        state.requests.push(StoreRequest::Select(query.clone()));

        if let Some(error) = state.failing.get(&query.table) {
            return Err(error.clone());
        }

        let mut rows: Vec<Value> = state
            .tables
            .get(&query.table)
            .into_iter()
            .flatten()
            .filter(|row| query.filters.iter().all(|f| filter::matches(row, f)))
            .cloned()
            .collect();

        rows.sort_by(|a, b| filter::compare_rows(a, b, &query.order));

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        let mut state = self.lock();
        state.requests.push(StoreRequest::Insert {
            table: table.to_string(),
            row: row.clone(),
        });

        if let Some(error) = state.failing.get(table) {
            return Err(error.clone());
        }

        let Value::Object(mut object) = row else {
            return Err(StoreError::Service {
                status: 400,
                message: "Insert payload must be a JSON object".to_string(),
            });
        };

        if !object.contains_key("id") {
            let serial = state.serials.entry(table.to_string()).or_insert(0);
            *serial += 1;
            object.insert("id".to_string(), json!(*serial));
        }

        for (timestamped, column) in TIMESTAMPED_TABLES {
            if timestamped == table && !object.contains_key(column) {
                let created_at = state.next_timestamp(table, column);
                object.insert(column.to_string(), json!(timestamp::format(&created_at)));
            }
        }

        let stored = Value::Object(object);
        state
            .tables
            .entry(table.to_string())
            .or_default()
            .push(stored.clone());

        Ok(stored)
    }
}
