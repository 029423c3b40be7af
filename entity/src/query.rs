//! Row-level read requests.
//!
//! A [`Select`] describes one filtered, ordered and limited read of a single table. It is
//! backend agnostic: the Supabase client encodes it as PostgREST query parameters, the
//! in-memory test backend evaluates it directly against stored rows.

use serde_json::Value;

/// Sort direction of an [`Order`] key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One ordering key.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

/// A row predicate.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Column equals the value.
    Eq(String, Value),
    /// Column is greater than or equal to the value.
    Gte(String, Value),
    /// Column is strictly less than the value.
    Lt(String, Value),
    /// Column is less than or equal to the value.
    Lte(String, Value),
    /// Column contains the needle, ignoring case.
    ILike(String, String),
    /// Column equals one of the values.
    In(String, Vec<Value>),
    /// At least one of the nested filters holds.
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(column: impl AsRef<str>, value: impl Into<Value>) -> Self {
        Self::Eq(column.as_ref().to_string(), value.into())
    }

    pub fn ilike(column: impl AsRef<str>, needle: impl Into<String>) -> Self {
        Self::ILike(column.as_ref().to_string(), needle.into())
    }

    /// Column the filter applies to, `None` for [`Filter::Or`].
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Eq(column, _)
            | Self::Gte(column, _)
            | Self::Lt(column, _)
            | Self::Lte(column, _)
            | Self::ILike(column, _)
            | Self::In(column, _) => Some(column),
            Self::Or(_) => None,
        }
    }
}

/// A read of one table; every filter must hold (conjunction).
#[derive(Clone, Debug, PartialEq)]
pub struct Select {
    pub table: String,
    pub columns: String,
    pub filters: Vec<Filter>,
    pub order: Vec<Order>,
    pub limit: Option<usize>,
}

impl Select {
    /// Starts a read of every column of `table`.
    pub fn from(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Restricts the returned columns, e.g. `"id,name"`.
    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn eq(self, column: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.filter(Filter::eq(column, value))
    }

    pub fn gte(self, column: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.filter(Filter::Gte(column.as_ref().to_string(), value.into()))
    }

    pub fn lt(self, column: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.filter(Filter::Lt(column.as_ref().to_string(), value.into()))
    }

    pub fn lte(self, column: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.filter(Filter::Lte(column.as_ref().to_string(), value.into()))
    }

    pub fn ilike(self, column: impl AsRef<str>, needle: impl Into<String>) -> Self {
        self.filter(Filter::ilike(column, needle))
    }

    pub fn is_in<V: Into<Value>>(
        self,
        column: impl AsRef<str>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.filter(Filter::In(column.as_ref().to_string(), values))
    }

    /// Adds a disjunction of `filters` as a single conjunct.
    pub fn any_of(self, filters: Vec<Filter>) -> Self {
        self.filter(Filter::Or(filters))
    }

    /// Appends an ordering key; earlier keys take precedence.
    pub fn order_by(mut self, column: impl AsRef<str>, direction: Direction) -> Self {
        self.order.push(Order {
            column: column.as_ref().to_string(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Direction, Filter, Select};
    use crate::event;

    /// Expect builder calls to accumulate filters, ordering and limit in call order
    #[test]
    fn builds_upcoming_events_select() {
        let select = Select::from(event::TABLE)
            .gte(event::Column::Date, "2025-06-01T00:00:00+00:00")
            .order_by(event::Column::Date, Direction::Ascending)
            .limit(5);

        assert_eq!(select.table, "events");
        assert_eq!(select.columns, "*");
        assert_eq!(
            select.filters,
            vec![Filter::Gte("date".to_string(), json!("2025-06-01T00:00:00+00:00"))]
        );
        assert_eq!(select.order[0].column, "date");
        assert_eq!(select.order[0].direction, Direction::Ascending);
        assert_eq!(select.limit, Some(5));
    }

    /// Expect a disjunction to be stored as one conjunct holding its alternatives
    #[test]
    fn any_of_nests_alternatives() {
        let select = Select::from(event::TABLE).any_of(vec![
            Filter::ilike(event::Column::Title, "jazz"),
            Filter::ilike(event::Column::Description, "jazz"),
        ]);

        assert_eq!(select.filters.len(), 1);
        match &select.filters[0] {
            Filter::Or(alternatives) => {
                assert_eq!(alternatives.len(), 2);
                assert_eq!(alternatives[1].column(), Some("description"));
            }
            other => panic!("expected Or filter, got {:?}", other),
        }
    }
}
