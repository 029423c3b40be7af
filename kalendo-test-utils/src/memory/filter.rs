//! Evaluation of [`Select`] filters and ordering against JSON rows.
//!
//! Comparison follows what PostgREST does for the column types in use: numbers compare
//! numerically, timestamps chronologically (whatever textual shape they are stored in) and
//! other strings lexically. A missing or null column never matches a filter.

use std::cmp::Ordering;

use entity::{
    query::{Direction, Filter, Order},
    timestamp,
};
use serde_json::Value;

/// Whether `row` satisfies `filter`.
pub fn matches(row: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::Eq(column, value) => compare_column(row, column, value) == Some(Ordering::Equal),
        Filter::Gte(column, value) => matches!(
            compare_column(row, column, value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Filter::Lt(column, value) => compare_column(row, column, value) == Some(Ordering::Less),
        Filter::Lte(column, value) => matches!(
            compare_column(row, column, value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Filter::ILike(column, needle) => match text(row.get(column)) {
            Some(haystack) => haystack.to_lowercase().contains(&needle.to_lowercase()),
            None => false,
        },
        Filter::In(column, values) => values
            .iter()
            .any(|value| compare_column(row, column, value) == Some(Ordering::Equal)),
        Filter::Or(alternatives) => alternatives.iter().any(|alternative| matches(row, alternative)),
    }
}

/// Orders two rows by the given keys; nulls and missing columns sort last.
pub fn compare_rows(a: &Value, b: &Value, order: &[Order]) -> Ordering {
    for key in order {
        let left = a.get(&key.column).filter(|v| !v.is_null());
        let right = b.get(&key.column).filter(|v| !v.is_null());

        let ordering = match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(left), Some(right)) => {
                let ordering = compare_values(left, right).unwrap_or(Ordering::Equal);
                match key.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

fn compare_column(row: &Value, column: &str, value: &Value) -> Option<Ordering> {
    let cell = row.get(column).filter(|v| !v.is_null())?;
    compare_values(cell, value)
}

fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => match (timestamp::parse(x), timestamp::parse(y)) {
            (Ok(x), Ok(y)) => Some(x.cmp(&y)),
            _ => Some(x.cmp(y)),
        },
        (Value::String(x), Value::Number(y)) => x.parse::<f64>().ok()?.partial_cmp(&y.as_f64()?),
        (Value::Number(x), Value::String(y)) => x.as_f64()?.partial_cmp(&y.parse::<f64>().ok()?),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use entity::query::{Direction, Filter, Order};
    use serde_json::json;

    use super::{compare_rows, matches};

    /// Expect timestamps in different textual shapes to compare chronologically
    #[test]
    fn compares_timestamps_chronologically() {
        let row = json!({ "date": "2025-06-05T18:30:00+00:00" });

        assert!(matches(&row, &Filter::Gte("date".into(), json!("2025-06-05"))));
        assert!(matches(&row, &Filter::Lt("date".into(), json!("2025-06-06T00:00:00Z"))));
        assert!(!matches(&row, &Filter::Lte("date".into(), json!("2025-06-05T18:29:59+00:00"))));
    }

    /// Expect ilike to match substrings regardless of case and reject missing columns
    #[test]
    fn ilike_is_case_insensitive_substring() {
        let row = json!({ "title": "Jazz Night", "location": null });

        assert!(matches(&row, &Filter::ilike("title", "jAZZ")));
        assert!(!matches(&row, &Filter::ilike("title", "rock")));
        assert!(!matches(&row, &Filter::ilike("location", "hall")));
    }

    /// Expect numeric ids to match numeric strings as PostgREST coerces them
    #[test]
    fn eq_and_in_coerce_numbers() {
        let row = json!({ "id": 7 });

        assert!(matches(&row, &Filter::eq("id", 7)));
        assert!(matches(&row, &Filter::eq("id", "7")));
        assert!(matches(&row, &Filter::In("id".into(), vec![json!(1), json!(7)])));
        assert!(!matches(&row, &Filter::In("id".into(), vec![])));
    }

    /// Expect later keys to break ties and nulls to sort last
    #[test]
    fn orders_by_keys_with_nulls_last() {
        let order = vec![
            Order { column: "created_at".into(), direction: Direction::Descending },
            Order { column: "id".into(), direction: Direction::Descending },
        ];
        let a = json!({ "id": 1, "created_at": "2025-06-01T10:00:00Z" });
        let b = json!({ "id": 2, "created_at": "2025-06-01T10:00:00Z" });
        let c = json!({ "id": 3, "created_at": null });

        assert_eq!(compare_rows(&a, &b, &order), Ordering::Greater);
        assert_eq!(compare_rows(&a, &c, &order), Ordering::Less);
    }
}
