//! PostgREST encoding of [`Select`] reads and inserts.

use entity::{
    backend::StoreError,
    query::{Direction, Filter, Select},
};
use serde_json::Value;
use url::Url;

use super::http::{HttpRequest, Method};

/// URL of the row endpoint of `table`.
pub fn table_url(base_url: &str, table: &str) -> Result<Url, StoreError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| StoreError::Transport(format!("Invalid base URL {}: {}", base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| StoreError::Transport(format!("Base URL {} cannot hold a path", base_url)))?
        .pop_if_empty()
        .extend(["rest", "v1", table]);

    Ok(url)
}

/// Builds the GET request of a read.
pub fn select_request(base_url: &str, select: &Select) -> Result<HttpRequest, StoreError> {
    let mut url = table_url(base_url, &select.table)?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("select", &select.columns);

        for filter in &select.filters {
            let (key, value) = encode_filter(filter);
            query.append_pair(&key, &value);
        }

        if !select.order.is_empty() {
            let order = select
                .order
                .iter()
                .map(|order| {
                    let direction = match order.direction {
                        Direction::Ascending => "asc",
                        Direction::Descending => "desc",
                    };
                    format!("{}.{}", order.column, direction)
                })
                .collect::<Vec<_>>()
                .join(",");
            query.append_pair("order", &order);
        }

        if let Some(limit) = select.limit {
            query.append_pair("limit", &limit.to_string());
        }
    }

    Ok(HttpRequest::new(Method::Get, url))
}

/// Builds the POST request inserting `row`, asking for the stored row back.
pub fn insert_request(base_url: &str, table: &str, row: &Value) -> Result<HttpRequest, StoreError> {
    let url = table_url(base_url, table)?;

    Ok(HttpRequest::new(Method::Post, url)
        .header("Prefer", "return=representation")
        .json(row))
}

/// Query pair of a top-level filter.
fn encode_filter(filter: &Filter) -> (String, String) {
    match filter {
        Filter::Or(alternatives) => ("or".to_string(), format!("({})", encode_list(alternatives))),
        _ => {
            let column = filter.column().unwrap_or_default().to_string();
            (column, encode_operator(filter, false))
        }
    }
}

/// `<op>.<value>` of a filter; values inside logic trees are quoted when needed.
fn encode_operator(filter: &Filter, nested: bool) -> String {
    let scalar = |value: &Value| {
        let raw = plain_value(value);
        if nested {
            quote(&raw)
        } else {
            raw
        }
    };

    match filter {
        Filter::Eq(_, value) => format!("eq.{}", scalar(value)),
        Filter::Gte(_, value) => format!("gte.{}", scalar(value)),
        Filter::Lt(_, value) => format!("lt.{}", scalar(value)),
        Filter::Lte(_, value) => format!("lte.{}", scalar(value)),
        Filter::ILike(_, needle) => {
            let pattern = format!("*{}*", escape_pattern(needle));
            if nested {
                format!("ilike.{}", quote(&pattern))
            } else {
                format!("ilike.{}", pattern)
            }
        }
        Filter::In(_, values) => {
            let values = values
                .iter()
                .map(|value| quote(&plain_value(value)))
                .collect::<Vec<_>>()
                .join(",");
            format!("in.({})", values)
        }
        Filter::Or(alternatives) => format!("or({})", encode_list(alternatives)),
    }
}

fn encode_list(filters: &[Filter]) -> String {
    filters
        .iter()
        .map(|filter| match filter {
            Filter::Or(_) => encode_operator(filter, true),
            _ => format!(
                "{}.{}",
                filter.column().unwrap_or_default(),
                encode_operator(filter, true)
            ),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn plain_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Escapes the wildcards of an `ilike` pattern so the needle matches literally.
///
/// PostgREST turns `*` into `%`; `%` and `_` are SQL wildcards; `\` is the escape.
fn escape_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_' | '*') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Double-quotes values holding characters reserved by PostgREST list syntax.
fn quote(raw: &str) -> String {
    let reserved = raw.is_empty()
        || raw
            .chars()
            .any(|c| matches!(c, ',' | '.' | ':' | '(' | ')' | '"' | '\\') || c.is_whitespace());

    if !reserved {
        return raw.to_string();
    }

    let escaped = raw.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
