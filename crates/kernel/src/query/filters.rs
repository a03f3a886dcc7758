//! Reserved-key partitioning and filter-operator synthesis.
//!
//! The raw request carries no schema, so field-name suffixes act as
//! lightweight type tags: `*Domain` keys become suffix matches on the
//! stripped key, `*Date` keys become lower date bounds, `*Name` keys
//! become case-insensitive substring matches. Everything else is an exact
//! match. This keeps the builder generic across entities without
//! per-entity filter declarations.

use chrono::NaiveDate;

use super::types::{FieldValue, FilterPredicate, RawRequest, SortOrder};
use crate::error::{AppError, AppResult};

/// Request keys that steer pagination, sort, and search. Stripped from the
/// raw map before filter synthesis.
pub const CONTROL_KEYS: [&str; 5] = ["page", "limit", "search", "sortBy", "sortOrder"];

/// Routing keys that may leak into a raw map from over-eager callers.
/// Never filter candidates.
const ROUTING_KEYS: [&str; 3] = ["searchFields", "relations", "model"];

/// Control fields extracted from the raw request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlFields {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ControlFields {
    fn from_raw(raw: &RawRequest) -> AppResult<Self> {
        let sort_order = match raw.get("sortOrder") {
            None => None,
            Some(FieldValue::Null) => None,
            Some(value) => match value.as_str() {
                Some("asc") => Some(SortOrder::Asc),
                Some("desc") => Some(SortOrder::Desc),
                _ => {
                    return Err(AppError::BadRequest(
                        "sortOrder must be \"asc\" or \"desc\"".to_string(),
                    ));
                }
            },
        };

        Ok(Self {
            page: raw.get("page").and_then(FieldValue::as_i64),
            limit: raw.get("limit").and_then(FieldValue::as_i64),
            search: raw
                .get("search")
                .and_then(FieldValue::as_str)
                .map(str::to_string),
            sort_by: raw
                .get("sortBy")
                .and_then(FieldValue::as_str)
                .map(str::to_string),
            sort_order,
        })
    }
}

/// Split a raw request into control fields and filter candidates.
///
/// Everything that is neither a control key nor a routing key is a
/// candidate — there is no whitelist; the caller's DTO shape IS the filter
/// schema.
pub fn partition(raw: &RawRequest) -> AppResult<(ControlFields, Vec<(&String, &FieldValue)>)> {
    let control = ControlFields::from_raw(raw)?;

    let candidates = raw
        .iter()
        .filter(|(key, _)| {
            !CONTROL_KEYS.contains(&key.as_str()) && !ROUTING_KEYS.contains(&key.as_str())
        })
        .collect();

    Ok((control, candidates))
}

/// Synthesize a filter predicate from a single candidate key/value pair.
///
/// Returns the target key together with the predicate: a `*Domain` key
/// files its predicate under the suffix-stripped key (`emailDomain` →
/// `email`); every other rule keeps the source key. `None` means the key
/// is omitted entirely.
///
/// Rules in precedence order, first match wins:
/// 1. explicit null → omit
/// 2. list → set membership
/// 3. `*Domain` string → suffix match on `"@" + value`
/// 4. `*Date` string → lower date bound (unparsable dates are a caller
///    error, never coerced or dropped)
/// 5. `*Name` string → case-insensitive substring match
/// 6. anything else → exact match
pub fn synthesize(key: &str, value: &FieldValue) -> AppResult<Option<(String, FilterPredicate)>> {
    let entry = match value {
        FieldValue::Null => return Ok(None),
        FieldValue::List(items) => (
            key.to_string(),
            FilterPredicate::In {
                values: items.clone(),
            },
        ),
        FieldValue::String(text) if key.ends_with("Domain") => (
            key.strip_suffix("Domain").unwrap_or(key).to_string(),
            FilterPredicate::EndsWith {
                ends_with: format!("@{text}"),
            },
        ),
        FieldValue::String(text) if key.ends_with("Date") => {
            let date = text.parse::<NaiveDate>().map_err(|_| {
                AppError::BadRequest(format!("invalid date value for filter '{key}': '{text}'"))
            })?;
            (key.to_string(), FilterPredicate::Gte { gte: date })
        }
        FieldValue::String(text) if key.ends_with("Name") => (
            key.to_string(),
            FilterPredicate::Contains {
                contains: text.clone(),
                case_sensitive: false,
            },
        ),
        other => (key.to_string(), FilterPredicate::Equals(other.clone())),
    };

    Ok(Some(entry))
}
