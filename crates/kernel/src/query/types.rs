//! Query specification types.
//!
//! Provides type definitions for the pagination-and-filter query builder:
//! - FieldValue: tagged-union value of a raw request field
//! - FilterPredicate: typed condition applied to one field
//! - QuerySpec: the normalized fetch description handed to the repository
//! - Paginated / PageMeta: result page with navigation metadata

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Value of a single raw request field.
///
/// Request DTOs carry no schema; whatever the caller sends arrives as one
/// of these. `Null` is kept distinct from an absent key so explicit nulls
/// can be dropped during filter synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// String value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// List of values.
    List(Vec<FieldValue>),
    /// Explicit null.
    Null,
}

impl FieldValue {
    /// Borrow as a string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to an integer if possible. Numeric strings are accepted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Check for an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Raw request mapping: the caller's DTO flattened to key/value pairs.
pub type RawRequest = HashMap<String, FieldValue>;

/// Mapping from field name to filter predicate.
pub type FilterMap = HashMap<String, FilterPredicate>;

/// Typed condition applied to one field.
///
/// Exactly one shape applies per key; synthesis picks it deterministically
/// from the key suffix and value type. Serialized shapes match the wire
/// format consumed by repository adapters: `{"contains", "caseSensitive"}`,
/// `{"endsWith"}`, `{"in"}`, `{"gte"}`, or the bare scalar for exact match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterPredicate {
    /// Substring match with configurable case sensitivity.
    Contains {
        contains: String,
        #[serde(rename = "caseSensitive")]
        case_sensitive: bool,
    },
    /// Suffix match.
    EndsWith {
        #[serde(rename = "endsWith")]
        ends_with: String,
    },
    /// Set membership.
    In {
        #[serde(rename = "in")]
        values: Vec<FieldValue>,
    },
    /// Lower calendar-date bound, inclusive.
    Gte { gte: NaiveDate },
    /// Exact scalar match, no transformation.
    Equals(FieldValue),
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// A default sort supplied by the calling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

/// The fully normalized, structured description of a paginated, filtered,
/// sorted fetch. Built fresh per invocation and immutable once handed to
/// the repository; never persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    /// 1-indexed page number.
    pub page: u32,

    /// Page size, already clamped to the allowed range.
    pub limit: u32,

    /// Free-text search term.
    pub search: Option<String>,

    /// Fields the repository should match `search` against. Passed through
    /// uninterpreted, even when absent.
    pub search_fields: Option<Vec<String>>,

    /// Field to sort by.
    pub sort_by: Option<String>,

    /// Sort direction.
    pub sort_order: SortOrder,

    /// Relation paths to load alongside the items.
    pub relations: Vec<String>,

    /// Per-field filter predicates. Never contains the reserved control
    /// keys or the routing keys.
    pub custom_filters: FilterMap,
}

/// Navigation metadata for one result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageMeta {
    /// Compute metadata from `(page, limit, total)` alone.
    ///
    /// `total_pages` uses ceiling division; a total of zero yields zero
    /// pages and no next page.
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit > 0 {
            total.div_ceil(u64::from(limit))
        } else {
            0
        };

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next_page: u64::from(page) * u64::from(limit) < total,
            has_previous_page: page > 1,
        }
    }
}

/// One page of results together with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl Paginated<serde_json::Value> {
    /// Decode a document page into a typed page.
    ///
    /// A document that does not match `T` is a contract violation of the
    /// repository and surfaces as an error.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Paginated<T>, serde_json::Error> {
        let items = self
            .items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;

        Ok(Paginated {
            items,
            meta: self.meta,
        })
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_value_conversions() {
        let str_val = FieldValue::String("hello".to_string());
        assert_eq!(str_val.as_str(), Some("hello"));

        let int_val = FieldValue::Integer(42);
        assert_eq!(int_val.as_i64(), Some(42));

        let numeric_string = FieldValue::String("7".to_string());
        assert_eq!(numeric_string.as_i64(), Some(7));

        assert!(FieldValue::Null.is_null());
        assert!(!FieldValue::Boolean(false).is_null());
    }

    #[test]
    fn field_value_deserializes_untagged() {
        let raw: RawRequest = serde_json::from_value(json!({
            "page": 2,
            "search": "test",
            "isVerified": true,
            "role": ["USER", "ADMIN"],
            "score": 0.5,
            "gone": null,
        }))
        .unwrap();

        assert_eq!(raw["page"], FieldValue::Integer(2));
        assert_eq!(raw["search"], FieldValue::String("test".to_string()));
        assert_eq!(raw["isVerified"], FieldValue::Boolean(true));
        assert_eq!(raw["score"], FieldValue::Float(0.5));
        assert_eq!(raw["gone"], FieldValue::Null);
        assert_eq!(
            raw["role"],
            FieldValue::List(vec![
                FieldValue::String("USER".to_string()),
                FieldValue::String("ADMIN".to_string()),
            ])
        );
    }

    #[test]
    fn predicate_wire_shapes() {
        let contains = FilterPredicate::Contains {
            contains: "Jo".to_string(),
            case_sensitive: false,
        };
        assert_eq!(
            serde_json::to_value(&contains).unwrap(),
            json!({"contains": "Jo", "caseSensitive": false})
        );

        let ends_with = FilterPredicate::EndsWith {
            ends_with: "@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&ends_with).unwrap(),
            json!({"endsWith": "@example.com"})
        );

        let membership = FilterPredicate::In {
            values: vec![FieldValue::String("USER".to_string())],
        };
        assert_eq!(
            serde_json::to_value(&membership).unwrap(),
            json!({"in": ["USER"]})
        );

        let gte = FilterPredicate::Gte {
            gte: "2023-01-01".parse().unwrap(),
        };
        assert_eq!(serde_json::to_value(&gte).unwrap(), json!({"gte": "2023-01-01"}));

        let exact = FilterPredicate::Equals(FieldValue::Boolean(true));
        assert_eq!(serde_json::to_value(&exact).unwrap(), json!(true));
    }

    #[test]
    fn page_meta_paging() {
        let meta = PageMeta::new(2, 10, 25);

        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn page_meta_last_page() {
        let meta = PageMeta::new(3, 10, 25);

        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn page_meta_empty_total() {
        let meta = PageMeta::new(1, 10, 0);

        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn page_meta_exact_boundary() {
        // 20 items at 10 per page: page 2 is the last page.
        let meta = PageMeta::new(2, 10, 20);

        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn paginated_decode_reports_bad_documents() {
        #[derive(Debug, Deserialize)]
        struct Narrow {
            #[allow(dead_code)]
            id: u32,
        }

        let page = Paginated {
            items: vec![json!({"id": 1}), json!({"id": "not-a-number"})],
            meta: PageMeta::new(1, 10, 2),
        };

        assert!(page.decode::<Narrow>().is_err());
    }

    #[test]
    fn query_spec_serializes_camel_case() {
        let spec = QuerySpec {
            page: 1,
            limit: 10,
            search: Some("test".to_string()),
            search_fields: Some(vec!["firstName".to_string()]),
            sort_by: Some("createdAt".to_string()),
            sort_order: SortOrder::Desc,
            relations: vec![],
            custom_filters: FilterMap::new(),
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["sortBy"], "createdAt");
        assert_eq!(value["sortOrder"], "desc");
        assert_eq!(value["searchFields"], json!(["firstName"]));
        assert_eq!(value["customFilters"], json!({}));
    }
}
