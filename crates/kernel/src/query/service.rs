//! Query service: builds query specifications and executes them.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::filters::{partition, synthesize};
use super::pagination::normalize;
use super::types::{FilterMap, Paginated, QuerySpec, RawRequest, SortSpec};
use crate::error::AppResult;
use crate::repository::QueryRepository;

/// Options for one paginated query.
#[derive(Debug, Clone, Default)]
pub struct FindManyOptions {
    /// Routing key naming the collection to query. Required.
    pub model: String,

    /// The raw request mapping. Required.
    pub dto: RawRequest,

    /// Fields the repository should match free-text search against.
    pub search_fields: Option<Vec<String>>,

    /// Relation paths to load alongside the items.
    pub relations: Vec<String>,

    /// Explicit predicates. On a key collision these overwrite whatever
    /// was inferred from the raw request: the caller's intent is
    /// authoritative over heuristic inference.
    pub custom_filters: FilterMap,

    /// Sort applied when the request names none. Different entities
    /// default differently, so this comes from the calling service rather
    /// than a hardcoded fallback.
    pub default_sort: Option<SortSpec>,
}

/// Stateless orchestrator over a [`QueryRepository`].
///
/// Holds nothing but the repository handle, so arbitrarily many calls may
/// run concurrently without coordination. Repository failures propagate
/// unchanged; there is no retry and no timeout on this side.
pub struct QueryService {
    repository: Arc<dyn QueryRepository>,
}

impl QueryService {
    /// Create a new query service over the given repository.
    pub fn new(repository: Arc<dyn QueryRepository>) -> Self {
        Self { repository }
    }

    /// Build a [`QuerySpec`] from the raw request and execute it.
    ///
    /// The repository returns the page already paginated by the storage
    /// layer; it is passed back unchanged — no local re-pagination.
    pub async fn find_many_with_pagination(
        &self,
        options: FindManyOptions,
    ) -> AppResult<Paginated<JsonValue>> {
        let FindManyOptions {
            model,
            dto,
            search_fields,
            relations,
            custom_filters,
            default_sort,
        } = options;

        let (control, candidates) = partition(&dto)?;

        let mut filters = FilterMap::new();
        for (key, value) in candidates {
            if let Some((target, predicate)) = synthesize(key, value)? {
                filters.insert(target, predicate);
            }
        }
        // Explicit filters win key-by-key over inferred ones.
        filters.extend(custom_filters);

        let (page, limit) = normalize(control.page, control.limit);

        let (default_field, default_order) = match default_sort {
            Some(sort) => (Some(sort.field), Some(sort.order)),
            None => (None, None),
        };

        let spec = QuerySpec {
            page,
            limit,
            search: control.search,
            search_fields,
            sort_by: control.sort_by.or(default_field),
            sort_order: control.sort_order.or(default_order).unwrap_or_default(),
            relations,
            custom_filters: filters,
        };

        tracing::debug!(
            model = %model,
            page = spec.page,
            limit = spec.limit,
            filters = spec.custom_filters.len(),
            "executing paginated query"
        );

        Ok(self.repository.find_many(&model, &spec).await?)
    }

    /// Count rows of `model` matching `filters`.
    ///
    /// Pure pass-through: no filter synthesis happens here, so predicates
    /// must already be built. `None` means "no filter" — distinct from an
    /// empty map.
    pub async fn get_count(&self, model: &str, filters: Option<&FilterMap>) -> AppResult<u64> {
        Ok(self.repository.count(model, filters).await?)
    }
}
