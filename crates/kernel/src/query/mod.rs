//! Pagination-and-filter query builder.
//!
//! This module provides:
//! - QueryService: builds a normalized QuerySpec from a raw request map
//!   and executes it against the injected repository
//! - Partitioning and filter synthesis: reserved-key handling and the
//!   suffix-driven operator rules
//! - Pagination normalization and page metadata
//! - Types: QuerySpec, FilterPredicate, FieldValue, Paginated, etc.

mod filters;
mod pagination;
mod service;
pub mod types;

pub use filters::{CONTROL_KEYS, ControlFields, partition, synthesize};
pub use pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, normalize};
pub use service::{FindManyOptions, QueryService};
pub use types::{
    FieldValue, FilterMap, FilterPredicate, PageMeta, Paginated, QuerySpec, RawRequest, SortOrder,
    SortSpec,
};
