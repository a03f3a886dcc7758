//! Repository contracts satisfied by the storage adapter.
//!
//! The kernel never talks to storage directly. Adapters implement these
//! traits (over PostgreSQL, an ORM, a remote data service — the kernel
//! does not care) and are injected into the services as trait objects.
//! Errors cross this boundary as [`anyhow::Error`] and propagate unchanged:
//! no retry, no wrapping, no swallowing on this side.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{NewUser, UserPatch, UserRecord};
use crate::query::{FilterMap, Paginated, QuerySpec};

/// Model-routed search/filter/sort/pagination access.
///
/// The implementation owns query execution end to end: text search across
/// `search_fields`, relation loading, and the total-count computation
/// behind the returned page metadata.
#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// Execute a normalized query against the collection named by `model`,
    /// returning one already-paginated page of documents.
    async fn find_many(
        &self,
        model: &str,
        spec: &QuerySpec,
    ) -> Result<Paginated<serde_json::Value>>;

    /// Count the rows of `model` matching `filters`.
    ///
    /// `None` means "no filter" and is distinct from an empty map.
    async fn count(&self, model: &str, filters: Option<&FilterMap>) -> Result<u64>;
}

/// CRUD access to user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    async fn create(&self, input: NewUser) -> Result<UserRecord>;

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<UserRecord>;

    /// Mark a user deleted without removing the row.
    async fn soft_delete(&self, id: Uuid) -> Result<UserRecord>;
}
