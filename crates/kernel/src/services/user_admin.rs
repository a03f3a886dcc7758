//! Administrative user listing and removal.

use std::sync::Arc;

use anyhow::Context;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::UserRecord;
use crate::query::{FindManyOptions, Paginated, QueryService, RawRequest, SortOrder, SortSpec};
use crate::repository::UserRepository;

/// Routing key for the user collection.
pub const USER_MODEL: &str = "user";

/// Fields free-text search matches against for user listings.
pub const USER_SEARCH_FIELDS: [&str; 3] = ["firstName", "lastName", "email"];

/// Sort applied to user listings when the request names none.
const USER_DEFAULT_SORT_FIELD: &str = "createdAt";

/// Admin-facing user operations.
pub struct UserAdminService {
    queries: Arc<QueryService>,
    users: Arc<dyn UserRepository>,
}

impl UserAdminService {
    pub fn new(queries: Arc<QueryService>, users: Arc<dyn UserRepository>) -> Self {
        Self { queries, users }
    }

    /// List users with pagination, search, sort, and inferred filters.
    ///
    /// Everything beyond the model wiring is delegated to the query
    /// kernel; the document page comes back typed.
    pub async fn list_users(&self, dto: RawRequest) -> AppResult<Paginated<UserRecord>> {
        let page = self
            .queries
            .find_many_with_pagination(FindManyOptions {
                model: USER_MODEL.to_string(),
                dto,
                search_fields: Some(USER_SEARCH_FIELDS.iter().map(|f| (*f).to_string()).collect()),
                default_sort: Some(SortSpec {
                    field: USER_DEFAULT_SORT_FIELD.to_string(),
                    order: SortOrder::Desc,
                }),
                ..FindManyOptions::default()
            })
            .await?;

        Ok(page
            .decode::<UserRecord>()
            .context("user document page failed to decode")?)
    }

    /// Soft-delete a user.
    ///
    /// The user is looked up first; a missing user is a not-found error
    /// and the delete is never attempted.
    pub async fn delete_user(&self, id: Uuid) -> AppResult<UserRecord> {
        let Some(_existing) = self.users.find_by_id(id).await? else {
            return Err(AppError::NotFound);
        };

        Ok(self.users.soft_delete(id).await?)
    }
}
