//! User profile access and mutation.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{NewUser, Role, UserPatch, UserRecord};
use crate::repository::UserRepository;

/// Profile operations for the authenticated-user flows.
pub struct UserProfileService {
    users: Arc<dyn UserRepository>,
}

impl UserProfileService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn get_profile(&self, id: Uuid) -> AppResult<Option<UserRecord>> {
        Ok(self.users.find_by_id(id).await?)
    }

    pub async fn get_profile_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.users.find_by_email(email).await?)
    }

    /// Update a profile. Name fields are trimmed before they reach storage.
    pub async fn update_profile(&self, id: Uuid, mut patch: UserPatch) -> AppResult<UserRecord> {
        patch.first_name = patch.first_name.map(|name| name.trim().to_string());
        patch.last_name = patch.last_name.map(|name| name.trim().to_string());

        Ok(self.users.update(id, patch).await?)
    }

    /// Create a user. Names are trimmed and the role is always `User`;
    /// promotion is an explicit admin operation, not a creation input.
    pub async fn create_user(&self, mut input: NewUser) -> AppResult<UserRecord> {
        input.first_name = input.first_name.trim().to_string();
        input.last_name = input.last_name.trim().to_string();
        input.role = Role::User;

        Ok(self.users.create(input).await?)
    }
}
