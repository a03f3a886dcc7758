//! Roster test utilities.
//!
//! Helpers for unit and integration testing: user fixtures, page builders,
//! and repository doubles that record the calls they receive.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::PoisonError;

use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use roster_kernel::models::{NewUser, Role, UserPatch, UserRecord};
use roster_kernel::query::{FilterMap, PageMeta, Paginated, QuerySpec};
use roster_kernel::repository::{QueryRepository, UserRepository};

/// Create a test user with default values.
pub fn test_user(email: &str, first_name: &str, last_name: &str) -> UserRecord {
    let now = Utc::now();
    UserRecord {
        id: Uuid::now_v7(),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        role: Role::User,
        is_verified: true,
        phone_number: None,
        avatar: None,
        password: None,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

/// Serialize users into the document page a repository would return.
pub fn user_page(users: &[UserRecord], page: u32, limit: u32, total: u64) -> Paginated<JsonValue> {
    let items = users
        .iter()
        .map(|user| serde_json::to_value(user).unwrap_or(JsonValue::Null))
        .collect();

    Paginated {
        items,
        meta: PageMeta::new(page, limit, total),
    }
}

/// An empty first page.
pub fn empty_page() -> Paginated<JsonValue> {
    Paginated {
        items: Vec::new(),
        meta: PageMeta::new(1, 10, 0),
    }
}

fn unpoisoned<T>(guard: Result<T, PoisonError<T>>) -> T {
    guard.unwrap_or_else(PoisonError::into_inner)
}

/// [`QueryRepository`] double that returns canned results and records
/// every call it receives.
pub struct RecordingQueryRepository {
    page: Mutex<Paginated<JsonValue>>,
    count: Mutex<u64>,
    failure: Option<String>,
    /// `(model, spec)` for each find_many call, in order.
    pub find_many_calls: Mutex<Vec<(String, QuerySpec)>>,
    /// `(model, filters)` for each count call, in order.
    pub count_calls: Mutex<Vec<(String, Option<FilterMap>)>>,
}

impl RecordingQueryRepository {
    /// A repository returning the given page from every find_many call.
    pub fn returning(page: Paginated<JsonValue>) -> Self {
        Self {
            page: Mutex::new(page),
            count: Mutex::new(0),
            failure: None,
            find_many_calls: Mutex::new(Vec::new()),
            count_calls: Mutex::new(Vec::new()),
        }
    }

    /// A repository returning an empty page.
    pub fn empty() -> Self {
        Self::returning(empty_page())
    }

    /// A repository whose every call fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::empty()
        }
    }

    /// Set the count returned by [`QueryRepository::count`].
    pub fn set_count(&self, count: u64) {
        *unpoisoned(self.count.lock()) = count;
    }

    /// The query spec passed to the most recent find_many call.
    pub fn last_spec(&self) -> Option<QuerySpec> {
        unpoisoned(self.find_many_calls.lock())
            .last()
            .map(|(_, spec)| spec.clone())
    }

    /// The model passed to the most recent find_many call.
    pub fn last_model(&self) -> Option<String> {
        unpoisoned(self.find_many_calls.lock())
            .last()
            .map(|(model, _)| model.clone())
    }

    /// The arguments of the most recent count call.
    pub fn last_count_call(&self) -> Option<(String, Option<FilterMap>)> {
        unpoisoned(self.count_calls.lock()).last().cloned()
    }

    /// Number of find_many calls received.
    pub fn find_many_call_count(&self) -> usize {
        unpoisoned(self.find_many_calls.lock()).len()
    }
}

#[async_trait]
impl QueryRepository for RecordingQueryRepository {
    async fn find_many(&self, model: &str, spec: &QuerySpec) -> Result<Paginated<JsonValue>> {
        unpoisoned(self.find_many_calls.lock()).push((model.to_string(), spec.clone()));

        if let Some(message) = &self.failure {
            bail!("{message}");
        }

        Ok(unpoisoned(self.page.lock()).clone())
    }

    async fn count(&self, model: &str, filters: Option<&FilterMap>) -> Result<u64> {
        unpoisoned(self.count_calls.lock()).push((model.to_string(), filters.cloned()));

        if let Some(message) = &self.failure {
            bail!("{message}");
        }

        Ok(*unpoisoned(self.count.lock()))
    }
}

/// In-memory [`UserRepository`] for service tests.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing users.
    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let repo = Self::new();
        {
            let mut map = unpoisoned(repo.users.lock());
            for user in users {
                map.insert(user.id, user);
            }
        }
        repo
    }

    /// Snapshot of a stored user.
    pub fn get(&self, id: Uuid) -> Option<UserRecord> {
        unpoisoned(self.users.lock()).get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>> {
        Ok(unpoisoned(self.users.lock()).get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(unpoisoned(self.users.lock())
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create(&self, input: NewUser) -> Result<UserRecord> {
        let now = Utc::now();
        let user = UserRecord {
            id: Uuid::now_v7(),
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            role: input.role,
            is_verified: false,
            phone_number: input.phone_number,
            avatar: input.avatar,
            password: input.password,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        unpoisoned(self.users.lock()).insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<UserRecord> {
        let mut users = unpoisoned(self.users.lock());
        let Some(user) = users.get_mut(&id) else {
            bail!("user not found: {id}");
        };

        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(phone_number) = patch.phone_number {
            user.phone_number = Some(phone_number);
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<UserRecord> {
        let mut users = unpoisoned(self.users.lock());
        let Some(user) = users.get_mut(&id) else {
            bail!("user not found: {id}");
        };

        user.deleted_at = Some(Utc::now());
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}
