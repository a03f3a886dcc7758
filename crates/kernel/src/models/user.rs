//! User record and repository input shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// User record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_verified: bool,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Check whether this record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Input for updating a user profile. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord {
            id: Uuid::nil(),
            email: "jo@example.com".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Smith".to_string(),
            role: Role::Admin,
            is_verified: true,
            phone_number: None,
            avatar: None,
            password: Some("argon2-hash".to_string()),
            created_at: "2023-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2023-01-01T00:00:00Z".parse().unwrap(),
            deleted_at: None,
        }
    }

    #[test]
    fn record_serializes_camel_case_without_password() {
        let value = serde_json::to_value(sample_user()).unwrap();

        assert_eq!(value["firstName"], "Jo");
        assert_eq!(value["role"], "ADMIN");
        assert_eq!(value["isVerified"], true);
        assert!(value.get("password").is_none());
    }

    #[test]
    fn record_deserializes_without_password_field() {
        let value = serde_json::to_value(sample_user()).unwrap();

        let parsed: UserRecord = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.email, "jo@example.com");
        assert_eq!(parsed.password, None);
        assert!(!parsed.is_deleted());
    }

    #[test]
    fn role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
    }
}
