/// User domain types
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
///
/// The email address is the login key; `username` is the display name.
/// Credential material (password hash) never lives on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Email address (unique, used for login)
    pub email: String,

    /// Display name
    pub username: String,

    /// Optional avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Optional profile bio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into(),
            username: username.into(),
            avatar_url: None,
            bio: None,
            created_at: Utc::now(),
        }
    }
}

/// Payload for registering a new user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// Email address (unique, used for login)
    pub email: String,

    /// Display name
    pub username: String,

    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Payload for self-service profile edits
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub username: Option<String>,

    /// New avatar image URL
    pub avatar_url: Option<String>,

    /// New profile bio
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_creation() {
        let user = User::new("alice@example.com", "alice");

        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.username, "alice");
        assert!(user.avatar_url.is_none());
        assert!(user.created_at <= Utc::now());
    }

    #[test]
    fn user_serialization_skips_empty_profile_fields() {
        let user = User::new("bob@example.com", "bob");
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("avatar_url").is_none());
        assert!(json.get("bio").is_none());
    }
}
