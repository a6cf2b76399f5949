//! Users, login credentials and long-lived API keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

/// Body of the login call.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct UserLoginCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for UserLoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLoginCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A bearer token, as returned by the login call.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl TokenResponse {
    /// `true` once `now` is at or past the expiration date.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date.is_some_and(|expires| now >= expires)
    }
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token", &"***")
            .field("expiration_date", &self.expiration_date)
            .finish()
    }
}

// ============================================================================
// API keys
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

/// A freshly created API key. The secret is only returned once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreateResponse {
    pub id: String,
    pub token: String,
    pub user_name: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenKeyResponse {
    pub id: String,
    pub user_name: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenListResponse {
    pub tokens: Vec<TokenKeyResponse>,
    pub page: PageInfo,
}
list_result!(TokenListResponse, tokens, TokenKeyResponse);

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial update of a user; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub local: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub page: PageInfo,
}
list_result!(UserListResponse, users, UserResponse);

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn token_expiry() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"token":"abc","expirationDate":"2026-01-01T00:00:00Z","id":"x"}"#)
                .unwrap();
        let before = Utc.with_ymd_and_hms(2025, 12, 31, 23, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(!token.is_expired_at(before));
        assert!(token.is_expired_at(after));

        let forever: TokenResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert!(!forever.is_expired_at(after));
    }

    #[test]
    fn secrets_are_not_debug_printed() {
        let creds = UserLoginCredentials {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }

    #[test]
    fn user_update_sends_only_set_fields() {
        let update = UserUpdateRequest {
            active: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"active":false}"#);
    }
}
