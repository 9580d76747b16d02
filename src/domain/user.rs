//! User account entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// User account entity.
///
/// `last_login_on` is `None` until the first successful sign-in and is
/// only ever advanced by the session token issuer.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub telephones: Vec<Telephone>,
    pub created_on: DateTime<Utc>,
    pub last_updated_on: DateTime<Utc>,
    pub last_login_on: Option<DateTime<Utc>>,
}

/// Telephone number owned by exactly one user.
#[derive(Debug, Clone, Serialize)]
pub struct Telephone {
    pub id: Uuid,
    pub number: String,
}

/// Data required to create a new account record.
///
/// Carries the already-hashed credential; plaintext passwords never
/// reach the repository layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub telephones: Vec<String>,
}

/// Signed-in account view returned by sign-up, sign-in and self-lookup.
///
/// `token` carries the freshly minted JWT after sign-up/sign-in and is
/// `null` on lookup, which never reissues a token.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedInUser {
    /// Unique account identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Account creation timestamp
    pub created_on: DateTime<Utc>,
    /// Last account update timestamp
    pub last_updated_on: DateTime<Utc>,
    /// Last successful sign-in timestamp
    pub last_login_on: Option<DateTime<Utc>>,
    /// Bearer token, present after sign-up and sign-in only
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: Option<String>,
}

impl SignedInUser {
    /// Project a user together with a freshly issued token.
    pub fn with_token(user: User, token: String) -> Self {
        let mut view = Self::from(user);
        view.token = Some(token);
        view
    }
}

impl From<User> for SignedInUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created_on: user.created_on,
            last_updated_on: user.last_updated_on,
            last_login_on: user.last_login_on,
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed".to_string(),
            telephones: vec![],
            created_on: Utc::now(),
            last_updated_on: Utc::now(),
            last_login_on: None,
        }
    }

    #[test]
    fn view_from_user_has_no_token() {
        let user = sample_user();
        let id = user.id;
        let view = SignedInUser::from(user);
        assert_eq!(view.id, id);
        assert!(view.token.is_none());
    }

    #[test]
    fn view_with_token_keeps_timestamps() {
        let mut user = sample_user();
        let login = Utc::now();
        user.last_login_on = Some(login);
        let view = SignedInUser::with_token(user, "token".to_string());
        assert_eq!(view.token.as_deref(), Some("token"));
        assert_eq!(view.last_login_on, Some(login));
    }

    #[test]
    fn view_serializes_camel_case() {
        let view = SignedInUser::from(sample_user());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("createdOn").is_some());
        assert!(json.get("lastUpdatedOn").is_some());
        assert!(json.get("lastLoginOn").is_some());
        // Token is serialized as an explicit null on lookup
        assert!(json.get("token").unwrap().is_null());
    }
}
