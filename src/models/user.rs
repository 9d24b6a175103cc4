//! User model, roles and identity-provider claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::text_enum;
use crate::error::AppError;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Client,
    Prospect,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Client => "client",
            UserRole::Prospect => "prospect",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "client" => Ok(UserRole::Client),
            "prospect" => Ok(UserRole::Prospect),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

text_enum!(UserRole);

/// Local user record, keyed by the identity provider subject id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    /// Identity provider subject id
    pub clerk_id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Require admin privileges
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization("Not authorized".to_string()))
        }
    }
}

/// Identity fields used to create or refresh a local user
#[derive(Debug, Clone)]
pub struct SyncUser {
    pub clerk_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Update role request (admin only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRole {
    /// New role (admin, client, prospect)
    pub role: UserRole,
}

/// Session token claims issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Provider subject id
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl IdentityClaims {
    /// Sign an HS256 token; the provider signs production tokens itself
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    pub fn to_sync_user(&self) -> SyncUser {
        SyncUser {
            clerk_id: self.sub.clone(),
            email: self.email.clone().unwrap_or_default(),
            first_name: self.given_name.clone(),
            last_name: self.family_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: UserRole) -> User {
        let now = Utc::now();
        User {
            id: 1,
            clerk_id: "user_abc".to_string(),
            email: "someone@example.com".to_string(),
            role,
            first_name: None,
            last_name: None,
            company: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_require_admin_accepts_admin() {
        assert!(user_with_role(UserRole::Admin).require_admin().is_ok());
    }

    #[test]
    fn test_require_admin_rejects_other_roles() {
        for role in [UserRole::Client, UserRole::Prospect] {
            let err = user_with_role(role).require_admin().unwrap_err();
            assert!(matches!(err, AppError::Authorization(_)));
        }
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("prospect".parse::<UserRole>().unwrap(), UserRole::Prospect);
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_sync_user_defaults_missing_email() {
        let claims = IdentityClaims {
            sub: "user_1".to_string(),
            email: None,
            given_name: Some("Ada".to_string()),
            family_name: None,
            exp: 0,
            iat: 0,
        };
        let sync = claims.to_sync_user();
        assert_eq!(sync.clerk_id, "user_1");
        assert_eq!(sync.email, "");
        assert_eq!(sync.first_name.as_deref(), Some("Ada"));
    }
}
