//! Users service: local accounts mirrored from the identity provider

use crate::{
    error::{AppError, AppResult},
    models::user::{IdentityClaims, User, UserRole},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Local user for the token subject, if known
    pub async fn current(&self, claims: &IdentityClaims) -> AppResult<Option<User>> {
        self.repository.users.find_by_clerk_id(&claims.sub).await
    }

    /// Create the local user as a client unless it already exists
    pub async fn ensure(&self, claims: &IdentityClaims) -> AppResult<User> {
        self.repository
            .users
            .get_or_create(&claims.to_sync_user(), UserRole::Client)
            .await
    }

    /// Resolve the caller and require the admin role
    pub async fn resolve_admin(&self, claims: &IdentityClaims) -> AppResult<User> {
        let user = self
            .current(claims)
            .await?
            .ok_or_else(|| AppError::Authorization("Not authorized".to_string()))?;
        user.require_admin()?;
        Ok(user)
    }

    /// Promote the caller to admin.
    ///
    /// Only allowed while the site has no admin yet; an existing admin
    /// gets their own record back unchanged.
    pub async fn promote_to_admin(&self, claims: &IdentityClaims) -> AppResult<User> {
        let user = self.ensure(claims).await?;
        if user.is_admin() {
            return Ok(user);
        }

        match self.repository.users.promote_first_admin(user.id).await? {
            Some(user) => {
                tracing::info!(user_id = user.id, clerk_id = %user.clerk_id, "Promoted initial administrator");
                Ok(user)
            }
            None => {
                tracing::warn!(clerk_id = %user.clerk_id, "Refused admin self-promotion: an admin already exists");
                Err(AppError::Authorization(
                    "An administrator already exists".to_string(),
                ))
            }
        }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn update_role(&self, id: i32, role: UserRole) -> AppResult<User> {
        let user = self.repository.users.update_role(id, role).await?;
        tracing::info!(user_id = id, role = %role, "User role updated");
        Ok(user)
    }
}
