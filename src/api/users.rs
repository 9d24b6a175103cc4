//! Current-user and user administration endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::user::{UpdateUserRole, User},
};

use super::{AdminUser, AuthenticatedUser};

/// Current local user, or null when not yet synced
#[utoipa::path(
    get,
    path = "/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user or null", body = User),
        (status = 401, description = "Not signed in", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Option<User>>> {
    let user = state.services.users.current(&claims).await?;
    Ok(Json(user))
}

/// Create the current user as a client if missing
#[utoipa::path(
    post,
    path = "/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = User)
    )
)]
pub async fn ensure_me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<User>> {
    let user = state.services.users.ensure(&claims).await?;
    Ok(Json(user))
}

/// Claim the admin role during initial setup
#[utoipa::path(
    post,
    path = "/setup/promote",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller is now admin", body = User),
        (status = 403, description = "An admin already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn promote_me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<User>> {
    let user = state.services.users.promote_to_admin(&claims).await?;
    Ok(Json(user))
}

/// List users
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Users", body = Vec<User>)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list().await?;
    Ok(Json(users))
}

/// Change a user's role
#[utoipa::path(
    put,
    path = "/admin/users/{id}/role",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRole,
    responses(
        (status = 200, description = "Role updated", body = User)
    )
)]
pub async fn update_user_role(
    State(state): State<crate::AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateUserRole>,
) -> AppResult<Json<User>> {
    tracing::debug!(admin_id = admin.id, user_id = id, "Changing user role");
    let user = state.services.users.update_role(id, data.role).await?;
    Ok(Json(user))
}
