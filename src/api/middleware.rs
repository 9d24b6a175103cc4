//! Admin gate for the back-office routes

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::{AdminUser, AuthenticatedUser};
use crate::{error::AppResult, AppState};

/// Resolve the caller once and require the admin role.
///
/// The resolved user is stored in the request extensions for
/// handlers taking an [`AdminUser`].
pub async fn require_admin(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let user = state.services.users.resolve_admin(&claims).await.map_err(|e| {
        tracing::warn!(clerk_id = %claims.sub, path = %request.uri().path(), "Admin access denied");
        e
    })?;

    request.extensions_mut().insert(AdminUser(user));
    Ok(next.run(request).await)
}
