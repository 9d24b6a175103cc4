//! Admin dashboard endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, services::dashboard::DashboardSummary};

use super::AdminUser;

/// Back-office totals and latest activity
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 401, description = "Not signed in", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DashboardSummary>> {
    let summary = state.services.dashboard.summary().await?;
    Ok(Json(summary))
}
