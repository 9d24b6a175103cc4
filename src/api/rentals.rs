//! Rental request API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::rental::{CreateRentalRequest, RentalQuery, RentalRequest, UpdateRentalStatus},
};

use super::{AdminUser, AuthenticatedUser};

/// Submit a rental request
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "rentals",
    security(("bearer_auth" = [])),
    request_body = CreateRentalRequest,
    responses(
        (status = 201, description = "Rental request submitted", body = RentalRequest),
        (status = 400, description = "Invalid dates", body = crate::error::ErrorResponse),
        (status = 401, description = "Not signed in", body = crate::error::ErrorResponse),
        (status = 422, description = "Equipment unavailable for these dates", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_rental(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateRentalRequest>,
) -> AppResult<(StatusCode, Json<RentalRequest>)> {
    let rental = state.services.rentals.create(&claims, &data).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

/// Current user's rental requests
#[utoipa::path(
    get,
    path = "/me/rentals",
    tag = "rentals",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Rental requests, newest first", body = Vec<RentalRequest>)
    )
)]
pub async fn list_my_rentals(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<RentalRequest>>> {
    let rentals = state.services.rentals.list_mine(&claims).await?;
    Ok(Json(rentals))
}

/// List rental requests
#[utoipa::path(
    get,
    path = "/admin/rentals",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(RentalQuery),
    responses(
        (status = 200, description = "Rental requests", body = Vec<RentalRequest>)
    )
)]
pub async fn list_rentals(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Query(query): Query<RentalQuery>,
) -> AppResult<Json<Vec<RentalRequest>>> {
    let rentals = state.services.rentals.list(query.status).await?;
    Ok(Json(rentals))
}

/// Approve, reject or complete a rental request
#[utoipa::path(
    put,
    path = "/admin/rentals/{id}/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Rental request ID")),
    request_body = UpdateRentalStatus,
    responses(
        (status = 200, description = "Status updated", body = RentalRequest)
    )
)]
pub async fn update_rental_status(
    State(state): State<crate::AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRentalStatus>,
) -> AppResult<Json<RentalRequest>> {
    tracing::debug!(admin_id = admin.id, rental_id = id, "Updating rental status");
    let rental = state.services.rentals.update_status(id, data.status).await?;
    Ok(Json(rental))
}
