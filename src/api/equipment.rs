//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        equipment::{CreateEquipment, Equipment, EquipmentQuery, UpdateEquipment},
        rental::{QuoteRequest, RentalRequest},
    },
    services::{availability::Availability, pricing::PriceQuote},
};

use super::AdminUser;

/// List equipment offered for rental
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Available equipment", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.catalog(query.category.as_deref()).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Days blocked by approved rentals
#[utoipa::path(
    get,
    path = "/equipment/{id}/availability",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Blocked dates", body = Availability)
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Availability>> {
    let availability = state.services.equipment.availability(id).await?;
    Ok(Json(availability))
}

/// Price a rental range
#[utoipa::path(
    post,
    path = "/equipment/{id}/quote",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Price quote", body = PriceQuote)
    )
)]
pub async fn quote_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<QuoteRequest>,
) -> AppResult<Json<PriceQuote>> {
    let quote = state.services.equipment.quote(id, &request).await?;
    Ok(Json(quote))
}

/// List all equipment, including items withdrawn from rental
#[utoipa::path(
    get,
    path = "/admin/equipment",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_all_equipment(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/admin/equipment",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment (only provided fields change)
#[utoipa::path(
    put,
    path = "/admin/equipment/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/admin/equipment/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Rental requests for one equipment item
#[utoipa::path(
    get,
    path = "/admin/equipment/{id}/rentals",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Rental requests", body = Vec<RentalRequest>)
    )
)]
pub async fn list_equipment_rentals(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<RentalRequest>>> {
    let rentals = state.services.equipment.rentals(id).await?;
    Ok(Json(rentals))
}
