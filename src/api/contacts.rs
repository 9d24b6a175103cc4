//! Contact form and lead management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::contact::{ContactQuery, ContactRequest, CreateContactRequest, UpdateContactStatus},
};

use super::AdminUser;

/// Submit the public contact form
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact request recorded", body = ContactRequest),
        (status = 400, description = "Invalid form", body = crate::error::ErrorResponse),
        (status = 429, description = "Too many submissions")
    )
)]
pub async fn submit_contact(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateContactRequest>,
) -> AppResult<(StatusCode, Json<ContactRequest>)> {
    let contact = state.services.contacts.submit(&data).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// List contact requests
#[utoipa::path(
    get,
    path = "/admin/contacts",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(ContactQuery),
    responses(
        (status = 200, description = "Contact requests, newest first", body = Vec<ContactRequest>)
    )
)]
pub async fn list_contacts(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Query(query): Query<ContactQuery>,
) -> AppResult<Json<Vec<ContactRequest>>> {
    let contacts = state.services.contacts.list(query.status).await?;
    Ok(Json(contacts))
}

/// Get a contact request
#[utoipa::path(
    get,
    path = "/admin/contacts/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contact request ID")),
    responses(
        (status = 200, description = "Contact request", body = ContactRequest),
        (status = 404, description = "Not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_contact(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ContactRequest>> {
    let contact = state.services.contacts.get_by_id(id).await?;
    Ok(Json(contact))
}

/// Move a lead through the pipeline
#[utoipa::path(
    put,
    path = "/admin/contacts/{id}/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contact request ID")),
    request_body = UpdateContactStatus,
    responses(
        (status = 200, description = "Status updated", body = ContactRequest)
    )
)]
pub async fn update_contact_status(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateContactStatus>,
) -> AppResult<Json<ContactRequest>> {
    let contact = state.services.contacts.update_status(id, data.status).await?;
    Ok(Json(contact))
}
