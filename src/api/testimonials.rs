//! Testimonial endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::testimonial::{CreateTestimonial, Testimonial, TestimonialQuery, UpdateTestimonial},
};

use super::AdminUser;

/// List testimonials
#[utoipa::path(
    get,
    path = "/testimonials",
    tag = "testimonials",
    params(TestimonialQuery),
    responses(
        (status = 200, description = "Testimonials, newest first", body = Vec<Testimonial>)
    )
)]
pub async fn list_testimonials(
    State(state): State<crate::AppState>,
    Query(query): Query<TestimonialQuery>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = state.services.testimonials.list(&query).await?;
    Ok(Json(testimonials))
}

/// Add a testimonial
#[utoipa::path(
    post,
    path = "/admin/testimonials",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreateTestimonial,
    responses(
        (status = 201, description = "Testimonial created", body = Testimonial)
    )
)]
pub async fn create_testimonial(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Json(data): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    let testimonial = state.services.testimonials.create(&data).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// Update a testimonial
#[utoipa::path(
    put,
    path = "/admin/testimonials/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Testimonial ID")),
    request_body = UpdateTestimonial,
    responses(
        (status = 200, description = "Testimonial updated", body = Testimonial)
    )
)]
pub async fn update_testimonial(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = state.services.testimonials.update(id, &data).await?;
    Ok(Json(testimonial))
}

/// Delete a testimonial
#[utoipa::path(
    delete,
    path = "/admin/testimonials/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Testimonial ID")),
    responses(
        (status = 204, description = "Testimonial deleted")
    )
)]
pub async fn delete_testimonial(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.testimonials.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
