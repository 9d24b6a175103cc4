//! CMS page endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::page::{Page, UpsertPage},
};

use super::AdminUser;

/// Published pages
#[utoipa::path(
    get,
    path = "/pages",
    tag = "pages",
    responses(
        (status = 200, description = "Published pages", body = Vec<Page>)
    )
)]
pub async fn list_pages(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Page>>> {
    let pages = state.services.pages.list_published().await?;
    Ok(Json(pages))
}

/// Published page by slug
#[utoipa::path(
    get,
    path = "/pages/{slug}",
    tag = "pages",
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "Page", body = Page),
        (status = 404, description = "Not found or unpublished", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_page(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Page>> {
    let page = state.services.pages.get_published(&slug).await?;
    Ok(Json(page))
}

/// All pages, drafts included
#[utoipa::path(
    get,
    path = "/admin/pages",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pages", body = Vec<Page>)
    )
)]
pub async fn list_all_pages(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<Vec<Page>>> {
    let pages = state.services.pages.list_all().await?;
    Ok(Json(pages))
}

/// Create or replace a page by slug
#[utoipa::path(
    put,
    path = "/admin/pages",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = UpsertPage,
    responses(
        (status = 200, description = "Page saved", body = Page)
    )
)]
pub async fn upsert_page(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Json(data): Json<UpsertPage>,
) -> AppResult<Json<Page>> {
    let page = state.services.pages.upsert(&data).await?;
    Ok(Json(page))
}
