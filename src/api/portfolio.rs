//! Portfolio API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::portfolio::{
        CreatePortfolioItem, PortfolioItem, PortfolioQuery, ReorderPortfolio, UpdatePortfolioItem,
    },
};

use super::AdminUser;

/// Published portfolio items in display order
#[utoipa::path(
    get,
    path = "/portfolio",
    tag = "portfolio",
    params(PortfolioQuery),
    responses(
        (status = 200, description = "Published items", body = Vec<PortfolioItem>)
    )
)]
pub async fn list_portfolio(
    State(state): State<crate::AppState>,
    Query(query): Query<PortfolioQuery>,
) -> AppResult<Json<Vec<PortfolioItem>>> {
    let items = state.services.portfolio.list_public(query).await?;
    Ok(Json(items))
}

/// Distinct categories of published items
#[utoipa::path(
    get,
    path = "/portfolio/categories",
    tag = "portfolio",
    responses(
        (status = 200, description = "Sorted category names", body = Vec<String>)
    )
)]
pub async fn list_categories(State(state): State<crate::AppState>) -> AppResult<Json<Vec<String>>> {
    let categories = state.services.portfolio.categories().await?;
    Ok(Json(categories))
}

/// Get a published portfolio item
#[utoipa::path(
    get,
    path = "/portfolio/{id}",
    tag = "portfolio",
    params(("id" = i32, Path, description = "Portfolio item ID")),
    responses(
        (status = 200, description = "Portfolio item", body = PortfolioItem),
        (status = 404, description = "Not found or unpublished", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_portfolio_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PortfolioItem>> {
    let item = state.services.portfolio.get_public(id).await?;
    Ok(Json(item))
}

/// List all portfolio items, drafts included
#[utoipa::path(
    get,
    path = "/admin/portfolio",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Portfolio items", body = Vec<PortfolioItem>)
    )
)]
pub async fn list_all_portfolio(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<Vec<PortfolioItem>>> {
    let items = state.services.portfolio.list_all().await?;
    Ok(Json(items))
}

/// Create a portfolio item
#[utoipa::path(
    post,
    path = "/admin/portfolio",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = CreatePortfolioItem,
    responses(
        (status = 201, description = "Portfolio item created", body = PortfolioItem)
    )
)]
pub async fn create_portfolio_item(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Json(data): Json<CreatePortfolioItem>,
) -> AppResult<(StatusCode, Json<PortfolioItem>)> {
    let item = state.services.portfolio.create(&data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update a portfolio item (only provided fields change)
#[utoipa::path(
    put,
    path = "/admin/portfolio/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Portfolio item ID")),
    request_body = UpdatePortfolioItem,
    responses(
        (status = 200, description = "Portfolio item updated", body = PortfolioItem)
    )
)]
pub async fn update_portfolio_item(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePortfolioItem>,
) -> AppResult<Json<PortfolioItem>> {
    let item = state.services.portfolio.update(id, &data).await?;
    Ok(Json(item))
}

/// Delete a portfolio item
#[utoipa::path(
    delete,
    path = "/admin/portfolio/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Portfolio item ID")),
    responses(
        (status = 204, description = "Portfolio item deleted")
    )
)]
pub async fn delete_portfolio_item(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.portfolio.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Set the display order of several items at once
#[utoipa::path(
    put,
    path = "/admin/portfolio/order",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = ReorderPortfolio,
    responses(
        (status = 204, description = "Order saved"),
        (status = 404, description = "Unknown item in batch", body = crate::error::ErrorResponse)
    )
)]
pub async fn reorder_portfolio(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    Json(data): Json<ReorderPortfolio>,
) -> AppResult<StatusCode> {
    state.services.portfolio.reorder(&data.items).await?;
    Ok(StatusCode::NO_CONTENT)
}
