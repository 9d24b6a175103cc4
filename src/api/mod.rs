//! API handlers and router for the Ramblers REST endpoints

pub mod contacts;
pub mod dashboard;
pub mod equipment;
pub mod health;
pub mod middleware;
pub mod openapi;
pub mod pages;
pub mod portfolio;
pub mod rentals;
pub mod testimonials;
pub mod users;
pub mod webhooks;

use std::time::Duration;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post, put},
    Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    models::user::{IdentityClaims, User},
    AppState,
};

const LIMITER_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Extractor for the caller's verified identity token
pub struct AuthenticatedUser(pub IdentityClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Authentication("Not authenticated".to_string()))?;

        let claims = state.services.auth.verify(bearer.token())?;
        Ok(AuthenticatedUser(claims))
    }
}

/// Admin resolved by [`middleware::require_admin`]
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminUser>()
            .cloned()
            .ok_or_else(|| AppError::Authorization("Not authorized".to_string()))
    }
}

/// Public contact form, rate limited per client IP when enabled
fn contact_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new().route("/contact", post(contacts::submit_contact));

    let limits = &state.config.rate_limit;
    if !limits.enabled {
        return router;
    }

    match GovernorConfigBuilder::default()
        .per_second(limits.per_second)
        .burst_size(limits.burst_size)
        .finish()
    {
        Some(config) => {
            let config: &'static _ = Box::leak(Box::new(config));
            let limiter = config.limiter().clone();
            // Drop per-IP state that has fully replenished
            std::thread::spawn(move || loop {
                std::thread::sleep(LIMITER_CLEANUP_INTERVAL);
                tracing::debug!(tracked_clients = limiter.len(), "Pruning contact form rate limiter");
                limiter.retain_recent();
            });
            router.layer(GovernorLayer { config })
        }
        None => {
            tracing::warn!("Invalid rate limit settings, contact form is not rate limited");
            router
        }
    }
}

fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::get_dashboard))
        // Equipment
        .route("/equipment", get(equipment::list_all_equipment).post(equipment::create_equipment))
        .route(
            "/equipment/:id",
            put(equipment::update_equipment).delete(equipment::delete_equipment),
        )
        .route("/equipment/:id/rentals", get(equipment::list_equipment_rentals))
        // Rentals
        .route("/rentals", get(rentals::list_rentals))
        .route("/rentals/:id/status", put(rentals::update_rental_status))
        // Contacts
        .route("/contacts", get(contacts::list_contacts))
        .route("/contacts/:id", get(contacts::get_contact))
        .route("/contacts/:id/status", put(contacts::update_contact_status))
        // Portfolio
        .route("/portfolio", get(portfolio::list_all_portfolio).post(portfolio::create_portfolio_item))
        .route("/portfolio/order", put(portfolio::reorder_portfolio))
        .route(
            "/portfolio/:id",
            put(portfolio::update_portfolio_item).delete(portfolio::delete_portfolio_item),
        )
        // Pages
        .route("/pages", get(pages::list_all_pages).put(pages::upsert_page))
        // Testimonials
        .route("/testimonials", post(testimonials::create_testimonial))
        .route(
            "/testimonials/:id",
            put(testimonials::update_testimonial).delete(testimonials::delete_testimonial),
        )
        // Users
        .route("/users", get(users::list_users))
        .route("/users/:id/role", put(users::update_user_role))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_admin,
        ))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment catalog
        .route("/equipment", get(equipment::list_equipment))
        .route("/equipment/:id", get(equipment::get_equipment))
        .route("/equipment/:id/availability", get(equipment::get_availability))
        .route("/equipment/:id/quote", post(equipment::quote_rental))
        // Showcase
        .route("/portfolio", get(portfolio::list_portfolio))
        .route("/portfolio/categories", get(portfolio::list_categories))
        .route("/portfolio/:id", get(portfolio::get_portfolio_item))
        .route("/pages", get(pages::list_pages))
        .route("/pages/:slug", get(pages::get_page))
        .route("/testimonials", get(testimonials::list_testimonials))
        // Identity provider
        .route("/webhooks/clerk", post(webhooks::clerk_webhook))
        // Signed-in users
        .route("/me", get(users::get_me).post(users::ensure_me))
        .route("/me/rentals", get(rentals::list_my_rentals))
        .route("/rentals", post(rentals::create_rental))
        .route("/setup/promote", post(users::promote_me))
        .merge(contact_routes(&state))
        .nest("/admin", admin_routes(&state))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
