//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    contacts, dashboard, equipment, health, pages, portfolio, rentals, testimonials, users, webhooks,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ramblers API",
        version = "0.3.0",
        description = "Video production studio: equipment rental, leads, portfolio and site content",
        license(name = "MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::get_availability,
        equipment::quote_rental,
        // Rentals
        rentals::create_rental,
        rentals::list_my_rentals,
        // Contact
        contacts::submit_contact,
        // Showcase
        portfolio::list_portfolio,
        portfolio::list_categories,
        portfolio::get_portfolio_item,
        pages::list_pages,
        pages::get_page,
        testimonials::list_testimonials,
        // Users
        users::get_me,
        users::ensure_me,
        users::promote_me,
        // Webhooks
        webhooks::clerk_webhook,
        // Admin
        dashboard::get_dashboard,
        equipment::list_all_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::list_equipment_rentals,
        rentals::list_rentals,
        rentals::update_rental_status,
        contacts::list_contacts,
        contacts::get_contact,
        contacts::update_contact_status,
        portfolio::list_all_portfolio,
        portfolio::create_portfolio_item,
        portfolio::update_portfolio_item,
        portfolio::delete_portfolio_item,
        portfolio::reorder_portfolio,
        pages::list_all_pages,
        pages::upsert_page,
        testimonials::create_testimonial,
        testimonials::update_testimonial,
        testimonials::delete_testimonial,
        users::list_users,
        users::update_user_role,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::services::availability::Availability,
            crate::services::pricing::PriceQuote,
            // Rentals
            crate::models::rental::RentalRequest,
            crate::models::rental::RentalStatus,
            crate::models::rental::CreateRentalRequest,
            crate::models::rental::UpdateRentalStatus,
            crate::models::rental::QuoteRequest,
            // Contacts
            crate::models::contact::ContactRequest,
            crate::models::contact::ContactStatus,
            crate::models::contact::CreateContactRequest,
            crate::models::contact::UpdateContactStatus,
            // Portfolio
            crate::models::portfolio::PortfolioItem,
            crate::models::portfolio::VideoType,
            crate::models::portfolio::CreatePortfolioItem,
            crate::models::portfolio::UpdatePortfolioItem,
            crate::models::portfolio::PortfolioPosition,
            crate::models::portfolio::ReorderPortfolio,
            // Pages
            crate::models::page::Page,
            crate::models::page::UpsertPage,
            // Testimonials
            crate::models::testimonial::Testimonial,
            crate::models::testimonial::CreateTestimonial,
            crate::models::testimonial::UpdateTestimonial,
            // Users
            crate::models::user::User,
            crate::models::user::UserRole,
            crate::models::user::UpdateUserRole,
            // Dashboard
            crate::services::dashboard::DashboardSummary,
            // Webhooks
            crate::services::webhooks::WebhookAck,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Rental equipment catalog"),
        (name = "rentals", description = "Rental requests"),
        (name = "contact", description = "Contact form"),
        (name = "portfolio", description = "Showreel portfolio"),
        (name = "pages", description = "Site content pages"),
        (name = "testimonials", description = "Client testimonials"),
        (name = "users", description = "Current user"),
        (name = "webhooks", description = "Identity provider webhooks"),
        (name = "admin", description = "Back office (admin role required)")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
