//! Ramblers Studio server
//!
//! REST JSON API behind the Ramblers video production website: the rental
//! equipment catalog with pricing and availability, the contact funnel,
//! the portfolio, CMS pages and testimonials, and the admin back office.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build repositories and services on top of a database pool
    pub fn new(config: AppConfig, pool: sqlx::PgPool) -> AppResult<Self> {
        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository, &config)?;
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}
