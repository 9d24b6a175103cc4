//! Business logic services

pub mod auth;
pub mod availability;
pub mod contacts;
pub mod dashboard;
pub mod equipment;
pub mod pages;
pub mod portfolio;
pub mod pricing;
pub mod rentals;
pub mod testimonials;
pub mod users;
pub mod webhooks;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub auth: auth::AuthService,
    pub users: users::UsersService,
    pub equipment: equipment::EquipmentService,
    pub rentals: rentals::RentalsService,
    pub contacts: contacts::ContactsService,
    pub portfolio: portfolio::PortfolioService,
    pub pages: pages::PagesService,
    pub testimonials: testimonials::TestimonialsService,
    pub webhooks: webhooks::WebhookService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            auth: auth::AuthService::new(&config.auth)?,
            users: users::UsersService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone(), config.rentals.clone()),
            rentals: rentals::RentalsService::new(repository.clone(), config.rentals.clone()),
            contacts: contacts::ContactsService::new(repository.clone()),
            portfolio: portfolio::PortfolioService::new(repository.clone()),
            pages: pages::PagesService::new(repository.clone()),
            testimonials: testimonials::TestimonialsService::new(repository.clone()),
            webhooks: webhooks::WebhookService::new(repository.clone(), config.webhook.clone()),
            dashboard: dashboard::DashboardService::new(repository.clone()),
            repository,
        })
    }
}
