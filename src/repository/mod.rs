//! Repository layer for database operations

pub mod contacts;
pub mod equipment;
pub mod pages;
pub mod portfolio;
pub mod rentals;
pub mod testimonials;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub rentals: rentals::RentalsRepository,
    pub contacts: contacts::ContactsRepository,
    pub portfolio: portfolio::PortfolioRepository,
    pub pages: pages::PagesRepository,
    pub testimonials: testimonials::TestimonialsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            rentals: rentals::RentalsRepository::new(pool.clone()),
            contacts: contacts::ContactsRepository::new(pool.clone()),
            portfolio: portfolio::PortfolioRepository::new(pool.clone()),
            pages: pages::PagesRepository::new(pool.clone()),
            testimonials: testimonials::TestimonialsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database (readiness check)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
