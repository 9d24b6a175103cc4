//! Rentals service: booking requests and their review

use chrono::Utc;
use validator::Validate;

use crate::{
    config::RentalConfig,
    error::{AppError, AppResult},
    models::{
        rental::{CreateRentalRequest, NewRental, RentalRequest, RentalStatus},
        user::{IdentityClaims, UserRole},
    },
    repository::Repository,
    services::{
        availability::{check_span, AvailabilityCalendar},
        pricing,
    },
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
    config: RentalConfig,
}

impl RentalsService {
    pub fn new(repository: Repository, config: RentalConfig) -> Self {
        Self { repository, config }
    }

    /// Submit a rental request for the caller.
    ///
    /// The total is priced from the stored rate card; a client-side total
    /// is only compared and logged.
    pub async fn create(&self, claims: &IdentityClaims, data: &CreateRentalRequest) -> AppResult<RentalRequest> {
        data.validate()?;
        check_span(data.start_date, data.end_date, self.config.max_days)?;

        let user = self
            .repository
            .users
            .get_or_create(&claims.to_sync_user(), UserRole::Client)
            .await?;

        let equipment = self.repository.equipment.get_by_id(data.equipment_id).await?;
        if !equipment.availability {
            return Err(AppError::BusinessRule(format!(
                "Equipment {} is not available for rental",
                equipment.id
            )));
        }

        let existing = self.repository.rentals.list_for_equipment(equipment.id).await?;
        AvailabilityCalendar::from_rentals(&existing, Utc::now().date_naive())
            .check_range(data.start_date, data.end_date)?;

        let quantity = data.quantity.unwrap_or(1);
        let quote = pricing::quote(&equipment.rate_card(), data.start_date, data.end_date, quantity);

        if let Some(submitted) = data.total_price {
            if submitted != quote.total_price {
                tracing::warn!(
                    equipment_id = equipment.id,
                    submitted = %submitted,
                    computed = %quote.total_price,
                    "Client price differs from server price, using server price"
                );
            }
        }

        let rental = self
            .repository
            .rentals
            .create(&NewRental {
                equipment_id: equipment.id,
                user_id: user.clerk_id,
                start_date: data.start_date,
                end_date: data.end_date,
                quantity,
                total_price: quote.total_price,
                notes: data.notes.clone(),
            })
            .await?;

        tracing::info!(
            rental_id = rental.id,
            equipment_id = rental.equipment_id,
            total = %rental.total_price,
            "Rental request submitted"
        );
        Ok(rental)
    }

    /// Caller's own requests, newest first
    pub async fn list_mine(&self, claims: &IdentityClaims) -> AppResult<Vec<RentalRequest>> {
        self.repository.rentals.list_for_user(&claims.sub).await
    }

    pub async fn list(&self, status: Option<RentalStatus>) -> AppResult<Vec<RentalRequest>> {
        self.repository.rentals.list(status).await
    }

    pub async fn update_status(&self, id: i32, status: RentalStatus) -> AppResult<RentalRequest> {
        let rental = self.repository.rentals.update_status(id, status).await?;
        tracing::info!(rental_id = id, status = %status, "Rental status updated");
        Ok(rental)
    }
}
