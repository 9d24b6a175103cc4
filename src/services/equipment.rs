//! Equipment service: rental catalog, availability and quotes

use validator::Validate;

use crate::{
    config::RentalConfig,
    error::AppResult,
    models::{
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
        rental::{QuoteRequest, RentalRequest},
    },
    repository::Repository,
    services::{
        availability::{blocked_dates, check_span, Availability},
        pricing::{self, PriceQuote},
    },
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    rentals: RentalConfig,
}

impl EquipmentService {
    pub fn new(repository: Repository, rentals: RentalConfig) -> Self {
        Self { repository, rentals }
    }

    /// Public catalog: equipment offered for rental
    pub async fn catalog(&self, category: Option<&str>) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list_available(category).await
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let equipment = self.repository.equipment.create(data).await?;
        tracing::info!(equipment_id = equipment.id, name = %equipment.name, "Equipment created");
        Ok(equipment)
    }

    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        self.repository.equipment.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipment.delete(id).await?;
        tracing::info!(equipment_id = id, "Equipment deleted");
        Ok(())
    }

    /// All rental requests for one item, ordered by start date
    pub async fn rentals(&self, id: i32) -> AppResult<Vec<RentalRequest>> {
        self.repository.equipment.get_by_id(id).await?;
        self.repository.rentals.list_for_equipment(id).await
    }

    /// Days blocked by approved rentals
    pub async fn availability(&self, id: i32) -> AppResult<Availability> {
        let rentals = self.rentals(id).await?;
        Ok(Availability {
            equipment_id: id,
            blocked_dates: blocked_dates(&rentals).into_iter().collect(),
        })
    }

    /// Price a candidate range without booking it
    pub async fn quote(&self, id: i32, request: &QuoteRequest) -> AppResult<PriceQuote> {
        request.validate()?;
        check_span(request.start_date, request.end_date, self.rentals.max_days)?;
        let equipment = self.repository.equipment.get_by_id(id).await?;
        Ok(pricing::quote(
            &equipment.rate_card(),
            request.start_date,
            request.end_date,
            request.quantity.unwrap_or(1),
        ))
    }
}
