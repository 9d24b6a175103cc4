//! Admin dashboard summary

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{ContactRequest, ContactStatus, RentalRequest, RentalStatus},
    repository::Repository,
};

const RECENT_LIMIT: i64 = 5;

/// Back-office overview
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_equipment: i64,
    pub pending_rentals: i64,
    pub approved_rentals: i64,
    pub new_contacts: i64,
    pub recent_rentals: Vec<RentalRequest>,
    pub recent_contacts: Vec<ContactRequest>,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let repo = &self.repository;
        let (total_equipment, pending_rentals, approved_rentals, new_contacts, recent_rentals, recent_contacts) =
            tokio::try_join!(
                repo.equipment.count(),
                repo.rentals.count_by_status(RentalStatus::Pending),
                repo.rentals.count_by_status(RentalStatus::Approved),
                repo.contacts.count_by_status(ContactStatus::New),
                repo.rentals.recent(RECENT_LIMIT),
                repo.contacts.recent(RECENT_LIMIT),
            )?;

        Ok(DashboardSummary {
            total_equipment,
            pending_rentals,
            approved_rentals,
            new_contacts,
            recent_rentals,
            recent_contacts,
        })
    }
}
