//! Rental request model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::text_enum;

/// Rental request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "pending",
            RentalStatus::Approved => "approved",
            RentalStatus::Rejected => "rejected",
            RentalStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for RentalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RentalStatus::Pending),
            "approved" => Ok(RentalStatus::Approved),
            "rejected" => Ok(RentalStatus::Rejected),
            "completed" => Ok(RentalStatus::Completed),
            _ => Err(format!("Invalid rental status: {}", s)),
        }
    }
}

text_enum!(RentalStatus);

/// Rental request from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RentalRequest {
    pub id: i32,
    pub equipment_id: i32,
    /// Identity provider subject id of the requester
    pub user_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub quantity: i32,
    /// Total computed by the server at submission time
    pub total_price: Decimal,
    pub status: RentalStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submit rental request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRentalRequest {
    pub equipment_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Number of units (defaults to 1)
    #[validate(range(min = 1, max = 100, message = "Quantity must be between 1 and 100"))]
    pub quantity: Option<i32>,
    /// Total displayed to the customer; informational only
    pub total_price: Option<Decimal>,
    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

/// Internal insert payload, after pricing
#[derive(Debug, Clone)]
pub struct NewRental {
    pub equipment_id: i32,
    pub user_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub quantity: i32,
    pub total_price: Decimal,
    pub notes: Option<String>,
}

/// Update rental status request (admin)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRentalStatus {
    pub status: RentalStatus,
}

/// Admin rental listing filter
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RentalQuery {
    pub status: Option<RentalStatus>,
}

/// Price quote request for a candidate rental range
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct QuoteRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(range(min = 1, max = 100, message = "Quantity must be between 1 and 100"))]
    pub quantity: Option<i32>,
}
