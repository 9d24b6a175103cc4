//! Contact (lead / quote request) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::text_enum;

/// Lead pipeline status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Contacted,
    Quoted,
    Won,
    Lost,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Contacted => "contacted",
            ContactStatus::Quoted => "quoted",
            ContactStatus::Won => "won",
            ContactStatus::Lost => "lost",
        }
    }

    /// Response timestamp to record when moving a lead to this status.
    ///
    /// `None` leaves the stored `responded_at` untouched: going back to
    /// `new` never clears an earlier response time.
    pub fn response_timestamp(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            ContactStatus::New => None,
            _ => Some(now),
        }
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(ContactStatus::New),
            "contacted" => Ok(ContactStatus::Contacted),
            "quoted" => Ok(ContactStatus::Quoted),
            "won" => Ok(ContactStatus::Won),
            "lost" => Ok(ContactStatus::Lost),
            _ => Err(format!("Invalid contact status: {}", s)),
        }
    }
}

text_enum!(ContactStatus);

/// Contact request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContactRequest {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
    /// Requested service (production, editing, rental, ...)
    pub service_type: String,
    pub project_type: Option<String>,
    pub timeline: Option<String>,
    pub budget: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

/// Public contact form submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 50, message = "Phone number is too long"))]
    pub phone: Option<String>,
    #[validate(length(max = 200, message = "Company name is too long"))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
    #[validate(length(min = 1, message = "Service type is required"))]
    pub service_type: String,
    pub project_type: Option<String>,
    pub timeline: Option<String>,
    pub budget: Option<String>,
}

/// Update contact status request (admin)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContactStatus {
    pub status: ContactStatus,
}

/// Admin contact listing filter
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ContactQuery {
    pub status: Option<ContactStatus>,
}
