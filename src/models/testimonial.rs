//! Testimonial model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Client testimonial
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Testimonial {
    pub id: i32,
    pub client_name: String,
    pub client_company: Option<String>,
    pub content: String,
    /// 1 to 5
    pub rating: i16,
    pub project_type: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, message = "Client name is required"))]
    pub client_name: String,
    pub client_company: Option<String>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,
    pub project_type: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, message = "Client name cannot be empty"))]
    pub client_name: Option<String>,
    pub client_company: Option<String>,
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub project_type: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TestimonialQuery {
    pub featured: Option<bool>,
    pub min_rating: Option<i16>,
}
