//! Equipment model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::services::pricing::RateCard;

/// Rental equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Category (Camera, Lighting, Audio, ...)
    pub category: String,
    pub price_per_day: Decimal,
    pub price_per_week: Decimal,
    pub price_per_month: Decimal,
    /// Whether the item is offered for rental
    pub availability: bool,
    pub image_url: Option<String>,
    pub specifications: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    pub fn rate_card(&self) -> RateCard {
        RateCard {
            daily: self.price_per_day,
            weekly: self.price_per_week,
            monthly: self.price_per_month,
        }
    }
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(custom(function = "non_negative"))]
    pub price_per_day: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub price_per_week: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub price_per_month: Decimal,
    /// Defaults to true
    pub availability: Option<bool>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
    pub specifications: Option<String>,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub price_per_day: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub price_per_week: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub price_per_month: Option<Decimal>,
    pub availability: Option<bool>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
    pub specifications: Option<String>,
}

/// Public catalog query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EquipmentQuery {
    /// Only equipment in this category
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(day: Decimal) -> CreateEquipment {
        CreateEquipment {
            name: "Sony FX6".to_string(),
            description: "Full-frame cinema camera".to_string(),
            category: "Camera".to_string(),
            price_per_day: day,
            price_per_week: Decimal::from(700),
            price_per_month: Decimal::from(2400),
            availability: None,
            image_url: None,
            specifications: None,
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(create(Decimal::from(150)).validate().is_ok());
        assert!(create(Decimal::from(-1)).validate().is_err());
    }

    #[test]
    fn test_rate_card_uses_listed_prices() {
        let now = Utc::now();
        let equipment = Equipment {
            id: 3,
            name: "Aputure 600d".to_string(),
            description: String::new(),
            category: "Lighting".to_string(),
            price_per_day: Decimal::from(90),
            price_per_week: Decimal::from(450),
            price_per_month: Decimal::from(1500),
            availability: true,
            image_url: None,
            specifications: None,
            created_at: now,
            updated_at: now,
        };
        let card = equipment.rate_card();
        assert_eq!(card.daily, Decimal::from(90));
        assert_eq!(card.weekly, Decimal::from(450));
        assert_eq!(card.monthly, Decimal::from(1500));
    }
}
