//! Portfolio (showreel) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::text_enum;

/// Hosting platform of a portfolio video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    Youtube,
    Vimeo,
    Direct,
    Embed,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Youtube => "youtube",
            VideoType::Vimeo => "vimeo",
            VideoType::Direct => "direct",
            VideoType::Embed => "embed",
        }
    }
}

impl std::str::FromStr for VideoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "youtube" => Ok(VideoType::Youtube),
            "vimeo" => Ok(VideoType::Vimeo),
            "direct" => Ok(VideoType::Direct),
            "embed" => Ok(VideoType::Embed),
            _ => Err(format!("Invalid video type: {}", s)),
        }
    }
}

text_enum!(VideoType);

/// Portfolio item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PortfolioItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Category (Commercial, Corporate, Event, ...)
    pub category: String,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
    pub video_url: String,
    pub video_type: VideoType,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    /// Position in the showcase grid (ascending)
    pub display_order: i32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create portfolio item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePortfolioItem {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
    #[validate(url(message = "Invalid video URL"))]
    pub video_url: String,
    pub video_type: VideoType,
    #[validate(url(message = "Invalid thumbnail URL"))]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Update portfolio item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePortfolioItem {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
    #[validate(url(message = "Invalid video URL"))]
    pub video_url: Option<String>,
    pub video_type: Option<VideoType>,
    #[validate(url(message = "Invalid thumbnail URL"))]
    pub thumbnail_url: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub display_order: Option<i32>,
    pub tags: Option<Vec<String>>,
}

/// One entry of a batch reorder
#[derive(Debug, Deserialize, ToSchema)]
pub struct PortfolioPosition {
    pub id: i32,
    pub display_order: i32,
}

/// Batch reorder request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderPortfolio {
    pub items: Vec<PortfolioPosition>,
}

/// Public portfolio query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PortfolioQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Row filter for portfolio listings
#[derive(Debug, Clone, Default)]
pub struct PortfolioFilter {
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub category: Option<String>,
}

impl PortfolioFilter {
    /// Public listing: published items only
    pub fn public(query: PortfolioQuery) -> Self {
        Self {
            published: Some(true),
            featured: query.featured,
            category: query.category,
        }
    }

    /// WHERE clause with placeholders bound in the order
    /// published, featured, category (absent filters are skipped)
    pub fn where_clause(&self) -> String {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if self.published.is_some() {
            conditions.push(format!("published = ${}", idx));
            idx += 1;
        }
        if self.featured.is_some() {
            conditions.push(format!("featured = ${}", idx));
            idx += 1;
        }
        if self.category.is_some() {
            conditions.push(format!("category = ${}", idx));
        }

        if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_category_filter_requires_published() {
        let filter = PortfolioFilter::public(PortfolioQuery {
            category: Some("Commercial".to_string()),
            featured: None,
        });
        assert_eq!(filter.published, Some(true));
        assert_eq!(filter.where_clause(), "WHERE published = $1 AND category = $2");
    }

    #[test]
    fn test_all_filters_numbered_in_bind_order() {
        let filter = PortfolioFilter {
            published: Some(true),
            featured: Some(true),
            category: Some("Event".to_string()),
        };
        assert_eq!(
            filter.where_clause(),
            "WHERE published = $1 AND featured = $2 AND category = $3"
        );
    }

    #[test]
    fn test_empty_filter_has_no_clause() {
        assert_eq!(PortfolioFilter::default().where_clause(), "");
    }
}
