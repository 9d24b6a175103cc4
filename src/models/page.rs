//! CMS page model

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// Slug-keyed content page
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Page {
    pub id: i32,
    pub slug: String,
    pub title: String,
    /// Page body (markdown)
    pub content: String,
    pub meta_title: String,
    pub meta_description: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create or replace a page by slug
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertPage {
    #[validate(regex(path = *SLUG_RE, message = "Slug must be lowercase words separated by dashes"))]
    pub slug: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub content: String,
    #[validate(length(max = 70, message = "Meta title should stay under 70 characters"))]
    pub meta_title: String,
    #[validate(length(max = 160, message = "Meta description should stay under 160 characters"))]
    pub meta_description: String,
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(slug: &str) -> UpsertPage {
        UpsertPage {
            slug: slug.to_string(),
            title: "About".to_string(),
            content: "We tell stories.".to_string(),
            meta_title: "About us".to_string(),
            meta_description: "Who we are".to_string(),
            published: true,
        }
    }

    #[test]
    fn test_slug_format() {
        assert!(page("about").validate().is_ok());
        assert!(page("privacy-policy").validate().is_ok());
        assert!(page("About Us").validate().is_err());
        assert!(page("trailing-").validate().is_err());
    }
}
