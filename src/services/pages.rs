//! CMS pages service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::page::{Page, UpsertPage},
    repository::Repository,
};

#[derive(Clone)]
pub struct PagesService {
    repository: Repository,
}

impl PagesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_published(&self) -> AppResult<Vec<Page>> {
        self.repository.pages.list(true).await
    }

    pub async fn list_all(&self) -> AppResult<Vec<Page>> {
        self.repository.pages.list(false).await
    }

    /// Published page by slug; unpublished pages are reported as missing
    pub async fn get_published(&self, slug: &str) -> AppResult<Page> {
        self.repository
            .pages
            .find_by_slug(slug)
            .await?
            .filter(|page| page.published)
            .ok_or_else(|| AppError::NotFound(format!("Page '{}' not found", slug)))
    }

    pub async fn upsert(&self, data: &UpsertPage) -> AppResult<Page> {
        data.validate()?;
        let page = self.repository.pages.upsert(data).await?;
        tracing::info!(slug = %page.slug, published = page.published, "Page saved");
        Ok(page)
    }
}
