//! Portfolio service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::portfolio::{
        CreatePortfolioItem, PortfolioFilter, PortfolioItem, PortfolioPosition, PortfolioQuery,
        UpdatePortfolioItem,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct PortfolioService {
    repository: Repository,
}

impl PortfolioService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Published items in display order
    pub async fn list_public(&self, query: PortfolioQuery) -> AppResult<Vec<PortfolioItem>> {
        self.repository.portfolio.list(&PortfolioFilter::public(query)).await
    }

    /// Published item by id; drafts are reported as missing
    pub async fn get_public(&self, id: i32) -> AppResult<PortfolioItem> {
        let item = self.repository.portfolio.get_by_id(id).await?;
        if !item.published {
            return Err(AppError::NotFound(format!("Portfolio item {} not found", id)));
        }
        Ok(item)
    }

    pub async fn categories(&self) -> AppResult<Vec<String>> {
        self.repository.portfolio.published_categories().await
    }

    pub async fn list_all(&self) -> AppResult<Vec<PortfolioItem>> {
        self.repository.portfolio.list(&PortfolioFilter::default()).await
    }

    pub async fn create(&self, data: &CreatePortfolioItem) -> AppResult<PortfolioItem> {
        data.validate()?;
        let item = self.repository.portfolio.create(data).await?;
        tracing::info!(portfolio_id = item.id, title = %item.title, "Portfolio item created");
        Ok(item)
    }

    pub async fn update(&self, id: i32, data: &UpdatePortfolioItem) -> AppResult<PortfolioItem> {
        data.validate()?;
        self.repository.portfolio.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.portfolio.delete(id).await
    }

    pub async fn reorder(&self, positions: &[PortfolioPosition]) -> AppResult<()> {
        if positions.is_empty() {
            return Err(AppError::BadRequest("Nothing to reorder".to_string()));
        }
        self.repository.portfolio.reorder(positions).await?;
        tracing::info!(count = positions.len(), "Portfolio reordered");
        Ok(())
    }
}
