//! Portfolio repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::portfolio::{
        CreatePortfolioItem, PortfolioFilter, PortfolioItem, PortfolioPosition, UpdatePortfolioItem,
    },
};

#[derive(Clone)]
pub struct PortfolioRepository {
    pool: Pool<Postgres>,
}

impl PortfolioRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List portfolio items matching the filter, in display order
    pub async fn list(&self, filter: &PortfolioFilter) -> AppResult<Vec<PortfolioItem>> {
        let query = format!(
            "SELECT * FROM portfolio_items {} ORDER BY display_order, id",
            filter.where_clause()
        );

        let mut builder = sqlx::query_as::<_, PortfolioItem>(&query);
        if let Some(published) = filter.published {
            builder = builder.bind(published);
        }
        if let Some(featured) = filter.featured {
            builder = builder.bind(featured);
        }
        if let Some(ref category) = filter.category {
            builder = builder.bind(category);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get portfolio item by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<PortfolioItem> {
        sqlx::query_as::<_, PortfolioItem>("SELECT * FROM portfolio_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Portfolio item {} not found", id)))
    }

    /// Distinct categories of published items, sorted
    pub async fn published_categories(&self) -> AppResult<Vec<String>> {
        let rows: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT category FROM portfolio_items WHERE published = TRUE ORDER BY category"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create portfolio item
    pub async fn create(&self, data: &CreatePortfolioItem) -> AppResult<PortfolioItem> {
        let row = sqlx::query_as::<_, PortfolioItem>(
            r#"
            INSERT INTO portfolio_items (title, description, category, client_name, client_company,
                                         video_url, video_type, thumbnail_url, featured, published,
                                         display_order, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.client_name)
        .bind(&data.client_company)
        .bind(&data.video_url)
        .bind(data.video_type)
        .bind(&data.thumbnail_url)
        .bind(data.featured)
        .bind(data.published)
        .bind(data.display_order)
        .bind(&data.tags)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update the provided fields of a portfolio item
    pub async fn update(&self, id: i32, data: &UpdatePortfolioItem) -> AppResult<PortfolioItem> {
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.title, "title");
        add_field!(data.description, "description");
        add_field!(data.category, "category");
        add_field!(data.client_name, "client_name");
        add_field!(data.client_company, "client_company");
        add_field!(data.video_url, "video_url");
        add_field!(data.video_type, "video_type");
        add_field!(data.thumbnail_url, "thumbnail_url");
        add_field!(data.featured, "featured");
        add_field!(data.published, "published");
        add_field!(data.display_order, "display_order");
        add_field!(data.tags, "tags");

        let query = format!(
            "UPDATE portfolio_items SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, PortfolioItem>(&query).bind(Utc::now());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.title);
        bind_field!(data.description);
        bind_field!(data.category);
        bind_field!(data.client_name);
        bind_field!(data.client_company);
        bind_field!(data.video_url);
        bind_field!(data.video_type);
        bind_field!(data.thumbnail_url);
        bind_field!(data.featured);
        bind_field!(data.published);
        bind_field!(data.display_order);
        bind_field!(data.tags);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Portfolio item {} not found", id)))
    }

    /// Delete portfolio item
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Portfolio item {} not found", id)));
        }
        Ok(())
    }

    /// Apply a batch of display positions atomically
    pub async fn reorder(&self, positions: &[PortfolioPosition]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        for position in positions {
            let result = sqlx::query(
                "UPDATE portfolio_items SET display_order = $1, updated_at = $2 WHERE id = $3"
            )
            .bind(position.display_order)
            .bind(now)
            .bind(position.id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::NotFound(format!("Portfolio item {} not found", position.id)));
            }
        }

        tx.commit().await?;
        Ok(())
    }
}
