//! CMS pages repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::page::{Page, UpsertPage},
};

#[derive(Clone)]
pub struct PagesRepository {
    pool: Pool<Postgres>,
}

impl PagesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List pages, optionally only the published ones
    pub async fn list(&self, published_only: bool) -> AppResult<Vec<Page>> {
        let query = if published_only {
            "SELECT * FROM pages WHERE published = TRUE ORDER BY slug"
        } else {
            "SELECT * FROM pages ORDER BY slug"
        };
        let rows = sqlx::query_as::<_, Page>(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Find a page by slug, published or not
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Page>> {
        let row = sqlx::query_as::<_, Page>("SELECT * FROM pages WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert the page, or replace the one with the same slug
    pub async fn upsert(&self, data: &UpsertPage) -> AppResult<Page> {
        let row = sqlx::query_as::<_, Page>(
            r#"
            INSERT INTO pages (slug, title, content, meta_title, meta_description, published)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (slug) DO UPDATE
            SET title = EXCLUDED.title,
                content = EXCLUDED.content,
                meta_title = EXCLUDED.meta_title,
                meta_description = EXCLUDED.meta_description,
                published = EXCLUDED.published,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.meta_title)
        .bind(&data.meta_description)
        .bind(data.published)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
