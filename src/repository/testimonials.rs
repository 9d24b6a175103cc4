//! Testimonials repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial},
};

#[derive(Clone)]
pub struct TestimonialsRepository {
    pool: Pool<Postgres>,
}

impl TestimonialsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List testimonials, newest first, with optional featured / rating filters
    pub async fn list(&self, featured: Option<bool>, min_rating: Option<i16>) -> AppResult<Vec<Testimonial>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if featured.is_some() {
            conditions.push(format!("featured = ${}", idx));
            idx += 1;
        }
        if min_rating.is_some() {
            conditions.push(format!("rating >= ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT * FROM testimonials {} ORDER BY created_at DESC, id DESC",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Testimonial>(&query);
        if let Some(featured) = featured {
            builder = builder.bind(featured);
        }
        if let Some(min_rating) = min_rating {
            builder = builder.bind(min_rating);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &CreateTestimonial) -> AppResult<Testimonial> {
        let row = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (client_name, client_company, content, rating, project_type, featured)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.client_name)
        .bind(&data.client_company)
        .bind(&data.content)
        .bind(data.rating)
        .bind(&data.project_type)
        .bind(data.featured)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateTestimonial) -> AppResult<Testimonial> {
        sqlx::query_as::<_, Testimonial>(
            r#"
            UPDATE testimonials
            SET client_name = COALESCE($1, client_name),
                client_company = COALESCE($2, client_company),
                content = COALESCE($3, content),
                rating = COALESCE($4, rating),
                project_type = COALESCE($5, project_type),
                featured = COALESCE($6, featured)
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&data.client_name)
        .bind(&data.client_company)
        .bind(&data.content)
        .bind(data.rating)
        .bind(&data.project_type)
        .bind(data.featured)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Testimonial {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Testimonial {} not found", id)));
        }
        Ok(())
    }
}
