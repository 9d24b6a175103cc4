//! Equipment repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment (admin)
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipment ORDER BY category, name"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List equipment offered for rental, optionally restricted to one category
    pub async fn list_available(&self, category: Option<&str>) -> AppResult<Vec<Equipment>> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, Equipment>(
                    "SELECT * FROM equipment WHERE availability = TRUE AND category = $1 ORDER BY name"
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Equipment>(
                    "SELECT * FROM equipment WHERE availability = TRUE ORDER BY category, name"
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (name, description, category, price_per_day, price_per_week,
                                   price_per_month, availability, image_url, specifications)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(data.price_per_day)
        .bind(data.price_per_week)
        .bind(data.price_per_month)
        .bind(data.availability.unwrap_or(true))
        .bind(&data.image_url)
        .bind(&data.specifications)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update the provided fields of an equipment record
    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
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

        add_field!(data.name, "name");
        add_field!(data.description, "description");
        add_field!(data.category, "category");
        add_field!(data.price_per_day, "price_per_day");
        add_field!(data.price_per_week, "price_per_week");
        add_field!(data.price_per_month, "price_per_month");
        add_field!(data.availability, "availability");
        add_field!(data.image_url, "image_url");
        add_field!(data.specifications, "specifications");

        let query = format!(
            "UPDATE equipment SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(Utc::now());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.description);
        bind_field!(data.category);
        bind_field!(data.price_per_day);
        bind_field!(data.price_per_week);
        bind_field!(data.price_per_month);
        bind_field!(data.availability);
        bind_field!(data.image_url);
        bind_field!(data.specifications);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment (its rental requests are removed by cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Count all equipment (dashboard)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
