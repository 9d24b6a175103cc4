//! Rental requests repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::rental::{NewRental, RentalRequest, RentalStatus},
};

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a pending rental request
    pub async fn create(&self, rental: &NewRental) -> AppResult<RentalRequest> {
        let row = sqlx::query_as::<_, RentalRequest>(
            r#"
            INSERT INTO rental_requests (equipment_id, user_id, start_date, end_date, quantity,
                                         total_price, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(rental.equipment_id)
        .bind(&rental.user_id)
        .bind(rental.start_date)
        .bind(rental.end_date)
        .bind(rental.quantity)
        .bind(rental.total_price)
        .bind(RentalStatus::Pending)
        .bind(&rental.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all rental requests, newest first, optionally by status
    pub async fn list(&self, status: Option<RentalStatus>) -> AppResult<Vec<RentalRequest>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, RentalRequest>(
                    "SELECT * FROM rental_requests WHERE status = $1 ORDER BY created_at DESC, id DESC"
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, RentalRequest>(
                    "SELECT * FROM rental_requests ORDER BY created_at DESC, id DESC"
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Most recent rental requests (dashboard)
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<RentalRequest>> {
        let rows = sqlx::query_as::<_, RentalRequest>(
            "SELECT * FROM rental_requests ORDER BY created_at DESC, id DESC LIMIT $1"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Rental requests submitted by one identity-provider user, newest first
    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<RentalRequest>> {
        let rows = sqlx::query_as::<_, RentalRequest>(
            "SELECT * FROM rental_requests WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All rental requests referencing one equipment item
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<RentalRequest>> {
        let rows = sqlx::query_as::<_, RentalRequest>(
            "SELECT * FROM rental_requests WHERE equipment_id = $1 ORDER BY start_date"
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Set the status of a rental request
    pub async fn update_status(&self, id: i32, status: RentalStatus) -> AppResult<RentalRequest> {
        sqlx::query_as::<_, RentalRequest>(
            "UPDATE rental_requests SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING *"
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Rental request {} not found", id)))
    }

    /// Count rental requests in a given status
    pub async fn count_by_status(&self, status: RentalStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rental_requests WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
