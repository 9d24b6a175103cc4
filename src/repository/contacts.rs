//! Contact requests repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::contact::{ContactRequest, ContactStatus, CreateContactRequest},
};

#[derive(Clone)]
pub struct ContactsRepository {
    pool: Pool<Postgres>,
}

impl ContactsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new lead. Every call inserts a row; there is no dedup.
    pub async fn create(&self, data: &CreateContactRequest) -> AppResult<ContactRequest> {
        let row = sqlx::query_as::<_, ContactRequest>(
            r#"
            INSERT INTO contact_requests (name, email, phone, company, message, service_type,
                                          project_type, timeline, budget, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.company)
        .bind(&data.message)
        .bind(&data.service_type)
        .bind(&data.project_type)
        .bind(&data.timeline)
        .bind(&data.budget)
        .bind(ContactStatus::New)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Get contact request by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<ContactRequest> {
        sqlx::query_as::<_, ContactRequest>("SELECT * FROM contact_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact request {} not found", id)))
    }

    /// List contact requests, newest first, optionally by status
    pub async fn list(&self, status: Option<ContactStatus>) -> AppResult<Vec<ContactRequest>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, ContactRequest>(
                    "SELECT * FROM contact_requests WHERE status = $1 ORDER BY created_at DESC, id DESC"
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ContactRequest>(
                    "SELECT * FROM contact_requests ORDER BY created_at DESC, id DESC"
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Most recent contact requests (dashboard)
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<ContactRequest>> {
        let rows = sqlx::query_as::<_, ContactRequest>(
            "SELECT * FROM contact_requests ORDER BY created_at DESC, id DESC LIMIT $1"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Set the status; `responded_at` is only overwritten when provided
    pub async fn update_status(
        &self,
        id: i32,
        status: ContactStatus,
        responded_at: Option<DateTime<Utc>>,
    ) -> AppResult<ContactRequest> {
        sqlx::query_as::<_, ContactRequest>(
            r#"
            UPDATE contact_requests
            SET status = $1, responded_at = COALESCE($2, responded_at)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(responded_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact request {} not found", id)))
    }

    /// Count contact requests in a given status
    pub async fn count_by_status(&self, status: ContactStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_requests WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
