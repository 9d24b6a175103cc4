//! Users repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{SyncUser, User, UserRole},
};

/// Advisory lock key guarding initial admin setup
const ADMIN_SETUP_LOCK: i64 = 0x5241_4d42_4c45_5253;

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Find user by identity-provider subject id
    pub async fn find_by_clerk_id(&self, clerk_id: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE clerk_id = $1")
            .bind(clerk_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert the user with `role`, or refresh identity fields of an
    /// existing one. The stored role of an existing user is kept.
    pub async fn upsert(&self, user: &SyncUser, role: UserRole) -> AppResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (clerk_id, email, first_name, last_name, role)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (clerk_id) DO UPDATE
            SET email = EXCLUDED.email,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(&user.clerk_id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert the user if missing; an existing row is returned untouched
    pub async fn get_or_create(&self, user: &SyncUser, role: UserRole) -> AppResult<User> {
        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (clerk_id, email, first_name, last_name, role)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (clerk_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(&user.clerk_id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(user) => Ok(user),
            None => self
                .find_by_clerk_id(&user.clerk_id)
                .await?
                .ok_or_else(|| AppError::Internal(format!("User {} vanished after insert", user.clerk_id))),
        }
    }

    /// Set a user's role
    pub async fn update_role(&self, id: i32, role: UserRole) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET role = $1, updated_at = NOW() WHERE id = $2 RETURNING *"
        )
        .bind(role)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Grant the admin role to `id` unless an admin already exists.
    ///
    /// Concurrent callers are serialized on an advisory lock, so at most
    /// one of them is promoted. Returns `None` when an admin was found.
    pub async fn promote_first_admin(&self, id: i32) -> AppResult<Option<User>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(ADMIN_SETUP_LOCK)
            .execute(&mut *tx)
            .await?;

        let promoted = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET role = $1, updated_at = NOW()
            WHERE id = $2 AND NOT EXISTS (SELECT 1 FROM users WHERE role = $1)
            RETURNING *
            "#,
        )
        .bind(UserRole::Admin)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(promoted)
    }
}
