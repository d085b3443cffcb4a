//! PostgreSQL user store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use userhub_entity::user::{NewUser, User, UserChanges, UserId};

use crate::store::{StoreResult, UserStore};

/// User store backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store over an open pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create(&self, data: &NewUser) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, tel, role) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password)
        .bind(&data.tel)
        .bind(&data.role)
        .fetch_one(&self.pool)
        .await?;

        debug!(user_id = %user.id, "Inserted user row");
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> StoreResult<User> {
        // RowNotFound from fetch_one surfaces as StoreError::NotFound.
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, \
                              email = COALESCE($3, email), \
                              password = COALESCE($4, password), \
                              tel = $5, \
                              role = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.password)
        .bind(&changes.tel)
        .bind(&changes.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn delete(&self, id: UserId) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        debug!(user_id = %user.id, "Deleted user row");
        Ok(user)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
