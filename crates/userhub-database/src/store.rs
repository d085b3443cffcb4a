//! The record store abstraction over the `users` table.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use userhub_entity::user::{NewUser, User, UserChanges, UserId};

/// Result of a single record store call.
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of a failed record store call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the given key.
    #[error("record not found")]
    NotFound,
    /// A unique constraint rejected the write.
    #[error("unique constraint violated: {constraint}")]
    Conflict {
        /// Name of the violated constraint.
        constraint: String,
    },
    /// Any other backend failure.
    #[error("store backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap an arbitrary backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => Self::Conflict {
                constraint: db_err.constraint().unwrap_or("unknown").to_string(),
            },
            other => Self::backend(other),
        }
    }
}

/// CRUD primitives over the user table.
///
/// Every call is a single statement against the store; there is no
/// multi-call transaction and no locking between concurrent callers.
#[async_trait]
pub trait UserStore: fmt::Debug + Send + Sync + 'static {
    /// All users, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// The user with the given id, if any.
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// The user with the given email, if any.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Insert a user and return it with its assigned id.
    async fn create(&self, user: &NewUser) -> StoreResult<User>;

    /// Overwrite the user with the given id. [`StoreError::NotFound`] when
    /// no such row exists.
    async fn update(&self, id: UserId, changes: &UserChanges) -> StoreResult<User>;

    /// Remove the user with the given id and return the removed row.
    /// [`StoreError::NotFound`] when no such row exists.
    async fn delete(&self, id: UserId) -> StoreResult<User>;

    /// Check that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Release backend resources. Called once on shutdown.
    async fn close(&self) {}
}
