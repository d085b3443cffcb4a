//! User CRUD orchestration over the record store.

use std::sync::Arc;

use tracing::{error, info, warn};

use userhub_core::error::{AppError, ErrorKind};
use userhub_database::store::{StoreError, UserStore};
use userhub_entity::user::{User, UserId};

use super::request::{CreateUserRequest, UpdateUserRequest};

const USER_NOT_FOUND: &str = "User not found";
const EMAIL_EXISTS: &str = "Email already exists";
const DUPLICATE_VALUE: &str = "Duplicate value";
const EMAIL_CONSTRAINT: &str = "users_email_key";
const INTERNAL_ERROR: &str = "Internal server error";

/// The store operation a failure happened in; selects the detail string
/// shown to the caller.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn detail(self) -> &'static str {
        match self {
            Self::Fetch => "Unable to fetch user",
            Self::Create => "Unable to create user",
            Self::Update => "Unable to update user",
            Self::Delete => "Unable to delete user",
        }
    }
}

/// Handles the user resource: list, get, create, update, delete.
#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service over the given store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Lists every user in store order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.store
            .find_all()
            .await
            .map_err(|e| store_failure(e, Operation::Fetch))
    }

    /// Gets a single user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<User, AppError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| store_failure(e, Operation::Fetch))?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    /// Creates a new user.
    ///
    /// The body is validated before the store is touched. An existing user
    /// with the same email is reported as a conflict and left untouched.
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, AppError> {
        let new_user = req.validate()?;

        let existing = self
            .store
            .find_by_email(&new_user.email)
            .await
            .map_err(|e| store_failure(e, Operation::Create))?;
        if existing.is_some() {
            return Err(AppError::conflict(EMAIL_EXISTS));
        }

        // A concurrent create can still win the race; the unique index
        // reports that as StoreError::Conflict.
        let user = self
            .store
            .create(&new_user)
            .await
            .map_err(|e| store_failure(e, Operation::Create))?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Overwrites a user.
    ///
    /// `tel` and `role` are reset to their defaults unless supplied.
    pub async fn update_user(&self, id: UserId, req: UpdateUserRequest) -> Result<User, AppError> {
        let changes = req.validate()?;

        let user = self
            .store
            .update(id, &changes)
            .await
            .map_err(|e| store_failure(e, Operation::Update))?;

        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Deletes a user and returns the removed record.
    pub async fn delete_user(&self, id: UserId) -> Result<User, AppError> {
        let user = self
            .store
            .delete(id)
            .await
            .map_err(|e| store_failure(e, Operation::Delete))?;

        info!(user_id = %user.id, "User deleted");
        Ok(user)
    }

    /// Checks that the store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store.ping().await.map_err(|e| {
            error!(error = %e, "Store health check failed");
            AppError::service_unavailable("Record store unavailable")
        })
    }
}

/// Translate a store outcome into a caller-safe error. Backend failures are
/// logged in full and collapsed to a generic message.
fn store_failure(err: StoreError, op: Operation) -> AppError {
    match err {
        StoreError::NotFound => AppError::not_found(USER_NOT_FOUND),
        StoreError::Conflict { constraint } if constraint == EMAIL_CONSTRAINT => {
            AppError::conflict(EMAIL_EXISTS)
        }
        StoreError::Conflict { constraint } => {
            warn!(constraint = %constraint, operation = ?op, "Unique constraint rejected write");
            AppError::conflict(DUPLICATE_VALUE)
        }
        StoreError::Backend(source) => {
            error!(error = %source, operation = ?op, "User store call failed");
            AppError {
                kind: ErrorKind::Database,
                message: INTERNAL_ERROR.to_string(),
                detail: Some(op.detail().to_string()),
                source: Some(source),
            }
        }
    }
}
