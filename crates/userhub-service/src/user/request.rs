//! Request payloads for creating and updating users.
//!
//! Every field is optional at this level so that a missing field becomes a
//! validation error with a proper message rather than a deserialization
//! failure.

use serde::{Deserialize, Serialize};

use userhub_core::error::AppError;
use userhub_entity::user::{NewUser, UserChanges};

/// Message returned for any rejected create/update body.
pub(crate) const INVALID_BODY: &str = "Invalid request body";

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub tel: Option<String>,
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// Check required fields and build the insert.
    pub fn validate(self) -> Result<NewUser, AppError> {
        let (Some(name), Some(email)) = (present(self.name), present(self.email)) else {
            return Err(
                AppError::validation(INVALID_BODY).with_detail("name and email are required")
            );
        };

        Ok(NewUser::new(name, email, self.password, self.tel, self.role))
    }
}

/// Body of `PUT`/`PATCH /users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub tel: Option<String>,
    pub role: Option<String>,
}

impl UpdateUserRequest {
    /// Check required fields and build the replacement values.
    pub fn validate(self) -> Result<UserChanges, AppError> {
        let Some(name) = present(self.name) else {
            return Err(AppError::validation(INVALID_BODY).with_detail("name is required"));
        };

        if self.email.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::validation(INVALID_BODY).with_detail("email must not be empty"));
        }

        Ok(UserChanges::new(
            name,
            self.email,
            self.password,
            self.tel,
            self.role,
        ))
    }
}

/// `None` for an absent or empty string. Whitespace counts as a value.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
