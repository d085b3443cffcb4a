//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::id::UserId;
use super::role::role_or_default;

/// A user row.
///
/// The password is persisted and returned exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique across all users.
    pub email: String,
    /// Password as received.
    pub password: Option<String>,
    /// Telephone number.
    pub tel: Option<String>,
    /// Free-form role label.
    pub role: String,
}

/// Data required to insert a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub tel: Option<String>,
    pub role: String,
}

impl NewUser {
    /// Build an insert, applying the `tel`/`role` defaults.
    pub fn new(
        name: String,
        email: String,
        password: Option<String>,
        tel: Option<String>,
        role: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            password,
            tel,
            role: role_or_default(role),
        }
    }

    /// Materialize the row the store would persist under `id`.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            tel: self.tel,
            role: self.role,
        }
    }
}

/// Replacement values for an existing user.
///
/// `name`, `tel` and `role` always overwrite the stored values, so an
/// omitted `tel` clears it and an omitted `role` resets it to the default.
/// `email` and `password` are only written when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub tel: Option<String>,
    pub role: String,
}

impl UserChanges {
    /// Build an update, applying the `tel`/`role` defaults.
    pub fn new(
        name: String,
        email: Option<String>,
        password: Option<String>,
        tel: Option<String>,
        role: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            password,
            tel,
            role: role_or_default(role),
        }
    }

    /// Apply the changes to a stored row in place.
    pub fn apply_to(self, user: &mut User) {
        user.name = self.name;
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = Some(password);
        }
        user.tel = self.tel;
        user.role = self.role;
    }
}
