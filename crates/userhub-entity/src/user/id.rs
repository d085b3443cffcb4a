//! Integer user identifier assigned by the record store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use userhub_core::AppError;

/// Primary key of a user row.
///
/// Parsing from a path segment accepts only a plain decimal integer that
/// fits the column type; anything else is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(pub i32);

impl UserId {
    /// Return the inner integer value.
    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| AppError::validation("Invalid user id"))
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}
