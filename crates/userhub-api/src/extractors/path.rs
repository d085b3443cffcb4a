//! Typed path parameter extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use userhub_core::error::AppError;
use userhub_entity::user::UserId;

use crate::error::ApiError;

/// The `{id}` segment of `/users/{id}`, parsed as a [`UserId`].
///
/// Anything that is not a decimal integer is rejected with
/// `400 Invalid user id` before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Invalid user id"))?;

        Ok(Self(raw.parse()?))
    }
}
