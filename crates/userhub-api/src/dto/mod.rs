//! Request and response bodies.

pub mod response;

pub use response::{ApiResponse, ErrorBody, ErrorDetail, HealthResponse};
pub use userhub_service::{CreateUserRequest, UpdateUserRequest};
