//! # userhub-api
//!
//! HTTP API layer for UserHub built on Axum.
//!
//! Provides the `/users` REST endpoints and `/health`, the request
//! logging, CORS and compression middleware, typed extractors, the JSON
//! envelope DTOs and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
