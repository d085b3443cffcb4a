//! # userhub-service
//!
//! Business logic for the user resource. The service validates requests,
//! orchestrates calls against the injected record store and turns store
//! outcomes into [`AppError`](userhub_core::AppError)s whose messages are
//! safe to return to callers.
//!
//! Services follow constructor injection: the store is provided at
//! construction time as an `Arc<dyn UserStore>`.

pub mod user;

pub use user::{CreateUserRequest, UpdateUserRequest, UserService};
