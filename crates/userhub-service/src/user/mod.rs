//! User resource operations.

pub mod request;
pub mod service;

pub use request::{CreateUserRequest, UpdateUserRequest};
pub use service::UserService;
