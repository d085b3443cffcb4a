//! User domain entities.

pub mod id;
pub mod model;
pub mod role;

pub use id::UserId;
pub use model::{NewUser, User, UserChanges};
pub use role::DEFAULT_ROLE;
