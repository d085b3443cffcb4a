//! # userhub-database
//!
//! The [`UserStore`] seam between the service layer and persistence,
//! with a PostgreSQL implementation on sqlx and a process-local one for
//! tests and throwaway deployments.

pub mod connection;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::open_store;
pub use repositories::{MemoryUserStore, PgUserStore};
pub use store::{StoreError, StoreResult, UserStore};
