//! Opens the record store selected by configuration.

use std::sync::Arc;

use tracing::info;

use userhub_core::config::{DatabaseConfig, StoreProvider};
use userhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::repositories::{MemoryUserStore, PgUserStore};
use crate::store::UserStore;

/// Open the configured user store.
///
/// For PostgreSQL this connects the pool and, when enabled, applies the
/// bundled migrations before returning. The returned handle is shared
/// for the lifetime of the process.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn UserStore>> {
    let store: Arc<dyn UserStore> = match config.provider {
        StoreProvider::Postgres => {
            info!("Initializing PostgreSQL user store");
            let pool = DatabasePool::connect(config).await?;
            if config.run_migrations {
                run_migrations(pool.pool()).await?;
            }
            Arc::new(PgUserStore::new(pool.into_pool()))
        }
        StoreProvider::Memory => {
            info!("Initializing in-memory user store");
            Arc::new(MemoryUserStore::new())
        }
    };

    Ok(store)
}
