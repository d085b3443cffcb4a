//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use userhub_core::config::AppConfig;
use userhub_database::store::UserStore;
use userhub_service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User resource service
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire the state around an opened store.
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> Self {
        Self {
            config: Arc::new(config),
            user_service: Arc::new(UserService::new(store)),
        }
    }
}
