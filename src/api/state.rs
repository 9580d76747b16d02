//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::SessionWindow;
use crate::infra::{Database, UserRepository, UserStore};
use crate::services::{AuthService, Authenticator, UserManager, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database and config.
    ///
    /// Wires the SeaORM repository into the concrete services.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));
        let window = SessionWindow::from_minutes(config.jwt_expire_minutes);

        Self {
            auth_service: Arc::new(Authenticator::new(repo.clone(), config)),
            user_service: Arc::new(UserManager::new(repo, window)),
            database,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            database,
        }
    }
}
