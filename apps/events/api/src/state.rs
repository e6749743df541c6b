//! Shared application state, cloned into the routers that need it.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL pool, absent when running on in-memory storage
    pub db: Option<DatabaseConnection>,
}
