use axum::Router;
use domain_events::{EventService, InMemoryEventRepository, PgEventRepository, handlers};

use crate::state::AppState;

/// Events router backed by Postgres when a pool is configured, memory otherwise.
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(EventService::new(PgEventRepository::new(db.clone()))),
        None => handlers::router(EventService::new(InMemoryEventRepository::new())),
    }
}
