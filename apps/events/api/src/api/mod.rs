use axum::Router;
use domain_events::Event;

pub mod events;
pub mod health;

/// API routes without the `/api` prefix, which `create_router` adds.
///
/// Returns a stateless router; every sub-router has its state applied.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(Event::COLLECTION_PATH, events::router(state))
}

/// `/ready` with real storage checks, merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
