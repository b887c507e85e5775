use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod blog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod views;

/// Assembles the full router: HTML pages at the root, the JSON API under
/// `/api`. Lives in the library so integration tests can drive it directly.
pub fn app(state: Arc<state::State>) -> axum::Router {
    axum::Router::new()
        .merge(routes::page::route())
        .nest("/api", routes::api::route())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
