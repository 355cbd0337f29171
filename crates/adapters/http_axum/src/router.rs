//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use roster_app::ports::UserRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the user API at the root next to `/health`.
/// Includes a permissive [`CorsLayer`] so browser preflights succeed, and a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
